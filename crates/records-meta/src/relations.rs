//! Join-relation grouping.
//!
//! The meta endpoint tags each cube with an optional `connectedComponent`
//! identifier; cubes sharing a value are mutually reachable via joins.
//! This module derives the per-cube `joins` list from those groups.

use cube_records_core::{CubeDefinition, CubeDefinitionWithRelations};
use std::collections::HashMap;

/// Augments every cube with the names of its join-connected siblings.
///
/// Cubes are bucketed by their stringified `connectedComponent`; a cube
/// with no component is dropped from bucketing outright, so it both
/// resolves to an empty `joins` list and never appears in any other
/// cube's `joins`. A cube never lists its own name, even if it occurs in
/// its group more than once. Output order matches input order; grouping
/// is only used for lookup.
///
/// This is a total, pure transformation: it cannot fail for any
/// well-formed input.
///
/// # Examples
///
/// ```
/// use cube_records_meta::resolve_relations;
/// use cube_records_core::CubeDefinition;
///
/// let cubes: Vec<CubeDefinition> = serde_json::from_str(
///     r#"[
///         {"name": "Orders", "type": "cube", "title": "Orders", "connectedComponent": 1},
///         {"name": "Users", "type": "cube", "title": "Users", "connectedComponent": 1}
///     ]"#,
/// )
/// .unwrap();
///
/// let resolved = resolve_relations(cubes);
/// assert_eq!(resolved[0].joins, vec!["Users"]);
/// assert_eq!(resolved[1].joins, vec!["Orders"]);
/// ```
#[must_use]
pub fn resolve_relations(cubes: Vec<CubeDefinition>) -> Vec<CubeDefinitionWithRelations> {
    let buckets = group_by_component(&cubes);

    let joins: Vec<Vec<String>> = cubes
        .iter()
        .map(|cube| {
            let Some(component) = cube.connected_component else {
                return Vec::new();
            };
            buckets
                .get(&component.to_string())
                .map(|members| {
                    members
                        .iter()
                        .filter(|name| *name != &cube.name)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        })
        .collect();

    cubes
        .into_iter()
        .zip(joins)
        .map(|(cube, joins)| CubeDefinitionWithRelations { cube, joins })
        .collect()
}

/// Buckets cube names by stringified connectivity group, skipping cubes
/// with no `connectedComponent`.
fn group_by_component(cubes: &[CubeDefinition]) -> HashMap<String, Vec<String>> {
    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
    for cube in cubes {
        if let Some(component) = cube.connected_component {
            buckets
                .entry(component.to_string())
                .or_default()
                .push(cube.name.clone());
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_records_core::CubeType;

    fn cube(name: &str, component: Option<i64>) -> CubeDefinition {
        CubeDefinition {
            name: name.to_string(),
            cube_type: CubeType::Cube,
            title: name.to_string(),
            is_visible: true,
            public: true,
            description: None,
            connected_component: component,
            measures: Vec::new(),
            dimensions: Vec::new(),
            segments: Vec::new(),
        }
    }

    #[test]
    fn test_two_cubes_sharing_component_reference_each_other() {
        let resolved = resolve_relations(vec![cube("Orders", Some(1)), cube("Users", Some(1))]);

        assert_eq!(resolved[0].joins, vec!["Users"]);
        assert_eq!(resolved[1].joins, vec!["Orders"]);
    }

    #[test]
    fn test_singleton_component_yields_empty_joins() {
        let resolved = resolve_relations(vec![cube("Products", Some(2))]);

        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].joins.is_empty());
    }

    #[test]
    fn test_multiple_components_group_independently() {
        let resolved = resolve_relations(vec![
            cube("A", Some(1)),
            cube("B", Some(1)),
            cube("C", Some(2)),
            cube("D", Some(2)),
        ]);

        assert_eq!(resolved[0].joins, vec!["B"]);
        assert_eq!(resolved[1].joins, vec!["A"]);
        assert_eq!(resolved[2].joins, vec!["D"]);
        assert_eq!(resolved[3].joins, vec!["C"]);
    }

    #[test]
    fn test_missing_component_is_invisible_to_grouping() {
        let resolved = resolve_relations(vec![
            cube("Orders", Some(1)),
            cube("Orphan", None),
            cube("Users", Some(1)),
        ]);

        // The orphan resolves to no joins and no sibling references it.
        assert_eq!(resolved[1].joins, Vec::<String>::new());
        assert_eq!(resolved[0].joins, vec!["Users"]);
        assert_eq!(resolved[2].joins, vec!["Orders"]);
    }

    #[test]
    fn test_cube_never_joins_itself_under_duplicate_entries() {
        // Duplicate name in the same connectivity group
        let resolved = resolve_relations(vec![
            cube("Orders", Some(1)),
            cube("Orders", Some(1)),
            cube("Users", Some(1)),
        ]);

        for entry in resolved.iter().take(2) {
            assert!(!entry.joins.contains(&"Orders".to_string()));
            assert_eq!(entry.joins, vec!["Users"]);
        }
    }

    #[test]
    fn test_sibling_set_independent_of_payload_order() {
        let forward = resolve_relations(vec![
            cube("A", Some(7)),
            cube("B", Some(7)),
            cube("C", Some(7)),
        ]);
        let reversed = resolve_relations(vec![
            cube("C", Some(7)),
            cube("B", Some(7)),
            cube("A", Some(7)),
        ]);

        let forward_a: Vec<_> = forward[0].joins.iter().collect();
        let mut reversed_a: Vec<_> = reversed[2].joins.iter().collect();
        reversed_a.sort();
        assert_eq!(forward_a, vec!["B", "C"]);
        assert_eq!(reversed_a, vec!["B", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_relations(Vec::new()).is_empty());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let resolved = resolve_relations(vec![
            cube("Z", Some(1)),
            cube("A", Some(2)),
            cube("M", None),
        ]);

        let names: Vec<_> = resolved.iter().map(CubeDefinitionWithRelations::name).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }
}
