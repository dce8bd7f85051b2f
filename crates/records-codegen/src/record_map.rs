//! The `CubeRecordMap` module-augmentation generator.
//!
//! Emits a `declare module` block whose `CubeRecordMap` interface is
//! merged by name into the consuming package's ambient map type, so
//! application code extends one registry of cube shapes.

use crate::decl::{Declaration, Field, InterfaceDecl, TsType};
use crate::naming::{member_property_name, ts_primitive};
use cube_records_core::{
    CubeDefinitionWithRelations, DimensionDefinition, MeasureDefinition, Result,
};
use tracing::debug;

/// Module specifier the generated augmentation merges into.
pub const DEFAULT_MODULE: &str = "cube-records";

/// Generates the `CubeRecordMap` augmentation from augmented cube
/// definitions.
///
/// Each cube becomes an entry keyed by its lowercased name, mapping to
/// `{ measures, dimensions, joins? }`. Measure and dimension entries
/// carry their mapped primitive type plus a `__cubetype` literal of the
/// original scalar kind — optional on measures, mandatory on dimensions
/// so callers can tell a string-typed dimension from a temporal one.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::{RecordMapGenerator, print_declarations};
///
/// let generator = RecordMapGenerator::new();
/// let declarations = generator.generate(&[]).unwrap();
/// let source = print_declarations(&declarations);
/// assert!(source.contains("interface CubeRecordMap {}"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordMapGenerator {
    module: String,
}

impl Default for RecordMapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordMapGenerator {
    /// Creates a generator targeting the default module.
    #[must_use]
    pub fn new() -> Self {
        Self::with_module(DEFAULT_MODULE)
    }

    /// Creates a generator augmenting the given module specifier.
    #[must_use]
    pub fn with_module(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
        }
    }

    /// Synthesizes the declaration sequence for the given cubes.
    ///
    /// Emission order is input order. An empty input still yields a
    /// well-formed (empty) `CubeRecordMap`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized scalar kind or a member name
    /// without a cube qualifier.
    pub fn generate(
        &self,
        definitions: &[CubeDefinitionWithRelations],
    ) -> Result<Vec<Declaration>> {
        debug!(cubes = definitions.len(), "generating record map declarations");

        let mut entries = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let shape = TsType::Object(vec![
                Field::required("measures", measures_type(&definition.cube.measures)?),
                Field::required("dimensions", dimensions_type(&definition.cube.dimensions)?),
                Field::optional("joins", joins_type(&definition.joins)),
            ]);
            entries.push(Field::required(definition.name().to_lowercase(), shape));
        }

        let record_map = Declaration::Interface(InterfaceDecl {
            name: "CubeRecordMap".to_string(),
            type_params: Vec::new(),
            fields: entries,
        });

        Ok(vec![
            Declaration::Import {
                module: self.module.clone(),
            },
            Declaration::ModuleAugmentation {
                module: self.module.clone(),
                body: vec![record_map],
            },
            Declaration::EmptyExport,
        ])
    }
}

fn measures_type(measures: &[MeasureDefinition]) -> Result<TsType> {
    let mut fields = Vec::with_capacity(measures.len());
    for measure in measures {
        let property = member_property_name(&measure.name)?;
        let primitive = ts_primitive(&measure.scalar_type)?;
        fields.push(Field::required(
            property,
            TsType::Object(vec![
                Field::required("type", TsType::Primitive(primitive)),
                Field::optional("__cubetype", TsType::literal(measure.scalar_type.as_str())),
            ]),
        ));
    }
    Ok(TsType::Object(fields))
}

fn dimensions_type(dimensions: &[DimensionDefinition]) -> Result<TsType> {
    let mut fields = Vec::with_capacity(dimensions.len());
    for dimension in dimensions {
        let property = member_property_name(&dimension.name)?;
        let primitive = ts_primitive(&dimension.scalar_type)?;
        fields.push(Field::required(
            property,
            TsType::Object(vec![
                Field::required("type", TsType::Primitive(primitive)),
                // Mandatory on dimensions: time filtering needs the
                // original kind even though the value type is string.
                Field::required("__cubetype", TsType::literal(dimension.scalar_type.as_str())),
            ]),
        ));
    }
    Ok(TsType::Object(fields))
}

fn joins_type(joins: &[String]) -> TsType {
    TsType::Tuple(
        joins
            .iter()
            .map(|join| TsType::StringLiteral(join.to_lowercase()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_records_core::CubeDefinition;

    fn definition(json: &str, joins: Vec<&str>) -> CubeDefinitionWithRelations {
        let cube: CubeDefinition = serde_json::from_str(json).unwrap();
        CubeDefinitionWithRelations {
            cube,
            joins: joins.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let declarations = RecordMapGenerator::new().generate(&[]).unwrap();
        assert_eq!(declarations.len(), 3);
        assert!(matches!(declarations[0], Declaration::Import { .. }));
        assert!(matches!(declarations[2], Declaration::EmptyExport));

        let Declaration::ModuleAugmentation { body, .. } = &declarations[1] else {
            panic!("expected module augmentation");
        };
        let Declaration::Interface(map) = &body[0] else {
            panic!("expected CubeRecordMap interface");
        };
        assert_eq!(map.name, "CubeRecordMap");
        assert!(map.fields.is_empty());
    }

    #[test]
    fn test_cube_entry_keyed_by_lowercased_name() {
        let orders = definition(
            r#"{"name": "Orders", "type": "cube", "title": "Orders"}"#,
            vec!["Users"],
        );
        let declarations = RecordMapGenerator::new().generate(&[orders]).unwrap();

        let Declaration::ModuleAugmentation { body, .. } = &declarations[1] else {
            panic!("expected module augmentation");
        };
        let Declaration::Interface(map) = &body[0] else {
            panic!("expected CubeRecordMap interface");
        };
        assert_eq!(map.fields[0].name, "orders");
    }

    #[test]
    fn test_joins_are_lowercased_literals() {
        let orders = definition(
            r#"{"name": "Orders", "type": "cube", "title": "Orders"}"#,
            vec!["Users", "Products"],
        );
        let declarations = RecordMapGenerator::new().generate(&[orders]).unwrap();
        let source = crate::print_declarations(&declarations);

        assert!(source.contains("joins?: [\"users\", \"products\"];"));
    }

    #[test]
    fn test_unknown_measure_kind_is_rejected() {
        let bad = definition(
            r#"{
                "name": "Orders", "type": "cube", "title": "Orders",
                "measures": [{"name": "Orders.count", "title": "Count", "type": "geo"}]
            }"#,
            vec![],
        );
        let err = RecordMapGenerator::new().generate(&[bad]).unwrap_err();
        assert!(err.is_unknown_scalar_type());
        assert!(format!("{err}").contains("geo"));
    }

    #[test]
    fn test_member_name_without_qualifier_is_rejected() {
        let bad = definition(
            r#"{
                "name": "Orders", "type": "cube", "title": "Orders",
                "dimensions": [{"name": "status", "title": "Status", "type": "string"}]
            }"#,
            vec![],
        );
        let err = RecordMapGenerator::new().generate(&[bad]).unwrap_err();
        assert!(format!("{err}").contains("status"));
    }

    #[test]
    fn test_custom_module_specifier() {
        let generator = RecordMapGenerator::with_module("@acme/records");
        let declarations = generator.generate(&[]).unwrap();
        let source = crate::print_declarations(&declarations);
        assert!(source.contains("import \"@acme/records\";"));
        assert!(source.contains("declare module \"@acme/records\""));
    }
}
