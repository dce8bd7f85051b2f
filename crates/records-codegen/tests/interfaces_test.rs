//! End-to-end rendering tests for the interfaces flavor.

use cube_records_codegen::{GeneratorFlavor, generate_declarations, print_declarations};
use cube_records_core::{CubeDefinitionWithRelations, MetaResponse};

fn fixture() -> Vec<CubeDefinitionWithRelations> {
    let meta: MetaResponse = serde_json::from_str(
        r#"{
            "cubes": [
                {
                    "name": "Orders",
                    "type": "cube",
                    "title": "Orders",
                    "connectedComponent": 1,
                    "measures": [
                        {"name": "Orders.count", "title": "Count", "type": "number"}
                    ],
                    "dimensions": [
                        {"name": "Orders.order_date", "title": "Order Date", "type": "time"}
                    ],
                    "segments": [
                        {"name": "Orders.completed", "title": "Completed"}
                    ]
                },
                {
                    "name": "Users",
                    "type": "cube",
                    "title": "Users",
                    "connectedComponent": 1
                },
                {
                    "name": "OrdersView",
                    "type": "view",
                    "title": "Orders View",
                    "dimensions": [
                        {"name": "OrdersView.status", "title": "Status", "type": "string"}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    cube_records_meta::resolve_relations(meta.cubes)
}

#[test]
fn test_emits_shared_shapes_then_interfaces_then_unions() {
    let declarations = generate_declarations(GeneratorFlavor::Interfaces, &fixture()).unwrap();
    let names: Vec<_> = declarations
        .iter()
        .filter_map(cube_records_codegen::Declaration::name)
        .collect();

    assert_eq!(
        names,
        vec![
            "CubeMeasure",
            "CubeDimension",
            "OrdersCubeModel",
            "UsersCubeModel",
            "OrdersViewCubeView",
            "CubeModelNameMap",
            "CubeModel",
            "CubeView",
            "CubeResource",
        ]
    );
}

#[test]
fn test_renders_generic_shapes_and_member_references() {
    let declarations = generate_declarations(GeneratorFlavor::Interfaces, &fixture()).unwrap();
    let source = print_declarations(&declarations);

    assert!(source.contains("interface CubeMeasure<T> {"));
    assert!(source.contains("__cubetype?: string;"));
    assert!(source.contains("interface CubeDimension<T> {"));
    assert!(source.contains("__cubetype: string;"));
    assert!(source.contains("count: CubeMeasure<number>;"));
    assert!(source.contains("order_date: CubeDimension<string>;"));
    assert!(source.contains("status: CubeDimension<string>;"));
}

#[test]
fn test_renders_unions_and_name_map() {
    let declarations = generate_declarations(GeneratorFlavor::Interfaces, &fixture()).unwrap();
    let source = print_declarations(&declarations);

    assert!(source.contains("type CubeModel = OrdersCubeModel | UsersCubeModel;"));
    assert!(source.contains("type CubeView = OrdersViewCubeView;"));
    assert!(source.contains(
        "type CubeResource = OrdersCubeModel | UsersCubeModel | OrdersViewCubeView;"
    ));
    assert!(source.contains("Orders: OrdersCubeModel;"));
    assert!(source.contains("OrdersView: OrdersViewCubeView;"));
}

#[test]
fn test_view_without_component_has_empty_joins() {
    let declarations = generate_declarations(GeneratorFlavor::Interfaces, &fixture()).unwrap();
    let source = print_declarations(&declarations);

    assert!(source.contains("name: \"OrdersView\";"));
    assert!(source.contains("joins: [];"));
    assert!(source.contains("joins: [\"users\"];"));
    assert!(source.contains("segments: [\"Orders.completed\"];"));
}

#[test]
fn test_empty_meta_omits_unions() {
    let declarations = generate_declarations(GeneratorFlavor::Interfaces, &[]).unwrap();
    let source = print_declarations(&declarations);

    assert_eq!(declarations.len(), 3);
    assert!(!source.contains("type CubeModel"));
    assert!(!source.contains("type CubeResource"));
    assert!(source.contains("interface CubeModelNameMap {}"));
}
