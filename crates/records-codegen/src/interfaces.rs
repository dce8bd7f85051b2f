//! The standalone interface-and-union generator.
//!
//! Instead of augmenting an external module, this flavor emits a
//! self-contained set of declarations: two shared generic member
//! shapes, one interface per cube, a name-to-interface lookup map, and
//! union aliases over the generated interfaces.

use crate::decl::{Declaration, Field, InterfaceDecl, TsType};
use crate::naming::{member_property_name, pascal_case, ts_primitive};
use cube_records_core::{
    CubeDefinitionWithRelations, DimensionDefinition, MeasureDefinition, Result,
};
use tracing::debug;

const MODEL_SUFFIX: &str = "CubeModel";
const VIEW_SUFFIX: &str = "CubeView";

/// Generates one interface per cube plus shared member shapes and
/// union aliases.
///
/// Interface names derive from the cube title in Pascal case with a
/// `CubeModel` or `CubeView` suffix depending on the definition kind.
/// The `CubeModel`, `CubeView` and `CubeResource` union aliases are
/// each omitted when their member set would be empty.
///
/// # Examples
///
/// ```
/// use cube_records_codegen::{InterfaceGenerator, print_declarations};
///
/// let declarations = InterfaceGenerator::new().generate(&[]).unwrap();
/// let source = print_declarations(&declarations);
/// assert!(source.contains("interface CubeMeasure<T>"));
/// assert!(source.contains("interface CubeModelNameMap {}"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceGenerator;

impl InterfaceGenerator {
    /// Creates an interface generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Synthesizes the declaration sequence for the given cubes.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized scalar kind or a member name
    /// without a cube qualifier.
    #[allow(clippy::unused_self)] // kept as a method to mirror the record-map API
    pub fn generate(
        &self,
        definitions: &[CubeDefinitionWithRelations],
    ) -> Result<Vec<Declaration>> {
        debug!(cubes = definitions.len(), "generating interface declarations");

        let mut declarations = vec![measure_shape(), dimension_shape()];

        let mut name_map = Vec::with_capacity(definitions.len());
        let mut models = Vec::new();
        let mut views = Vec::new();
        for definition in definitions {
            let interface_name = interface_name(definition);
            declarations.push(cube_interface(definition, &interface_name)?);
            name_map.push(Field::required(
                definition.name(),
                TsType::reference(&interface_name),
            ));
            if definition.is_view() {
                views.push(TsType::reference(&interface_name));
            } else {
                models.push(TsType::reference(&interface_name));
            }
        }

        declarations.push(Declaration::Interface(InterfaceDecl {
            name: "CubeModelNameMap".to_string(),
            type_params: Vec::new(),
            fields: name_map,
        }));

        if !models.is_empty() {
            declarations.push(union_alias("CubeModel", models.clone()));
        }
        if !views.is_empty() {
            declarations.push(union_alias("CubeView", views.clone()));
        }
        let mut resources = models;
        resources.extend(views);
        if !resources.is_empty() {
            declarations.push(union_alias("CubeResource", resources));
        }

        Ok(declarations)
    }
}

fn interface_name(definition: &CubeDefinitionWithRelations) -> String {
    let suffix = if definition.is_view() {
        VIEW_SUFFIX
    } else {
        MODEL_SUFFIX
    };
    format!("{}{suffix}", pascal_case(&definition.cube.title))
}

fn measure_shape() -> Declaration {
    Declaration::Interface(InterfaceDecl {
        name: "CubeMeasure".to_string(),
        type_params: vec!["T".to_string()],
        fields: vec![
            Field::required("type", TsType::reference("T")),
            Field::optional("__cubetype", TsType::reference("string")),
        ],
    })
}

fn dimension_shape() -> Declaration {
    Declaration::Interface(InterfaceDecl {
        name: "CubeDimension".to_string(),
        type_params: vec!["T".to_string()],
        fields: vec![
            Field::required("type", TsType::reference("T")),
            Field::required("__cubetype", TsType::reference("string")),
        ],
    })
}

fn cube_interface(
    definition: &CubeDefinitionWithRelations,
    interface_name: &str,
) -> Result<Declaration> {
    let fields = vec![
        Field::required("name", TsType::literal(definition.name())),
        Field::required("measures", member_shapes(&definition.cube.measures, member_measure)?),
        Field::required(
            "dimensions",
            member_shapes(&definition.cube.dimensions, member_dimension)?,
        ),
        Field::required(
            "joins",
            TsType::Tuple(
                definition
                    .joins
                    .iter()
                    .map(|join| TsType::StringLiteral(join.to_lowercase()))
                    .collect(),
            ),
        ),
        Field::required(
            "segments",
            TsType::Tuple(
                definition
                    .cube
                    .segments
                    .iter()
                    .map(|segment| TsType::literal(&segment.name))
                    .collect(),
            ),
        ),
    ];

    Ok(Declaration::Interface(InterfaceDecl {
        name: interface_name.to_string(),
        type_params: Vec::new(),
        fields,
    }))
}

trait Member {
    fn name(&self) -> &str;
    fn scalar_type(&self) -> &cube_records_core::ScalarType;
}

impl Member for MeasureDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn scalar_type(&self) -> &cube_records_core::ScalarType {
        &self.scalar_type
    }
}

impl Member for DimensionDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn scalar_type(&self) -> &cube_records_core::ScalarType {
        &self.scalar_type
    }
}

fn member_shapes<M: Member>(
    members: &[M],
    shape: fn(TsType) -> TsType,
) -> Result<TsType> {
    let mut fields = Vec::with_capacity(members.len());
    for member in members {
        let property = member_property_name(member.name())?;
        let primitive = ts_primitive(member.scalar_type())?;
        fields.push(Field::required(
            property,
            shape(TsType::Primitive(primitive)),
        ));
    }
    Ok(TsType::Object(fields))
}

fn member_measure(primitive: TsType) -> TsType {
    TsType::Reference {
        name: "CubeMeasure".to_string(),
        args: vec![primitive],
    }
}

fn member_dimension(primitive: TsType) -> TsType {
    TsType::Reference {
        name: "CubeDimension".to_string(),
        args: vec![primitive],
    }
}

fn union_alias(name: &str, members: Vec<TsType>) -> Declaration {
    let ty = if members.len() == 1 {
        members.into_iter().next().unwrap_or(TsType::Union(Vec::new()))
    } else {
        TsType::Union(members)
    };
    Declaration::TypeAlias {
        name: name.to_string(),
        ty,
    }
}
