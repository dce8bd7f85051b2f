//! Cube metadata types mirroring the `/v1/meta` wire format.
//!
//! These types deserialize the payload returned by a Cube-style analytics
//! server. Visibility flags are carried so collaborators can filter on
//! them, but the grouping and synthesis algorithms do not consume them.
//!
//! # Examples
//!
//! ```
//! use cube_records_core::{MetaResponse, ScalarType};
//!
//! let payload = r#"{
//!     "cubes": [{
//!         "name": "Orders",
//!         "type": "cube",
//!         "title": "Orders",
//!         "connectedComponent": 1,
//!         "measures": [],
//!         "dimensions": [],
//!         "segments": []
//!     }]
//! }"#;
//!
//! let meta: MetaResponse = serde_json::from_str(payload).unwrap();
//! assert_eq!(meta.cubes.len(), 1);
//! assert_eq!(meta.cubes[0].connected_component, Some(1));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entity is a base model or a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeType {
    /// A base analytical model.
    Cube,
    /// A view derived from one or more cubes.
    View,
}

/// Scalar kind of a measure or dimension.
///
/// The endpoint reports one of `number`, `string`, `time`, or `boolean`.
/// Anything else is carried verbatim in [`ScalarType::Other`] so that the
/// synthesizer, not deserialization, owns the failure and can name the
/// offending kind in its error.
///
/// # Examples
///
/// ```
/// use cube_records_core::ScalarType;
///
/// let kind: ScalarType = serde_json::from_str("\"time\"").unwrap();
/// assert_eq!(kind, ScalarType::Time);
///
/// let unknown: ScalarType = serde_json::from_str("\"geo\"").unwrap();
/// assert_eq!(unknown, ScalarType::Other("geo".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScalarType {
    /// Numeric value.
    Number,
    /// Textual value.
    String,
    /// Temporal value; represented textually in generated declarations.
    Time,
    /// Boolean value.
    Boolean,
    /// Unrecognized kind, preserved verbatim for error reporting.
    Other(String),
}

impl ScalarType {
    /// Returns the scalar kind as reported by the endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::ScalarType;
    ///
    /// assert_eq!(ScalarType::Time.as_str(), "time");
    /// assert_eq!(ScalarType::Other("geo".to_string()).as_str(), "geo");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Time => "time",
            Self::Boolean => "boolean",
            Self::Other(kind) => kind,
        }
    }
}

impl From<String> for ScalarType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "number" => Self::Number,
            "string" => Self::String,
            "time" => Self::Time,
            "boolean" => Self::Boolean,
            _ => Self::Other(s),
        }
    }
}

impl From<ScalarType> for String {
    fn from(kind: ScalarType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantitative, aggregatable field on a cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureDefinition {
    /// Dot-qualified member name (`<cubeName>.<fieldName>`).
    pub name: String,
    /// Human display title.
    pub title: String,
    /// Short display title.
    #[serde(default)]
    pub short_title: String,
    /// Scalar kind of the measure.
    #[serde(rename = "type")]
    pub scalar_type: ScalarType,
    /// Aggregation kind (`sum`, `avg`, `count`, ...); not consumed by
    /// the synthesis algorithms.
    #[serde(default)]
    pub agg_type: Option<String>,
    /// Whether the measure is visible.
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the measure is public.
    #[serde(default)]
    pub public: bool,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A categorical or temporal field on a cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDefinition {
    /// Dot-qualified member name (`<cubeName>.<fieldName>`).
    pub name: String,
    /// Human display title.
    pub title: String,
    /// Short display title.
    #[serde(default)]
    pub short_title: String,
    /// Scalar kind of the dimension.
    #[serde(rename = "type")]
    pub scalar_type: ScalarType,
    /// Whether filter values should be suggested for this dimension.
    #[serde(default)]
    pub suggest_filter_values: bool,
    /// Whether the dimension is visible.
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the dimension is public.
    #[serde(default)]
    pub public: bool,
    /// Whether this dimension is the cube's primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A named segment on a cube; name-only as far as synthesis is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDefinition {
    /// Dot-qualified segment name.
    pub name: String,
    /// Human display title.
    #[serde(default)]
    pub title: String,
    /// Short display title.
    #[serde(default)]
    pub short_title: String,
    /// Whether the segment is visible.
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the segment is public.
    #[serde(default)]
    pub public: bool,
}

/// One analytical model or view as retrieved from the meta endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeDefinition {
    /// Unique, case-sensitive identifier as supplied by the endpoint.
    pub name: String,
    /// Whether this entity is a base model or a derived view.
    #[serde(rename = "type")]
    pub cube_type: CubeType,
    /// Human display title; used to derive identifier names.
    pub title: String,
    /// Whether the cube is visible.
    #[serde(default)]
    pub is_visible: bool,
    /// Whether the cube is public.
    #[serde(default)]
    pub public: bool,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Endpoint-assigned join-connectivity group. Cubes sharing a value
    /// are mutually reachable via joins; `None` means the cube takes part
    /// in no grouping at all.
    #[serde(default)]
    pub connected_component: Option<i64>,
    /// Measures exposed by the cube, in endpoint order.
    #[serde(default)]
    pub measures: Vec<MeasureDefinition>,
    /// Dimensions exposed by the cube, in endpoint order.
    #[serde(default)]
    pub dimensions: Vec<DimensionDefinition>,
    /// Segments exposed by the cube, in endpoint order.
    #[serde(default)]
    pub segments: Vec<SegmentDefinition>,
}

impl CubeDefinition {
    /// Returns `true` if this entity is a derived view.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::{CubeDefinition, CubeType};
    ///
    /// let payload = r#"{"name": "OrdersView", "type": "view", "title": "Orders View"}"#;
    /// let cube: CubeDefinition = serde_json::from_str(payload).unwrap();
    /// assert!(cube.is_view());
    /// ```
    #[must_use]
    pub fn is_view(&self) -> bool {
        self.cube_type == CubeType::View
    }
}

/// Wire shape of the meta endpoint response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Flat list of cube definitions.
    pub cubes: Vec<CubeDefinition>,
}

/// A [`CubeDefinition`] augmented with its resolved join targets.
///
/// `joins` is derived once per retrieval from shared connectivity groups
/// and never mutated afterward. It lists the names of the other cubes in
/// this cube's group, in endpoint order, never including the cube itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeDefinitionWithRelations {
    /// The underlying cube definition.
    #[serde(flatten)]
    pub cube: CubeDefinition,
    /// Names of cubes reachable via this cube's connectivity group.
    pub joins: Vec<String>,
}

impl CubeDefinitionWithRelations {
    /// Returns the cube's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.cube.name
    }

    /// Returns `true` if this entity is a derived view.
    #[must_use]
    pub fn is_view(&self) -> bool {
        self.cube.is_view()
    }
}
