//! Abstract declaration model.
//!
//! A small, language-neutral description of the type shapes the generator
//! emits: named aggregates of typed fields where a field's type is a
//! primitive, a nested aggregate, a fixed tuple of string literals, or a
//! reference to another named declaration. Declarations cross-reference
//! each other acyclically; the printer renders them as TypeScript.

/// Primitive scalar target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `number`
    Number,
    /// `string`
    String,
    /// `boolean`
    Boolean,
}

impl Primitive {
    /// Returns the TypeScript keyword for this primitive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

/// A type expression appearing in a field position.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// A primitive keyword type.
    Primitive(Primitive),
    /// A literal string type, e.g. `"time"`.
    StringLiteral(String),
    /// A fixed-length ordered tuple, e.g. `["users", "products"]`.
    Tuple(Vec<TsType>),
    /// An inline aggregate of named fields.
    Object(Vec<Field>),
    /// A reference to another named declaration, optionally with type
    /// arguments, e.g. `CubeMeasure<number>`.
    Reference {
        /// Name of the referenced declaration.
        name: String,
        /// Type arguments, empty for a bare reference.
        args: Vec<TsType>,
    },
    /// A union of alternatives.
    Union(Vec<TsType>),
}

impl TsType {
    /// Creates a bare reference to a named declaration.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a literal string type.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }
}

/// A named, typed field inside an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property name.
    pub name: String,
    /// Whether the property carries a `?` marker.
    pub optional: bool,
    /// The field's type.
    pub ty: TsType,
}

impl Field {
    /// Creates a required field.
    #[must_use]
    pub fn required(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            optional: true,
            ty,
        }
    }
}

/// A named interface declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    /// Interface name.
    pub name: String,
    /// Generic type parameter names, empty for a plain interface.
    pub type_params: Vec<String>,
    /// Interface members.
    pub fields: Vec<Field>,
}

/// One top-level emitted declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A bare side-effect import of the consuming module.
    Import {
        /// Module specifier.
        module: String,
    },
    /// An interface declaration.
    Interface(InterfaceDecl),
    /// A type alias, used for unions.
    TypeAlias {
        /// Alias name.
        name: String,
        /// Aliased type.
        ty: TsType,
    },
    /// A `declare module` augmentation wrapping nested declarations.
    ModuleAugmentation {
        /// Module specifier being augmented.
        module: String,
        /// Declarations merged into the module.
        body: Vec<Declaration>,
    },
    /// An empty `export {}` marking the file as a module.
    EmptyExport,
}

impl Declaration {
    /// Returns the declaration's name, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_codegen::{Declaration, TsType};
    ///
    /// let alias = Declaration::TypeAlias {
    ///     name: "CubeModel".to_string(),
    ///     ty: TsType::reference("OrdersCubeModel"),
    /// };
    /// assert_eq!(alias.name(), Some("CubeModel"));
    /// assert_eq!(Declaration::EmptyExport.name(), None);
    /// ```
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Interface(decl) => Some(&decl.name),
            Self::TypeAlias { name, .. } => Some(name),
            Self::Import { .. } | Self::ModuleAugmentation { .. } | Self::EmptyExport => None,
        }
    }
}
