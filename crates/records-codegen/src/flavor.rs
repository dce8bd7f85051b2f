//! Output flavor selection.

use std::fmt;
use std::str::FromStr;

use crate::decl::Declaration;
use crate::interfaces::InterfaceGenerator;
use crate::record_map::RecordMapGenerator;
use cube_records_core::{CubeDefinitionWithRelations, Error, Result};

/// The shape of the emitted declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorFlavor {
    /// Augment the consuming package's `CubeRecordMap` interface.
    #[default]
    RecordMap,
    /// Emit standalone per-cube interfaces with union aliases.
    Interfaces,
}

impl GeneratorFlavor {
    /// Returns the canonical command-line spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RecordMap => "record-map",
            Self::Interfaces => "interfaces",
        }
    }
}

impl fmt::Display for GeneratorFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorFlavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "record-map" => Ok(Self::RecordMap),
            "interfaces" => Ok(Self::Interfaces),
            other => Err(Error::InvalidArgument(format!(
                "unknown output flavor '{other}' (expected 'record-map' or 'interfaces')"
            ))),
        }
    }
}

/// Runs the generator for the chosen flavor over the given cubes.
///
/// # Errors
///
/// Returns an error for an unrecognized scalar kind or a member name
/// without a cube qualifier.
pub fn generate_declarations(
    flavor: GeneratorFlavor,
    definitions: &[CubeDefinitionWithRelations],
) -> Result<Vec<Declaration>> {
    match flavor {
        GeneratorFlavor::RecordMap => RecordMapGenerator::new().generate(definitions),
        GeneratorFlavor::Interfaces => InterfaceGenerator::new().generate(definitions),
    }
}
