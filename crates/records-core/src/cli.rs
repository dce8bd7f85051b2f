//! CLI-specific types and utilities.
//!
//! Strong types for CLI concepts: semantic exit codes and the output
//! target with its `-` stdout sentinel.
//!
//! # Examples
//!
//! ```
//! use cube_records_core::cli::{ExitCode, OutputTarget};
//!
//! let code = ExitCode::SUCCESS;
//! assert!(code.is_success());
//!
//! let target: OutputTarget = "-".parse().unwrap();
//! assert!(target.is_stdout());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// CLI exit code with semantic meaning.
///
/// Follows Unix conventions: success is 0, errors are non-zero.
///
/// # Examples
///
/// ```
/// use cube_records_core::cli::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert!(!ExitCode::FAILURE.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful completion.
    pub const SUCCESS: Self = Self(0);
    /// Generic failure.
    pub const FAILURE: Self = Self(1);

    /// Returns the raw exit code for `std::process::exit`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` if this code signals success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination for generated declarations.
///
/// A path of `-` selects standard output; anything else is treated as a
/// file path.
///
/// # Examples
///
/// ```
/// use cube_records_core::cli::OutputTarget;
/// use std::path::Path;
///
/// let stdout: OutputTarget = "-".parse().unwrap();
/// assert!(stdout.is_stdout());
///
/// let file: OutputTarget = "types/cube-records.d.ts".parse().unwrap();
/// assert_eq!(file.as_path(), Some(Path::new("types/cube-records.d.ts")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to standard output.
    Stdout,
    /// Write to the given file path.
    File(PathBuf),
}

impl OutputTarget {
    /// Returns `true` if this target is standard output.
    #[must_use]
    pub const fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Returns the file path, if any.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::File(path) => Some(path),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(crate::Error::InvalidArgument(
                "output path cannot be empty".to_string(),
            ));
        }
        if s == "-" {
            return Ok(Self::Stdout);
        }
        Ok(Self::File(PathBuf::from(s)))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
