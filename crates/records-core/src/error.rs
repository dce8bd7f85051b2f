//! Error types for cube-records.
//!
//! This module provides the error hierarchy shared by the retriever, the
//! synthesizer, and the CLI. Every failure carries enough context to name
//! the offending input; nothing is downgraded to a warning or silently
//! defaulted, since generated declarations must be exact.
//!
//! # Examples
//!
//! ```
//! use cube_records_core::{Error, Result};
//!
//! fn check_base_url(url: &str) -> Result<()> {
//!     if url.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "base URL cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_base_url("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for cube-records.
///
/// All errors in the system use this type, providing consistent error
/// handling across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Metadata retrieval failed.
    ///
    /// This error occurs when the HTTP fetch from the meta endpoint fails,
    /// returns a non-2xx status, or produces a body that is not valid JSON
    /// of the expected shape. The failure propagates unchanged; there is
    /// no retry.
    #[error("metadata retrieval failed: {endpoint}")]
    RetrievalFailed {
        /// The meta endpoint URL that was queried
        endpoint: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A measure or dimension reported a scalar kind outside
    /// `{number, string, time, boolean}`.
    ///
    /// Raised by the synthesizer, naming the offending kind. This is a hard
    /// stop: guessing a type would produce incorrect generated declarations.
    #[error("unknown dimension type: {kind}")]
    UnknownScalarType {
        /// The unrecognized scalar kind as received from the endpoint
        kind: String,
    },

    /// A measure or dimension name is not dot-qualified.
    ///
    /// Member names arrive as `<cubeName>.<fieldName>`; a name without a
    /// `.` yields no usable field identifier.
    #[error("malformed member name: '{name}' has no cube qualifier")]
    MalformedMemberName {
        /// The member name that could not be split
        name: String,
    },

    /// Configuration error.
    ///
    /// Raised when generator options are invalid, missing required fields,
    /// or contain contradictory settings.
    #[error("configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing generated output failed.
    ///
    /// The failure is propagated unchanged; the process exits non-zero.
    #[error("failed to write output to {path}")]
    WriteFailed {
        /// Destination path that could not be written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a retrieval error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::Error;
    ///
    /// let err = Error::RetrievalFailed {
    ///     endpoint: "http://localhost:4000/cube-api/v1/meta".to_string(),
    ///     source: "connection refused".into(),
    /// };
    /// assert!(err.is_retrieval_error());
    /// ```
    #[must_use]
    pub const fn is_retrieval_error(&self) -> bool {
        matches!(self, Self::RetrievalFailed { .. })
    }

    /// Returns `true` if this is an unknown scalar kind error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::Error;
    ///
    /// let err = Error::UnknownScalarType {
    ///     kind: "geo".to_string(),
    /// };
    /// assert!(err.is_unknown_scalar_type());
    /// ```
    #[must_use]
    pub const fn is_unknown_scalar_type(&self) -> bool {
        matches!(self, Self::UnknownScalarType { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "empty base URL".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a write failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::Error;
    ///
    /// let err = Error::WriteFailed {
    ///     path: "/readonly/types.d.ts".to_string(),
    ///     source: std::io::Error::other("permission denied"),
    /// };
    /// assert!(err.is_write_error());
    /// ```
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteFailed { .. })
    }
}

/// Result type alias for cube-records operations.
///
/// This is a convenience alias for `Result<T, Error>` used throughout
/// the codebase.
pub type Result<T> = std::result::Result<T, Error>;
