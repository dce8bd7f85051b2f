//! Generator configuration.
//!
//! This module provides the options consumed by the generation runner:
//! endpoint location, watch-mode behavior, and cube filtering.
//!
//! # Examples
//!
//! ```
//! use cube_records_core::GeneratorOptions;
//! use std::time::Duration;
//!
//! // Use default configuration
//! let options = GeneratorOptions::default();
//! assert_eq!(options.base_url, "http://localhost:4000/cube-api/");
//!
//! // Create custom configuration
//! let custom = GeneratorOptions {
//!     watch: true,
//!     watch_delay: Duration::from_millis(2500),
//!     ..Default::default()
//! };
//! ```

use std::time::Duration;

/// Options for a generation run.
///
/// Controls where metadata is fetched from, how watch mode behaves, and
/// which cubes are filtered out before synthesis.
///
/// # Examples
///
/// ```
/// use cube_records_core::GeneratorOptions;
///
/// let options = GeneratorOptions::builder()
///     .base_url("http://localhost:4000/cube-api/")
///     .exclude(vec!["Internal".to_string()])
///     .build();
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Base URL of the analytics server; `/v1/meta` is appended after
    /// trailing-slash normalization.
    /// Default: `http://localhost:4000/cube-api/`
    pub base_url: String,

    /// Re-fetch and regenerate until interrupted.
    /// Default: false
    pub watch: bool,

    /// Delay between successive fetch-and-regenerate cycles in watch mode.
    /// Default: 5 seconds
    pub watch_delay: Duration,

    /// Cube names whose own declarations are skipped. Exclusion filters
    /// which cubes get a declaration, not which names may appear inside
    /// other cubes' joins.
    /// Default: empty
    pub exclude: Vec<String>,

    /// Only generate declarations for views.
    /// Default: false
    pub views_only: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/cube-api/".to_string(),
            watch: false,
            watch_delay: Duration::from_millis(5000),
            exclude: Vec::new(),
            views_only: false,
        }
    }
}

impl GeneratorOptions {
    /// Creates a new options builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::GeneratorOptions;
    /// use std::time::Duration;
    ///
    /// let options = GeneratorOptions::builder()
    ///     .watch(true)
    ///     .watch_delay(Duration::from_millis(1000))
    ///     .build();
    ///
    /// assert!(options.watch);
    /// ```
    #[must_use]
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::new()
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is empty
    /// - Watch mode is enabled with a zero delay
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_records_core::GeneratorOptions;
    ///
    /// let options = GeneratorOptions::default();
    /// assert!(options.validate().is_ok());
    ///
    /// let invalid = GeneratorOptions {
    ///     base_url: String::new(),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> crate::Result<()> {
        if self.base_url.is_empty() {
            return Err(crate::Error::ConfigError {
                message: "base URL cannot be empty".to_string(),
            });
        }

        if self.watch && self.watch_delay.is_zero() {
            return Err(crate::Error::ConfigError {
                message: "watch delay must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GeneratorOptions`].
///
/// # Examples
///
/// ```
/// use cube_records_core::GeneratorOptions;
///
/// let options = GeneratorOptions::builder()
///     .base_url("https://analytics.example.com/cube-api")
///     .views_only(true)
///     .build();
///
/// assert!(options.views_only);
/// ```
#[derive(Debug)]
pub struct GeneratorOptionsBuilder {
    options: GeneratorOptions,
}

impl GeneratorOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.base_url = url.into();
        self
    }

    /// Enables or disables watch mode.
    #[must_use]
    pub const fn watch(mut self, watch: bool) -> Self {
        self.options.watch = watch;
        self
    }

    /// Sets the watch-mode delay.
    #[must_use]
    pub const fn watch_delay(mut self, delay: Duration) -> Self {
        self.options.watch_delay = delay;
        self
    }

    /// Sets the excluded cube names.
    #[must_use]
    pub fn exclude(mut self, names: Vec<String>) -> Self {
        self.options.exclude = names;
        self
    }

    /// Restricts generation to views.
    #[must_use]
    pub const fn views_only(mut self, views_only: bool) -> Self {
        self.options.views_only = views_only;
        self
    }

    /// Builds the options.
    #[must_use]
    pub fn build(self) -> GeneratorOptions {
        self.options
    }
}

impl Default for GeneratorOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
