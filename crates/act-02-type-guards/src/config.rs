//! Type guard configuration
//!
//! # Example
//!
//! ```
//! use act_02_type_guards::{GuardConfigBuilder, PatchMode};
//!
//! let config = GuardConfigBuilder::new()
//!     .patch_mode(PatchMode::Error)
//!     .max_patches_per_source(64)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.patch_mode, PatchMode::Error);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::GuardError;

/// What a guard does when a runtime value does not match its declared type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchMode {
    /// Log with `console.warn` and continue
    #[default]
    Warning,
    /// Throw the message
    Error,
    /// Log, then coerce the parameter with its type's constructor.
    ///
    /// The coerced value is assigned back (`a = Number(a);`) so the rest of
    /// the body sees it. A bare `Number(a);` statement would discard it.
    Fix,
}

impl PatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchMode::Warning => "warning",
            PatchMode::Error => "error",
            PatchMode::Fix => "fix",
        }
    }
}

impl fmt::Display for PatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchMode {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(PatchMode::Warning),
            "error" => Ok(PatchMode::Error),
            "fix" => Ok(PatchMode::Fix),
            other => Err(GuardError::InvalidPatchMode(other.to_string())),
        }
    }
}

/// Guard generation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Behaviour of every generated guard
    pub patch_mode: PatchMode,
    /// Upper bound on guards inserted into a single source buffer
    pub max_patches_per_source: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            patch_mode: PatchMode::Warning,
            max_patches_per_source: 10_000,
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<(), GuardError> {
        if self.max_patches_per_source == 0 {
            return Err(GuardError::InvalidConfig(
                "max_patches_per_source cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style method to set the patch mode
    pub fn with_patch_mode(mut self, mode: PatchMode) -> Self {
        self.patch_mode = mode;
        self
    }
}

/// Builder for GuardConfig with validation
#[derive(Default)]
pub struct GuardConfigBuilder {
    patch_mode: Option<PatchMode>,
    max_patches_per_source: Option<usize>,
}

impl GuardConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patch_mode(mut self, mode: PatchMode) -> Self {
        self.patch_mode = Some(mode);
        self
    }

    pub fn max_patches_per_source(mut self, max: usize) -> Self {
        self.max_patches_per_source = Some(max);
        self
    }

    /// Build the GuardConfig, validating all parameters
    pub fn build(self) -> Result<GuardConfig, GuardError> {
        let defaults = GuardConfig::default();

        let config = GuardConfig {
            patch_mode: self.patch_mode.unwrap_or(defaults.patch_mode),
            max_patches_per_source: self
                .max_patches_per_source
                .unwrap_or(defaults.max_patches_per_source),
        };

        config.validate()?;
        Ok(config)
    }
}
