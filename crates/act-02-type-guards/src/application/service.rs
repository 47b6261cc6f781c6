//! Type Guard Service
//!
//! Main service implementing TypeGuardApi.

use tracing::{debug, info, warn};

use crate::adapters::swc_front::extract_declarations;
use crate::config::GuardConfig;
use crate::domain::declarations::{ClassDecl, FunctionDecl};
use crate::domain::errors::GuardError;
use crate::domain::patch::{apply_patches, Patch};
use crate::domain::snippet::{class_patches, function_patches};
use crate::ports::inbound::TypeGuardApi;

/// Result of guarding one source buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardedSource {
    pub bytes: Vec<u8>,
    pub guards_inserted: usize,
    pub bytes_inserted: usize,
}

/// Type Guard Service
///
/// Orchestrates the guarding pipeline:
/// 1. Generate patches from declarations
/// 2. Check the patch limit
/// 3. Apply patches with drift tracking
pub struct TypeGuardService {
    config: GuardConfig,
}

impl TypeGuardService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: GuardConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: GuardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }
}

impl Default for TypeGuardService {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGuardApi for TypeGuardService {
    fn collect_patches(&self, functions: &[FunctionDecl], classes: &[ClassDecl]) -> Vec<Patch> {
        let mode = self.config.patch_mode;
        let mut patches = Vec::new();

        for function in functions {
            let found = function_patches(function, mode);
            debug!(function = %function.name, guards = found.len(), "Collected function guards");
            patches.extend(found);
        }

        for class in classes {
            let found = class_patches(class, mode);
            debug!(class = %class.name, guards = found.len(), "Collected class guards");
            patches.extend(found);
        }

        patches
    }

    fn guard_source(
        &self,
        source: &[u8],
        functions: &[FunctionDecl],
        classes: &[ClassDecl],
    ) -> Result<GuardedSource, GuardError> {
        let patches = self.collect_patches(functions, classes);

        if patches.len() > self.config.max_patches_per_source {
            warn!(
                count = patches.len(),
                max = self.config.max_patches_per_source,
                "Patch limit exceeded"
            );
            return Err(GuardError::TooManyPatches {
                count: patches.len(),
                max: self.config.max_patches_per_source,
            });
        }

        let bytes = apply_patches(source, &patches)?;
        let bytes_inserted = bytes.len() - source.len();

        info!(
            mode = %self.config.patch_mode,
            guards = patches.len(),
            bytes_inserted,
            "Guarded source"
        );

        Ok(GuardedSource {
            bytes,
            guards_inserted: patches.len(),
            bytes_inserted,
        })
    }

    fn guard_typescript(&self, source: &str) -> Result<GuardedSource, GuardError> {
        let found = extract_declarations(source)?;
        debug!(
            functions = found.functions.len(),
            classes = found.classes.len(),
            "Guarding parsed source"
        );
        self.guard_source(source.as_bytes(), &found.functions, &found.classes)
    }
}
