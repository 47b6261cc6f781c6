//! Inbound Ports (Driving Ports / API)

use crate::application::service::GuardedSource;
use crate::domain::declarations::{ClassDecl, FunctionDecl};
use crate::domain::errors::GuardError;
use crate::domain::patch::Patch;

/// Primary Type Guard API
pub trait TypeGuardApi: Send + Sync {
    /// Patches for every guardable parameter of the given declarations.
    ///
    /// Functions come first, then class methods, each in input order.
    fn collect_patches(&self, functions: &[FunctionDecl], classes: &[ClassDecl]) -> Vec<Patch>;

    /// Insert guards for the given declarations into `source`.
    ///
    /// This is the main entry point. It:
    /// 1. Collects patches
    /// 2. Enforces the per-source patch limit
    /// 3. Applies the patches to a copy of the source
    fn guard_source(
        &self,
        source: &[u8],
        functions: &[FunctionDecl],
        classes: &[ClassDecl],
    ) -> Result<GuardedSource, GuardError>;

    /// Parse TypeScript `source`, then guard every declaration found in it.
    fn guard_typescript(&self, source: &str) -> Result<GuardedSource, GuardError>;
}
