//! Domain Layer - Pure guard generation logic
//!
//! This layer contains:
//! - Declaration descriptors
//! - Guard snippet generation
//! - Patch drift tracking and application
//! - Source path helpers
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod declarations;
pub mod errors;
pub mod patch;
pub mod paths;
pub mod snippet;

pub use declarations::{ClassDecl, FunctionDecl, ParamDecl, ParamType};
pub use errors::GuardError;
pub use patch::{apply_patches, Patch, PatchIndex};
pub use paths::{is_guard_candidate, output_path_for};
pub use snippet::{class_patches, function_patches, guard_snippet};
