//! Error types for type guard generation

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur while generating or applying guards
#[derive(Debug, Error)]
pub enum GuardError {
    /// Patch mode string is not one of `warning`, `error`, `fix`
    #[error("Invalid patch mode: {0:?} (expected warning, error or fix)")]
    InvalidPatchMode(String),

    /// Patch targets an offset past the end of the original source
    #[error("Patch offset {offset} is out of bounds for source of {len} bytes")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Too many guards for a single source
    #[error("Too many patches: {count} > {max}")]
    TooManyPatches { count: usize, max: usize },

    /// File does not live under the input root
    #[error("Path {path:?} is outside the input root")]
    OutsideInputRoot { path: PathBuf },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TypeScript source failed to parse
    #[error("Parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// Source is too large to address with parser byte positions
    #[error("Source of {len} bytes exceeds the parser limit")]
    SourceTooLarge { len: usize },
}
