//! Source selection and output placement
//!
//! Pure path arithmetic. Nothing here touches the filesystem.

use std::path::{Path, PathBuf};

use super::errors::GuardError;

/// Marker carried by files that already went through the patcher.
const CHECKED_MARKER: &str = ".checked";

const SOURCE_EXTENSION: &str = "ts";

/// Whether `path` names a TypeScript source that should be guarded.
pub fn is_guard_candidate(path: &Path) -> bool {
    let is_typescript = path
        .extension()
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false);
    is_typescript && !path.to_string_lossy().contains(CHECKED_MARKER)
}

/// Re-root `file` from `input_root` under `output_root`.
pub fn output_path_for(
    file: &Path,
    input_root: &Path,
    output_root: &Path,
) -> Result<PathBuf, GuardError> {
    let relative = file
        .strip_prefix(input_root)
        .map_err(|_| GuardError::OutsideInputRoot {
            path: file.to_path_buf(),
        })?;
    Ok(output_root.join(relative))
}
