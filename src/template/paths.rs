use crate::error::{RenderError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Map a template file path to its output path.
///
/// The path relative to the template root is recomputed under the target
/// root, preserving nesting. The computation is path-aware rather than a
/// string-prefix strip, so a root that happens to be a string prefix of a
/// sibling directory name cannot leak through.
pub fn map_output_path(
    template_path: &Path,
    template_root: &Path,
    target_root: &Path,
) -> Result<PathBuf> {
    let relative = template_path
        .strip_prefix(template_root)
        .map_err(|_| RenderError::Filesystem {
            path: template_path.to_path_buf(),
            source: io::Error::other(format!("path is not under template root {template_root:?}")),
        })?;
    Ok(target_root.join(relative))
}

/// Create a directory and its parents if absent. Idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| RenderError::filesystem(path, source))
}
