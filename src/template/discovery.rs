use crate::error::{RenderError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk the template root and return every file path under it.
///
/// Directories are excluded; there is no filtering by name or extension, so
/// symlinks to files count as templates too. Paths come back in the walk's
/// depth-first order and callers must not rely on anything stronger. The
/// first walk error (missing root, unreadable subdirectory) aborts discovery
/// with no partial list.
pub fn discover_templates(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| RenderError::from_walk(root, err))?;
        if !entry.file_type().is_dir() {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}
