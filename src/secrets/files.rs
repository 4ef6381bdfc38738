use crate::error::{RenderError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Collect secrets from a mounted directory tree.
///
/// Every regular file becomes one secret value: the group is the parent
/// directory's base name, the key is the file name, the value is the file
/// contents as text. Dot-prefixed entries are skipped, but the walk still
/// descends into dot-named directories, so their non-dot children are
/// collected.
pub fn collect_from_files(root: &Path) -> Result<HashMap<String, HashMap<String, String>>> {
    let mut groups: HashMap<String, HashMap<String, String>> = HashMap::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| RenderError::from_walk(root, err))?;
        if entry.file_type().is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let value = fs::read_to_string(path)
            .map_err(|source| RenderError::filesystem(path, source))?;
        let key = entry.file_name().to_string_lossy().into_owned();
        let group = path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        groups.entry(group).or_default().insert(key, value);
    }

    log::debug!("collected {} secret group(s) from {:?}", groups.len(), root);
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collects_group_key_value() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("secrets").join("db");
        fs::create_dir_all(&db).unwrap();
        fs::write(db.join("username"), "admin").unwrap();
        fs::write(db.join("password"), "hunter2").unwrap();

        let groups = collect_from_files(&dir.path().join("secrets")).unwrap();

        assert_eq!(groups["db"]["username"], "admin");
        assert_eq!(groups["db"]["password"], "hunter2");
    }

    #[test]
    fn test_value_is_exact_file_contents() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("secrets");
        fs::create_dir_all(root.join("app")).unwrap();
        fs::write(root.join("app").join("key"), "line1\nline2\n").unwrap();

        let groups = collect_from_files(&root).unwrap();

        assert_eq!(groups["app"]["key"], "line1\nline2\n");
    }

    #[test]
    fn test_root_level_file_groups_under_root_name() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("secrets");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("token"), "abc").unwrap();

        let groups = collect_from_files(&root).unwrap();

        assert_eq!(groups["secrets"]["token"], "abc");
    }

    #[test]
    fn test_skips_dot_files_but_descends_into_dot_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("secrets");
        fs::create_dir_all(root.join(".internal")).unwrap();
        fs::write(root.join(".hidden"), "skip me").unwrap();
        fs::write(root.join(".internal").join("key"), "kept").unwrap();

        let groups = collect_from_files(&root).unwrap();

        assert!(!groups.contains_key("secrets"));
        assert_eq!(groups[".internal"]["key"], "kept");
    }

    #[test]
    fn test_missing_root_errors_with_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = collect_from_files(&missing).unwrap_err();

        assert!(matches!(err, RenderError::Filesystem { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }
}
