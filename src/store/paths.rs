//! Path mapping between (collection, resource) identifiers and record files
//!
//! A record for (`c`, `r`) lives at `<root>/<c>/<r>.json`. Names are used
//! verbatim as path segments; callers supply filesystem-safe names.

use std::path::{Component, Path, PathBuf};

/// Record file extension, appended by the write path.
pub(crate) const RECORD_EXT: &str = "json";

/// Suffix of the temporary sibling a write goes through before the rename.
pub(crate) const TEMP_SUFFIX: &str = ".tmp";

/// Normalizes a root path: drops `.` components, resolves nothing else.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Directory holding a collection's records.
pub(crate) fn collection_dir(root: &Path, collection: &str) -> PathBuf {
    root.join(collection)
}

/// Canonical record file path, `.json` suffix included.
pub(crate) fn record_file(root: &Path, collection: &str, resource: &str) -> PathBuf {
    collection_dir(root, collection).join(format!("{}.{}", resource, RECORD_EXT))
}

/// Appends the record extension to an arbitrary path.
fn with_record_ext(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(RECORD_EXT);
    PathBuf::from(name)
}

/// Existence-check fallback: stats the bare path first, then the
/// `.json`-suffixed path, and returns whichever exists.
///
/// Supports resources referenced with or without the stored extension, and
/// is reused for collection directories (where the bare form is the hit).
pub(crate) fn resolve_existing(path: &Path) -> Option<PathBuf> {
    if path.metadata().is_ok() {
        return Some(path.to_path_buf());
    }
    let suffixed = with_record_ext(path);
    if suffixed.metadata().is_ok() {
        return Some(suffixed);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_drops_cur_dir() {
        assert_eq!(normalize(Path::new("./data")), PathBuf::from("data"));
        assert_eq!(normalize(Path::new("data/./db")), PathBuf::from("data/db"));
        assert_eq!(normalize(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_record_file_layout() {
        let path = record_file(Path::new("/store"), "users", "john");
        assert_eq!(path, PathBuf::from("/store/users/john.json"));
    }

    #[test]
    fn test_resolve_prefers_bare_path() {
        let temp = TempDir::new().unwrap();
        let bare = temp.path().join("john.json");
        fs::write(&bare, b"{}").unwrap();

        // Caller passed the name extension included.
        let resolved = resolve_existing(&bare).unwrap();
        assert_eq!(resolved, bare);
    }

    #[test]
    fn test_resolve_falls_back_to_suffixed_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("john.json"), b"{}").unwrap();

        let resolved = resolve_existing(&temp.path().join("john")).unwrap();
        assert_eq!(resolved, temp.path().join("john.json"));
    }

    #[test]
    fn test_resolve_missing_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_existing(&temp.path().join("nobody")).is_none());
    }
}
