// Texture File Placement
// Copies a resolved texture into the target tree at its reference path

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::utilities::{glob_insensitive, join_reference};

/// Outcome of placing a texture into the target tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The file was copied
    Copied,
    /// A file already sits at the destination; nothing was touched
    AlreadyExists,
}

impl Placement {
    /// True when the file was copied
    pub fn is_copied(self) -> bool {
        self == Placement::Copied
    }
}

/// Copy `source` to `target_root/reference`, never overwriting
///
/// Missing intermediate directories are created. The target root itself
/// is created too if needed.
pub fn insert_texture_file(target_root: &Path, reference: &str, source: &Path) -> Result<Placement> {
    let destination = join_reference(target_root, reference);

    if !glob_insensitive(&destination).is_empty() {
        debug!("Skipping existing {}", destination.display());
        return Ok(Placement::AlreadyExists);
    }

    if let Some(parent) = destination.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    fs::copy(source, &destination).map_err(|e| Error::Copy {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: e,
    })?;

    debug!("Copied {} -> {}", source.display(), destination.display());
    Ok(Placement::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_then_skip() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("s2/a/b.dds");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, b"DDS |texture bytes").unwrap();
        let target = dir.path().join("t");
        fs::create_dir_all(&target).unwrap();

        let first = insert_texture_file(&target, "a/b.dds", &source).unwrap();
        assert_eq!(first, Placement::Copied);
        assert!(first.is_copied());
        assert!(target.join("a").is_dir());
        assert_eq!(fs::read(target.join("a/b.dds")).unwrap(), b"DDS |texture bytes");

        let second = insert_texture_file(&target, "a/b.dds", &source).unwrap();
        assert_eq!(second, Placement::AlreadyExists);
        assert!(!second.is_copied());
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("new.dds");
        fs::write(&source, b"new").unwrap();
        let target = dir.path().join("t");
        fs::create_dir_all(target.join("x")).unwrap();
        fs::write(target.join("x/tex.dds"), b"old").unwrap();

        let outcome = insert_texture_file(&target, "x/tex.dds", &source).unwrap();
        assert_eq!(outcome, Placement::AlreadyExists);
        assert_eq!(fs::read(target.join("x/tex.dds")).unwrap(), b"old");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_existing_check_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("tex.dds");
        fs::write(&source, b"new").unwrap();
        let target = dir.path().join("t");
        fs::create_dir_all(target.join("X")).unwrap();
        fs::write(target.join("X/TEX.DDS"), b"old").unwrap();

        let outcome = insert_texture_file(&target, "x/tex.dds", &source).unwrap();
        assert_eq!(outcome, Placement::AlreadyExists);
    }

    #[test]
    fn test_missing_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = insert_texture_file(dir.path(), "a/b.dds", &dir.path().join("gone.dds"))
            .unwrap_err();
        assert!(matches!(err, Error::Copy { .. }));
    }
}
