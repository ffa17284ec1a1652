//! Destination directory lifecycle: clear the previous run's output.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Removes everything inside `root` except a `.git` entry, creating `root`
/// if it does not exist yet. The reconstructed tree is often kept under
/// version control to diff releases, so repository metadata survives.
pub fn clean(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("create destination {}", root.display()))?;
        return Ok(());
    }

    let entries = fs::read_dir(root)
        .with_context(|| format!("read destination {}", root.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read destination {}", root.display()))?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("stat {}", path.display()))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("remove {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .with_context(|| format!("remove {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("files");
        clean(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn clears_files_and_subtrees() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("minified.js"), "old").unwrap();
        fs::create_dir_all(dir.path().join("app/src")).unwrap();
        fs::write(dir.path().join("app/src/a.js"), "old").unwrap();

        clean(dir.path()).unwrap();
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn preserves_git_metadata() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(dir.path().join("stale.js"), "old").unwrap();

        clean(dir.path()).unwrap();
        assert!(dir.path().join(".git/HEAD").is_file());
        assert!(!dir.path().join("stale.js").exists());
    }
}
