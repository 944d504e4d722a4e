//! Create-only filesystem helpers
//!
//! The tools never merge into or overwrite a directory they are asked to
//! create. Both helpers surface `ErrorKind::AlreadyExists` so callers can
//! turn it into their own error.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Create exactly one new directory. Its parent must already exist.
pub fn create_fresh_dir(path: &Path) -> io::Result<()> {
    fs::create_dir(path)
}

/// Write a file that must not exist yet
pub fn write_new_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())
}

/// True if `err` reports a pre-existing path
pub fn is_already_exists(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::AlreadyExists
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_fresh_dir() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("node_01");

        create_fresh_dir(&target).unwrap();
        assert!(target.is_dir());

        let err = create_fresh_dir(&target).unwrap_err();
        assert!(is_already_exists(&err));
    }

    #[test]
    fn test_create_fresh_dir_needs_parent() {
        let dir = tempdir().unwrap();
        let err = create_fresh_dir(&dir.path().join("a/b")).unwrap_err();
        assert!(!is_already_exists(&err));
    }

    #[test]
    fn test_write_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bee.yml");

        write_new_file(&path, "verbosity: 5\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "verbosity: 5\n");

        let err = write_new_file(&path, "other").unwrap_err();
        assert!(is_already_exists(&err));
        assert_eq!(fs::read_to_string(&path).unwrap(), "verbosity: 5\n");
    }
}
