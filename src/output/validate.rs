// src/output/validate.rs

use std::{fs, path::Path};

/// Size in bytes, or 0 if `path` is not a regular file we can stat.
pub fn file_size<P: AsRef<Path>>(path: P) -> u64 {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => 0,
    }
}

/// True iff `path` is an existing regular file with at least one byte.
pub fn is_valid_file<P: AsRef<Path>>(path: P) -> bool {
    file_size(path) > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_invalid() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nope.csv");
        assert_eq!(file_size(&path), 0);
        assert!(!is_valid_file(&path));
        Ok(())
    }

    #[test]
    fn empty_file_is_invalid() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.csv");
        fs::write(&path, b"")?;
        assert!(!is_valid_file(&path));
        Ok(())
    }

    #[test]
    fn one_byte_is_enough() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("one.csv");
        fs::write(&path, b"x")?;
        assert_eq!(file_size(&path), 1);
        assert!(is_valid_file(&path));
        Ok(())
    }

    #[test]
    fn directory_is_invalid() -> anyhow::Result<()> {
        let dir = tempdir()?;
        assert!(!is_valid_file(dir.path()));
        Ok(())
    }
}
