//! Filesystem helpers for output-writing stages.

use crate::error::{LentilError, LentilResult};
use camino::Utf8Path;
use std::fs;

/// Create a folder unless it already exists.
///
/// Returns `true` when the folder was already there and `false` when it had
/// to be created (parents included). Batch stages call this unconditionally
/// before writing outputs, so an existing folder is a reported state, not a
/// failure.
pub fn ensure_folder(path: &Utf8Path) -> LentilResult<bool> {
    if path.is_dir() {
        return Ok(true);
    }

    fs::create_dir_all(path)
        .map_err(|e| LentilError::io(format!("Failed to create folder: {}", path), e))?;

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_folder_creates_then_reports_existing() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let target = root.join("outputs").join("masks");

        assert_eq!(ensure_folder(&target).unwrap(), false);
        assert!(target.is_dir());

        // Second call is a no-op that reports the folder as existing
        assert_eq!(ensure_folder(&target).unwrap(), true);
    }

    #[test]
    fn test_ensure_folder_fails_on_file_collision() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let target = root.join("occupied");
        std::fs::write(&target, "not a folder").unwrap();

        assert!(ensure_folder(&target).is_err());
    }
}
