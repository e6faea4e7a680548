//! Filesystem locations for export files.

use std::path::PathBuf;

/// File name every export is written to.
pub const EXPORT_FILE_NAME: &str = "export.csv";

/// `<temp dir>/export.csv`. Repeated exports overwrite this path.
pub fn default_export_path() -> PathBuf {
    std::env::temp_dir().join(EXPORT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_path() {
        let path = default_export_path();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(path.parent().unwrap(), std::env::temp_dir().as_path());
    }
}
