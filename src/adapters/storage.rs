use crate::domain::ports::ContextStore;
use crate::utils::error::{GuideError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct FileContextStore;

impl FileContextStore {
    pub fn new() -> Self {
        Self
    }
}

impl ContextStore for FileContextStore {
    fn read_context(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| GuideError::ContextLoadError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Mumbai notes".as_bytes()).unwrap();

        let text = FileContextStore::new().read_context(file.path()).unwrap();
        assert_eq!(text, "Mumbai notes");
    }

    #[test]
    fn test_missing_file_is_context_load_error() {
        let err = FileContextStore::new()
            .read_context(Path::new("does/not/exist.md"))
            .unwrap_err();
        assert!(matches!(err, GuideError::ContextLoadError { .. }));
    }
}
