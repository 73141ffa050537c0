//! Listing read from a local JSON file (offline mode)

use std::path::PathBuf;

use tracing::info;

use super::{MovieSource, QueryKey, SourceError};
use crate::models::MoviesPage;

/// Reads a listing in the API's JSON shape from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieSource for FileSource {
    fn key(&self) -> QueryKey {
        QueryKey::new(["movies", "file", &self.path.display().to_string()])
    }

    fn label(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> Result<MoviesPage, SourceError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let page: MoviesPage =
            serde_json::from_str(&content).map_err(|e| SourceError::Decode(e.to_string()))?;
        info!(path = %self.path.display(), count = page.results.len(), "listing loaded from file");
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_listing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"results": [{{"id": 1, "title": "One"}}, {{"id": 2, "title": "Two"}}]}}"#
        )
        .unwrap();

        let page = FileSource::new(file.path()).fetch().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].title, "Two");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("nope.json")).fetch();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = FileSource::new(file.path()).fetch();
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }
}
