//! Local-file feed provider — the eager injection path.
//!
//! Reads the same JSON feed shape from disk, for offline use and for
//! pointing the browser at a checked-in fixture.

use async_trait::async_trait;
use log::info;

use crate::core::resource::{Resource, decode_store};
use crate::retrieval::provider::{ResourceProvider, RetrievalError};

pub struct FileProvider;

#[async_trait]
impl ResourceProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self, source: &str) -> Result<Vec<Resource>, RetrievalError> {
        info!("Reading resource feed from {source}");
        let body = tokio::fs::read(source)
            .await
            .map_err(|e| RetrievalError::Io(e.to_string()))?;
        decode_store(&body).map_err(|e| RetrievalError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = FileProvider
            .fetch("/definitely/not/here.json")
            .await
            .unwrap_err();
        assert!(matches!(err, RetrievalError::Io(_)));
    }

    #[tokio::test]
    async fn test_reads_feed_from_disk() {
        let dir = std::env::temp_dir().join("signpost-file-provider-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.json");
        std::fs::write(
            &path,
            r#"[{"id": "1", "title": "Math Tutoring", "summary": "", "category": "Academic", "location": "", "openNow": true, "virtual": false}]"#,
        )
        .unwrap();

        let store = FileProvider.fetch(path.to_str().unwrap()).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[0].id, "1");
    }
}
