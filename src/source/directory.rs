//! Local directory source for previewing a deck offline.

use super::{ContentPayload, ContentSource};
use crate::config::ContentRequestConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads slide files from `{root}/{base_path}/{filename}` on disk.
///
/// Owner, repo and host are ignored.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a slide file resolves to.
    ///
    /// Uses the same segment rules as the content API, so the path never
    /// leaves `root`.
    pub fn path_for(&self, config: &ContentRequestConfig, filename: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        path.extend(config.file_segments(filename)?);
        Ok(path)
    }
}

#[async_trait]
impl ContentSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    async fn fetch(&self, config: &ContentRequestConfig, filename: &str) -> Result<ContentPayload> {
        let path = self.path_for(config, filename)?;
        log::debug!("reading {}", path.display());

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::fetch(filename, format!("{}: {}", path.display(), e)))?;

        Ok(ContentPayload::text(filename, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let source = DirectorySource::new("/tmp/deck");
        let config = ContentRequestConfig::new("o", "r").with_base_path("/slides/");
        assert_eq!(
            source.path_for(&config, "intro.md").unwrap(),
            PathBuf::from("/tmp/deck/slides/intro.md")
        );
    }

    #[test]
    fn test_path_for_rejects_escaping_names() {
        let source = DirectorySource::new("/tmp/deck");
        let config = ContentRequestConfig::new("o", "r").with_base_path("slides");
        assert!(source.path_for(&config, "../../etc/passwd").is_err());
        assert!(source.path_for(&config, "/").is_err());
    }

    #[tokio::test]
    async fn test_fetch_rejects_parent_segments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("slides")).unwrap();
        std::fs::write(dir.path().join("secret.md"), "# Secret").unwrap();

        let source = DirectorySource::new(dir.path());
        let config = ContentRequestConfig::new("o", "r").with_base_path("slides");
        let err = source.fetch(&config, "../secret.md").await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("intro.md"), "# Intro").unwrap();

        let source = DirectorySource::new(dir.path());
        let config = ContentRequestConfig::new("o", "r");
        let payload = source.fetch(&config, "intro.md").await.unwrap();
        assert_eq!(payload, ContentPayload::text("intro.md", "# Intro"));
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        let config = ContentRequestConfig::new("o", "r");
        let err = source.fetch(&config, "missing.md").await.unwrap_err();
        assert_eq!(err.filename(), Some("missing.md"));
    }
}
