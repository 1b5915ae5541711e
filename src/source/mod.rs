//! Content sources that deliver slide payloads.
//!
//! A [`ContentSource`] performs one read per slide file. The loader calls
//! it once per file, in order, and never concurrently.
//!
//! # Example
//!
//! ```no_run
//! use slideloader::source::{ContentSource, GitHubContentSource};
//! use slideloader::ContentRequestConfig;
//!
//! # async fn run() -> slideloader::Result<()> {
//! let config = ContentRequestConfig::new("nodeguard", "curriculum").with_base_path("slides");
//! let source = GitHubContentSource::new();
//! let payload = source.fetch(&config, "intro.md").await?;
//! println!("{} bytes of {:?}", payload.content.len(), payload.encoding);
//! # Ok(())
//! # }
//! ```

mod directory;
mod github;

pub use directory::DirectorySource;
pub use github::{parse_content_response, GitHubContentSource, USER_AGENT};

use crate::config::ContentRequestConfig;
use crate::error::Result;
use async_trait::async_trait;

/// How a payload's content is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadEncoding {
    /// Base64 transport encoding
    #[default]
    Base64,
    /// Already plain UTF-8 text
    Utf8,
}

/// A payload exactly as a content source returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPayload {
    /// File name the payload was requested for
    pub filename: String,

    /// Encoding of `content`
    pub encoding: PayloadEncoding,

    /// Encoded content
    pub content: String,
}

impl ContentPayload {
    /// Create a base64 payload.
    pub fn base64(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            encoding: PayloadEncoding::Base64,
            content: content.into(),
        }
    }

    /// Create a plain-text payload.
    pub fn text(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            encoding: PayloadEncoding::Utf8,
            content: content.into(),
        }
    }
}

/// Trait for slide content sources.
///
/// Implement this trait to load slides from somewhere other than the
/// repository content API.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read one slide file.
    ///
    /// Any failure to obtain the payload must be reported as
    /// [`Error::Fetch`](crate::Error::Fetch) naming `filename`. A name the
    /// config cannot resolve is [`Error::InvalidConfig`](crate::Error::InvalidConfig).
    async fn fetch(&self, config: &ContentRequestConfig, filename: &str) -> Result<ContentPayload>;
}
