//! # slideloader
//!
//! Remote slide content loader for Rust.
//!
//! This library fetches an ordered list of markdown slide files from a
//! repository content API, decodes their base64 payloads, and assembles
//! them into a reveal.js deck, one section per file and in request order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use slideloader::Slideloader;
//!
//! #[tokio::main]
//! async fn main() -> slideloader::Result<()> {
//!     let loaded = Slideloader::new("nodeguard", "curriculum")
//!         .with_base_path("slides")
//!         .with_files(["intro.md", "main-content.md", "conclusion.md"])
//!         .load()
//!         .await?;
//!
//!     std::fs::write("deck.html", loaded.to_html())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Order preserving**: files are fetched one at a time, in list order
//! - **Fail fast**: the first failed fetch abandons the load; later files are never requested
//! - **No partial decks**: on failure the content is replaced by a single error section
//!   and the presentation engine is never initialized
//! - **Scoped loading indicator**: shown for the whole load, hidden exactly once
//! - **Pluggable sources and targets**: [`source::ContentSource`] and [`render::RenderTarget`]

pub mod config;
pub mod decode;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use config::{ContentRequestConfig, LoaderOptions, DEFAULT_HOST};
pub use decode::DecodeOptions;
pub use error::{Error, Result};
pub use loader::{fetch_documents, LoadReport, LoadState, LoadingGuard, SlideLoader};
pub use model::{Deck, FetchedDocument, PresentationSection, SeparatorRule};
pub use render::{
    EngineConfig, HtmlDeck, HtmlOptions, JsonFormat, MarkdownOptions, Plugin, RenderTarget,
};
pub use source::{ContentPayload, ContentSource, DirectorySource, GitHubContentSource};

use std::path::PathBuf;
use std::time::Duration;

/// Load a deck from the repository content API with default options.
///
/// # Example
///
/// ```no_run
/// use slideloader::{load_deck, ContentRequestConfig};
///
/// # async fn run() -> slideloader::Result<()> {
/// let config = ContentRequestConfig::new("nodeguard", "curriculum")
///     .with_base_path("slides")
///     .with_files(["intro.md", "conclusion.md"]);
/// let deck = load_deck(config).await?;
/// println!("{}", deck.to_html());
/// # Ok(())
/// # }
/// ```
pub async fn load_deck(config: ContentRequestConfig) -> Result<HtmlDeck> {
    let mut target = HtmlDeck::new();
    SlideLoader::new(config, GitHubContentSource::new())
        .load(&mut target)
        .await?;
    Ok(target)
}

/// Fetch and decode the configured slide files without rendering them.
pub async fn fetch_markdown(config: &ContentRequestConfig) -> Result<Vec<FetchedDocument>> {
    fetch_documents(config, &GitHubContentSource::new(), &LoaderOptions::default()).await
}

/// Builder for loading decks.
///
/// # Example
///
/// ```no_run
/// use slideloader::Slideloader;
/// use std::time::Duration;
///
/// # async fn run() -> slideloader::Result<()> {
/// let loaded = Slideloader::new("nodeguard", "curriculum")
///     .with_base_path("slides")
///     .with_file("intro.md")
///     .with_token("ghp_example")
///     .with_timeout(Duration::from_secs(10))
///     .with_theme("white")
///     .load()
///     .await?;
/// println!("{} sections", loaded.report.section_count);
/// # Ok(())
/// # }
/// ```
pub struct Slideloader {
    config: ContentRequestConfig,
    options: LoaderOptions,
    html_options: HtmlOptions,
    token: Option<String>,
    local_root: Option<PathBuf>,
}

impl Slideloader {
    /// Create a builder for `owner/repo` on the default host.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self::from_config(ContentRequestConfig::new(owner, repo))
    }

    /// Create a builder from an existing config.
    pub fn from_config(config: ContentRequestConfig) -> Self {
        Self {
            config,
            options: LoaderOptions::default(),
            html_options: HtmlOptions::default(),
            token: None,
            local_root: None,
        }
    }

    /// Set the content host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config = self.config.with_host(host);
        self
    }

    /// Set the slide directory.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config = self.config.with_base_path(base_path);
        self
    }

    /// Append one slide file.
    pub fn with_file(mut self, filename: impl Into<String>) -> Self {
        self.config = self.config.with_file(filename);
        self
    }

    /// Append several slide files.
    pub fn with_files<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config = self.config.with_files(filenames);
        self
    }

    /// Authenticate content requests.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read slides from a local directory instead of the content API.
    pub fn with_directory(mut self, root: impl Into<PathBuf>) -> Self {
        self.local_root = Some(root.into());
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Set loader options.
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the engine theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.html_options = self.html_options.with_theme(theme);
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.html_options = self.html_options.with_title(title);
        self
    }

    /// Set HTML rendering options.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html_options = options;
        self
    }

    /// The content request configuration.
    pub fn config(&self) -> &ContentRequestConfig {
        &self.config
    }

    /// Build the content source this builder describes.
    pub fn source(&self) -> Box<dyn ContentSource> {
        match self.local_root {
            Some(ref root) => Box::new(DirectorySource::new(root.clone())),
            None => {
                let mut source = GitHubContentSource::new();
                if let Some(ref token) = self.token {
                    source = source.with_token(token.clone());
                }
                Box::new(source)
            }
        }
    }

    /// Build a loader without running it.
    pub fn loader(&self) -> SlideLoader {
        SlideLoader::from_boxed(self.config.clone(), self.source()).with_options(self.options.clone())
    }

    /// Build an empty HTML target with this builder's options.
    pub fn target(&self) -> HtmlDeck {
        HtmlDeck::with_options(self.html_options.clone())
    }

    /// Load the deck.
    pub async fn load(self) -> Result<LoadedDeck> {
        let mut target = self.target();
        let report = self.loader().load(&mut target).await?;
        Ok(LoadedDeck { target, report })
    }

    /// Fetch and decode the slide files without rendering them.
    pub async fn fetch(self) -> Result<Vec<FetchedDocument>> {
        let source = self.source();
        fetch_documents(&self.config, source.as_ref(), &self.options).await
    }
}

/// A successfully loaded deck.
pub struct LoadedDeck {
    target: HtmlDeck,
    /// Load statistics
    pub report: LoadReport,
}

impl LoadedDeck {
    /// The deck state.
    pub fn deck(&self) -> &Deck {
        self.target.deck()
    }

    /// Render as a standalone HTML page.
    pub fn to_html(&self) -> String {
        self.target.to_html()
    }

    /// Render as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(self.target.deck(), format)
    }

    /// Markdown source of all sections.
    pub fn markdown(&self) -> String {
        self.target.deck().markdown()
    }
}
