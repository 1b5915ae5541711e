//! The slide loading pipeline.
//!
//! A [`SlideLoader`] walks the configured files strictly in order: one
//! fetch, one decode, one appended section, then the next file. The first
//! failure abandons the load, replaces the target's content with an error
//! section and leaves the presentation engine untouched. The engine is
//! initialized exactly once, after the last file.
//!
//! ```text
//! Idle ──load()──▶ Loading ──┬──▶ Ready
//!                            └──▶ Failed
//! ```

mod guard;
mod report;

pub use guard::LoadingGuard;
pub use report::LoadReport;

use crate::config::{ContentRequestConfig, LoaderOptions};
use crate::decode::decode_document;
use crate::error::{Error, Result};
use crate::model::FetchedDocument;
use crate::render::RenderTarget;
use crate::source::{ContentPayload, ContentSource};

/// Lifecycle of a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Not started
    #[default]
    Idle,
    /// Fetching and rendering
    Loading,
    /// All sections rendered and the engine initialized
    Ready,
    /// The load was abandoned and an error is shown
    Failed,
}

/// Loads an ordered list of slide files into a render target.
///
/// # Example
///
/// ```no_run
/// use slideloader::{ContentRequestConfig, SlideLoader};
/// use slideloader::render::HtmlDeck;
/// use slideloader::source::GitHubContentSource;
///
/// # async fn run() -> slideloader::Result<()> {
/// let config = ContentRequestConfig::new("nodeguard", "curriculum")
///     .with_base_path("slides")
///     .with_files(["intro.md", "main-content.md", "conclusion.md"]);
///
/// let mut target = HtmlDeck::new();
/// let mut loader = SlideLoader::new(config, GitHubContentSource::new());
/// let report = loader.load(&mut target).await?;
/// println!("{} sections", report.section_count);
/// # Ok(())
/// # }
/// ```
pub struct SlideLoader {
    config: ContentRequestConfig,
    source: Box<dyn ContentSource>,
    options: LoaderOptions,
    state: LoadState,
}

impl SlideLoader {
    /// Create a loader for `config` reading from `source`.
    pub fn new(config: ContentRequestConfig, source: impl ContentSource + 'static) -> Self {
        Self::from_boxed(config, Box::new(source))
    }

    /// Create a loader from an already boxed source.
    pub fn from_boxed(config: ContentRequestConfig, source: Box<dyn ContentSource>) -> Self {
        Self {
            config,
            source,
            options: LoaderOptions::default(),
            state: LoadState::Idle,
        }
    }

    /// Set loader options.
    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The content request configuration.
    pub fn config(&self) -> &ContentRequestConfig {
        &self.config
    }

    /// The loader options.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Run the load into `target`.
    ///
    /// The target's loading indicator is shown for the whole run and
    /// hidden exactly once when it ends, whatever the outcome. On failure
    /// the error is logged, shown on the target, and returned.
    ///
    /// A loader runs once; calling `load` again returns
    /// [`Error::AlreadyStarted`] without touching the target.
    pub async fn load<T>(&mut self, target: &mut T) -> Result<LoadReport>
    where
        T: RenderTarget + ?Sized,
    {
        if self.state != LoadState::Idle {
            return Err(Error::AlreadyStarted);
        }
        self.state = LoadState::Loading;
        log::info!(
            "loading {} slide file(s) from {}",
            self.config.file_count(),
            self.source.name()
        );

        let mut report = LoadReport::start(self.source.name());
        let result = {
            let mut guard = LoadingGuard::show(target);
            let result = self.run(&mut *guard, &mut report).await;
            if let Err(ref e) = result {
                log::error!("slide load failed: {}", e);
                guard.show_error(&e.to_string());
            }
            result
        };
        report.finish();

        match result {
            Ok(()) => {
                self.state = LoadState::Ready;
                log::info!(
                    "deck ready: {} section(s), {} bytes",
                    report.section_count,
                    report.bytes_decoded
                );
                Ok(report)
            }
            Err(e) => {
                self.state = LoadState::Failed;
                Err(e)
            }
        }
    }

    async fn run<T>(&self, target: &mut T, report: &mut LoadReport) -> Result<()>
    where
        T: RenderTarget + ?Sized,
    {
        self.config.validate()?;
        self.options.separator.validate()?;

        let total = self.config.file_count();
        for (index, filename) in self.config.filenames.iter().enumerate() {
            log::debug!("fetching {} ({}/{})", filename, index + 1, total);
            report.add_fetch();
            let document =
                fetch_document(self.source.as_ref(), &self.config, filename, &self.options).await?;
            report.add_section(&document);
            target.append_section(document.into_section(self.options.separator.clone()));
        }

        target.initialize_engine(&self.options.engine)
    }
}

/// Fetch and decode every configured file, in order, without rendering.
///
/// Stops at the first failure; files after it are never requested.
pub async fn fetch_documents<S>(
    config: &ContentRequestConfig,
    source: &S,
    options: &LoaderOptions,
) -> Result<Vec<FetchedDocument>>
where
    S: ContentSource + ?Sized,
{
    config.validate()?;

    let mut documents = Vec::with_capacity(config.file_count());
    for filename in &config.filenames {
        documents.push(fetch_document(source, config, filename, options).await?);
    }
    Ok(documents)
}

async fn fetch_document<S>(
    source: &S,
    config: &ContentRequestConfig,
    filename: &str,
    options: &LoaderOptions,
) -> Result<FetchedDocument>
where
    S: ContentSource + ?Sized,
{
    let payload = fetch_payload(source, config, filename, options).await?;
    let document = decode_document(payload, &options.decode)?;
    log::debug!("decoded {} ({} bytes)", document.filename, document.decoded_len());
    Ok(document)
}

async fn fetch_payload<S>(
    source: &S,
    config: &ContentRequestConfig,
    filename: &str,
    options: &LoaderOptions,
) -> Result<ContentPayload>
where
    S: ContentSource + ?Sized,
{
    let fetch = source.fetch(config, filename);
    match options.request_timeout {
        Some(limit) => tokio::time::timeout(limit, fetch)
            .await
            .map_err(|_| Error::fetch(filename, format!("timed out after {:?}", limit)))?,
        None => fetch.await,
    }
}
