//! Content location and loader configuration.

use crate::decode::DecodeOptions;
use crate::error::{Error, Result};
use crate::model::SeparatorRule;
use crate::render::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default repository content host.
pub const DEFAULT_HOST: &str = "https://api.github.com";

/// Where the slides live and which of them to load, in order.
///
/// A config is handed to the loader by value and is not modified while a
/// load is running.
///
/// # Example
///
/// ```
/// use slideloader::ContentRequestConfig;
///
/// let config = ContentRequestConfig::new("nodeguard", "curriculum")
///     .with_base_path("slides")
///     .with_files(["intro.md", "main-content.md", "conclusion.md"]);
///
/// let url = config.content_url("intro.md").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://api.github.com/repos/nodeguard/curriculum/contents/slides/intro.md"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequestConfig {
    /// Base URL of the content API
    #[serde(default = "default_host")]
    pub host: String,

    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Directory inside the repository holding the slides
    #[serde(default)]
    pub base_path: String,

    /// Slide files in presentation order
    #[serde(default)]
    pub filenames: Vec<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ContentRequestConfig {
    /// Create a config for `owner/repo` on the default host.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            owner: owner.into(),
            repo: repo.into(),
            base_path: String::new(),
            filenames: Vec::new(),
        }
    }

    /// Set the content host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the slide directory.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Append one slide file.
    pub fn with_file(mut self, filename: impl Into<String>) -> Self {
        self.filenames.push(filename.into());
        self
    }

    /// Append several slide files, keeping their order.
    pub fn with_files<I, S>(mut self, filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filenames.extend(filenames.into_iter().map(Into::into));
        self
    }

    /// Parse a config from a JSON manifest.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(format!("manifest is not valid: {}", e)))
    }

    /// Read a config from a JSON manifest file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Number of slide files requested.
    pub fn file_count(&self) -> usize {
        self.filenames.len()
    }

    /// Check that a load with this config can be attempted.
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(Error::InvalidConfig("owner must not be empty".into()));
        }
        if self.repo.trim().is_empty() {
            return Err(Error::InvalidConfig("repo must not be empty".into()));
        }
        if self.filenames.is_empty() {
            return Err(Error::InvalidConfig("no slide files listed".into()));
        }
        if let Some(pos) = self.filenames.iter().position(|f| f.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "slide file #{} has an empty name",
                pos + 1
            )));
        }
        for (pos, filename) in self.filenames.iter().enumerate() {
            relative_segments(filename).map_err(|reason| {
                Error::InvalidConfig(format!("slide file #{} ({:?}) {}", pos + 1, filename, reason))
            })?;
        }
        self.base_segments()?;
        self.host_url().map(|_| ())
    }

    /// Path segments of a slide file below the repository root.
    ///
    /// Both the base path and the file name must be plain relative paths:
    /// at least one segment, and no `.` or `..` segments.
    pub fn file_segments<'a>(&'a self, filename: &'a str) -> Result<Vec<&'a str>> {
        let mut segments = self.base_segments()?;
        segments.extend(relative_segments(filename).map_err(|reason| {
            Error::InvalidConfig(format!("slide file {:?} {}", filename, reason))
        })?);
        Ok(segments)
    }

    fn base_segments(&self) -> Result<Vec<&str>> {
        if self.base_path.trim().is_empty() {
            return Ok(Vec::new());
        }
        relative_segments(&self.base_path).map_err(|reason| {
            Error::InvalidConfig(format!("base path {:?} {}", self.base_path, reason))
        })
    }

    /// Resolve the content API URL for one slide file.
    ///
    /// The path follows `{host}/repos/{owner}/{repo}/contents/{base_path}/{filename}`;
    /// an empty base path drops its segment.
    pub fn content_url(&self, filename: &str) -> Result<Url> {
        let path = self.file_segments(filename)?;
        let mut url = self.host_url()?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidConfig(format!("host cannot be a base: {}", self.host)))?;
            segments
                .pop_if_empty()
                .extend(["repos", self.owner.trim(), self.repo.trim(), "contents"])
                .extend(path);
        }
        Ok(url)
    }

    fn host_url(&self) -> Result<Url> {
        let url = Url::parse(self.host.trim())
            .map_err(|e| Error::InvalidConfig(format!("host {:?}: {}", self.host, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::InvalidConfig(format!(
                "host must use http or https, got {}",
                other
            ))),
        }
    }
}

fn relative_segments(path: &str) -> std::result::Result<Vec<&str>, &'static str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err("has no path segments");
    }
    if segments.iter().any(|s| matches!(s.trim(), "." | "..")) {
        return Err("must not contain `.` or `..` segments");
    }
    Ok(segments)
}

/// Options controlling how a load runs.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Per-request timeout (`None` waits indefinitely)
    pub request_timeout: Option<Duration>,

    /// Separator rule attached to every section
    pub separator: SeparatorRule,

    /// Payload decoding options
    pub decode: DecodeOptions,

    /// Presentation engine configuration
    pub engine: EngineConfig,
}

impl LoaderOptions {
    /// Create new loader options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the section separator rule.
    pub fn with_separator(mut self, separator: SeparatorRule) -> Self {
        self.separator = separator;
        self
    }

    /// Set decoding options.
    pub fn with_decode_options(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }

    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            request_timeout: None,
            separator: SeparatorRule::default(),
            decode: DecodeOptions::default(),
            engine: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentRequestConfig {
        ContentRequestConfig::new("nodeguard", "curriculum")
            .with_base_path("slides")
            .with_files(["intro.md", "main-content.md"])
    }

    #[test]
    fn test_content_url_template() {
        let url = sample().content_url("main-content.md").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/nodeguard/curriculum/contents/slides/main-content.md"
        );
    }

    #[test]
    fn test_content_url_trims_slashes() {
        let config = sample()
            .with_host("https://ghe.example.com/api/v3/")
            .with_base_path("/deck/week-1/");
        let url = config.content_url("intro.md").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/nodeguard/curriculum/contents/deck/week-1/intro.md"
        );
    }

    #[test]
    fn test_content_url_without_base_path() {
        let config = sample().with_base_path("");
        let url = config.content_url("intro.md").unwrap();
        assert!(url.path().ends_with("/contents/intro.md"));
    }

    #[test]
    fn test_content_url_encodes_spaces() {
        let url = sample().content_url("my slide.md").unwrap();
        assert!(url.path().ends_with("/my%20slide.md"));
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_file_list() {
        let config = ContentRequestConfig::new("o", "r");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_blank_filename() {
        let config = sample().with_file("  ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("#3"));
    }

    #[test]
    fn test_validate_rejects_dot_and_separator_only_paths() {
        for name in ["/", "../x.md", "a/./b.md", "slides/.."] {
            let config = sample().with_file(name);
            let err = config.validate().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{}", name);
            assert!(err.to_string().contains("#3"), "{}", name);
            assert!(config.content_url(name).is_err(), "{}", name);
        }

        let config = sample().with_base_path("../other");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.content_url("intro.md").is_err());

        let config = sample().with_base_path("/");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_segments() {
        let config = sample().with_base_path("/deck/week-1/");
        assert_eq!(
            config.file_segments("part/intro.md").unwrap(),
            vec!["deck", "week-1", "part", "intro.md"]
        );
        assert_eq!(
            sample().with_base_path("").file_segments("intro.md").unwrap(),
            vec!["intro.md"]
        );
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let config = sample().with_host("ftp://example.com");
        assert!(config.validate().is_err());

        let config = sample().with_host("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_str_defaults_host() {
        let config = ContentRequestConfig::from_json_str(
            r#"{"owner": "o", "repo": "r", "filenames": ["a.md"]}"#,
        )
        .unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.base_path, "");
        assert_eq!(config.filenames, vec!["a.md"]);
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = ContentRequestConfig::from_json_str("{\"owner\": 1}");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_loader_options_builder() {
        let options = LoaderOptions::new().with_timeout(Duration::from_secs(5));
        assert_eq!(options.request_timeout, Some(Duration::from_secs(5)));
        assert!(LoaderOptions::default().request_timeout.is_none());
    }
}
