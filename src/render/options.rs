//! HTML rendering options.

/// Default location of the presentation engine's assets.
pub const DEFAULT_ASSET_BASE: &str = "https://cdn.jsdelivr.net/npm/reveal.js@5";

/// Options for rendering a deck as a standalone HTML page.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Base URL the engine's `dist/` and `plugin/` directories live under
    pub asset_base: String,

    /// Engine theme name (e.g., "black", "white")
    pub theme: String,

    /// Stylesheet for code highlighting, relative to `plugin/highlight/`
    pub highlight_theme: String,

    /// Page title; falls back to the deck title, then the first heading
    pub title: Option<String>,

    /// Text of the loading indicator
    pub loading_text: String,

    /// Document language
    pub lang: String,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset base URL.
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the loading indicator text.
    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    /// Asset URL for a path relative to the asset base.
    pub fn asset(&self, path: &str) -> String {
        format!("{}/{}", self.asset_base.trim_end_matches('/'), path)
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            theme: "black".to_string(),
            highlight_theme: "monokai.css".to_string(),
            title: None,
            loading_text: "Loading slides...".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_options_builder() {
        let options = HtmlOptions::new()
            .with_theme("white")
            .with_title("NodeGuard")
            .with_asset_base("/vendor/reveal/");

        assert_eq!(options.theme, "white");
        assert_eq!(options.title.as_deref(), Some("NodeGuard"));
        assert_eq!(options.asset("dist/reveal.js"), "/vendor/reveal/dist/reveal.js");
    }

    #[test]
    fn test_default_asset() {
        let options = HtmlOptions::default();
        assert_eq!(
            options.asset("dist/reveal.css"),
            "https://cdn.jsdelivr.net/npm/reveal.js@5/dist/reveal.css"
        );
    }
}
