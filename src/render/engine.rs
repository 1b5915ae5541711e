//! Presentation engine configuration.

use serde::{Deserialize, Serialize};

/// Engine plugins a deck can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plugin {
    /// Markdown section rendering
    Markdown,
    /// Code syntax highlighting
    Highlight,
    /// Speaker notes window
    Notes,
    /// Full-text search
    Search,
    /// Alt-click zoom
    Zoom,
}

impl Plugin {
    /// Global the plugin script registers.
    pub fn js_global(self) -> &'static str {
        match self {
            Plugin::Markdown => "RevealMarkdown",
            Plugin::Highlight => "RevealHighlight",
            Plugin::Notes => "RevealNotes",
            Plugin::Search => "RevealSearch",
            Plugin::Zoom => "RevealZoom",
        }
    }

    /// Script path relative to the engine's asset base.
    pub fn script_path(self) -> &'static str {
        match self {
            Plugin::Markdown => "plugin/markdown/markdown.js",
            Plugin::Highlight => "plugin/highlight/highlight.js",
            Plugin::Notes => "plugin/notes/notes.js",
            Plugin::Search => "plugin/search/search.js",
            Plugin::Zoom => "plugin/zoom/zoom.js",
        }
    }
}

/// Options passed to the markdown plugin's parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownOptions {
    /// Typographic punctuation substitution (smart quotes, dashes)
    pub smartypants: bool,

    /// Treat single line breaks as `<br>`
    pub breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            smartypants: true,
            breaks: true,
        }
    }
}

/// Configuration handed to the presentation engine's initializer.
///
/// # Example
///
/// ```
/// use slideloader::render::{EngineConfig, Plugin};
///
/// let config = EngineConfig::default();
/// assert!(config.hash);
/// assert_eq!(config.plugins, vec![Plugin::Markdown, Plugin::Highlight, Plugin::Notes]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Reflect the current slide in the URL hash
    pub hash: bool,

    /// Markdown parser options
    pub markdown: MarkdownOptions,

    /// Enabled plugins, in registration order
    pub plugins: Vec<Plugin>,
}

impl EngineConfig {
    /// Create the default engine configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable hash navigation.
    pub fn with_hash(mut self, hash: bool) -> Self {
        self.hash = hash;
        self
    }

    /// Set markdown parser options.
    pub fn with_markdown(mut self, markdown: MarkdownOptions) -> Self {
        self.markdown = markdown;
        self
    }

    /// Add a plugin if it is not already enabled.
    pub fn with_plugin(mut self, plugin: Plugin) -> Self {
        if !self.plugins.contains(&plugin) {
            self.plugins.push(plugin);
        }
        self
    }

    /// Check whether a plugin is enabled.
    pub fn has_plugin(&self, plugin: Plugin) -> bool {
        self.plugins.contains(&plugin)
    }

    /// The initializer argument as a JavaScript object literal.
    ///
    /// Plugins are emitted as bare globals rather than strings, which is
    /// what the engine expects.
    pub fn to_js_object(&self) -> serde_json::Result<String> {
        let mut value = serde_json::to_value(self)?;
        if let Some(obj) = value.as_object_mut() {
            obj.remove("plugins");
        }
        let json = serde_json::to_string(&value)?;
        let plugins = self
            .plugins
            .iter()
            .map(|p| p.js_global())
            .collect::<Vec<_>>()
            .join(", ");

        let body = json
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or_default();
        if body.is_empty() {
            Ok(format!("{{\"plugins\":[{}]}}", plugins))
        } else {
            Ok(format!("{{{},\"plugins\":[{}]}}", body, plugins))
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hash: true,
            markdown: MarkdownOptions::default(),
            plugins: vec![Plugin::Markdown, Plugin::Highlight, Plugin::Notes],
        }
    }
}
