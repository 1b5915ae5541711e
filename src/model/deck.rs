//! In-memory presentation document.

use super::PresentationSection;
use crate::render::EngineConfig;
use serde::{Deserialize, Serialize};

/// The state a render target exposes: loading indicator, content
/// container and presentation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title shown in the page head
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the loading indicator is visible
    pub loading: bool,

    /// Content container, in display order
    pub sections: Vec<PresentationSection>,

    /// Error message shown instead of the sections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Engine configuration, once the engine has been initialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineConfig>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Show the loading indicator for a new load, dropping an error left
    /// by an earlier one.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Append a section to the content container.
    pub fn push_section(&mut self, section: PresentationSection) {
        self.sections.push(section);
    }

    /// Replace the whole content container with a single error.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.sections.clear();
        self.engine = None;
        self.error = Some(message.into());
    }

    /// Number of sections in the content container.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of slides across all sections.
    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(|s| s.slide_count()).sum()
    }

    /// Check if the deck has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Check if the deck shows an error.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Check if the presentation engine has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Markdown source of all sections, separated by horizontal rules.
    pub fn markdown(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.source.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeparatorRule;

    fn section(text: &str) -> PresentationSection {
        PresentationSection::new(text, SeparatorRule::default())
    }

    #[test]
    fn test_show_error_replaces_content() {
        let mut deck = Deck::new();
        deck.push_section(section("# A"));
        deck.push_section(section("# B"));
        assert_eq!(deck.section_count(), 2);

        deck.show_error("boom");
        assert!(deck.is_empty());
        assert!(deck.is_failed());
        assert!(!deck.is_initialized());
        assert_eq!(deck.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_begin_loading_clears_error() {
        let mut deck = Deck::new();
        deck.show_error("boom");
        deck.begin_loading();
        assert!(deck.loading);
        assert!(!deck.is_failed());
    }

    #[test]
    fn test_markdown_joins_sections() {
        let mut deck = Deck::with_title("NodeGuard");
        deck.push_section(section("# A\n"));
        deck.push_section(section("# B"));
        assert_eq!(deck.markdown(), "# A\n\n---\n\n# B");
        assert_eq!(deck.slide_count(), 2);
    }
}
