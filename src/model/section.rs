//! Presentation sections and the separator rules that split them into slides.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default horizontal slide separator (a line holding only `---`).
pub const DEFAULT_SEPARATOR: &str = r"^\r?\n---\r?\n$";

/// Default speaker-notes marker.
pub const DEFAULT_NOTES_SEPARATOR: &str = r"^Note:";

/// Patterns the markdown plugin uses to split one section into slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorRule {
    /// Horizontal slide separator
    pub horizontal: String,

    /// Vertical slide separator
    pub vertical: Option<String>,

    /// Speaker-notes separator
    pub notes: Option<String>,
}

impl SeparatorRule {
    /// Create a rule with only a horizontal separator.
    pub fn new(horizontal: impl Into<String>) -> Self {
        Self {
            horizontal: horizontal.into(),
            vertical: None,
            notes: None,
        }
    }

    /// Set the vertical separator.
    pub fn with_vertical(mut self, pattern: impl Into<String>) -> Self {
        self.vertical = Some(pattern.into());
        self
    }

    /// Set the notes separator.
    pub fn with_notes(mut self, pattern: impl Into<String>) -> Self {
        self.notes = Some(pattern.into());
        self
    }

    /// Check that every pattern compiles.
    ///
    /// Patterns are checked in multi-line mode, which is how the engine
    /// applies them.
    pub fn validate(&self) -> Result<()> {
        let patterns = std::iter::once(&self.horizontal)
            .chain(self.vertical.iter())
            .chain(self.notes.iter());

        for pattern in patterns {
            if pattern.is_empty() {
                return Err(Error::InvalidConfig("separator pattern is empty".into()));
            }
            Regex::new(&format!("(?m){}", pattern)).map_err(|e| {
                Error::InvalidConfig(format!("separator {:?} is not a valid pattern: {}", pattern, e))
            })?;
        }
        Ok(())
    }
}

impl Default for SeparatorRule {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR).with_notes(DEFAULT_NOTES_SEPARATOR)
    }
}

/// One display section, rendered from one slide file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationSection {
    /// Markdown source of the section
    pub source: String,

    /// How the source is split into slides
    pub separator: SeparatorRule,

    /// Slide file the section came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl PresentationSection {
    /// Create a section from markdown source.
    pub fn new(source: impl Into<String>, separator: SeparatorRule) -> Self {
        Self {
            source: source.into(),
            separator,
            filename: None,
        }
    }

    /// Record the originating file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Text of the first ATX heading, if the section has one.
    pub fn title(&self) -> Option<&str> {
        self.source.lines().find_map(|line| {
            let trimmed = line.trim_start();
            let hashes = trimmed.chars().take_while(|c| *c == '#').count();
            if (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
                let text = trimmed[hashes..].trim().trim_end_matches('#').trim_end();
                (!text.is_empty()).then_some(text)
            } else {
                None
            }
        })
    }

    /// Number of slides the horizontal separator produces.
    pub fn slide_count(&self) -> usize {
        match Regex::new(&format!("(?m){}", self.separator.horizontal)) {
            Ok(re) => {
                // Separators anchor on a preceding newline, so match against
                // the text with a leading newline to catch a separator on line 1.
                let text = format!("\n{}\n", self.source);
                re.find_iter(&text).count() + 1
            }
            Err(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator_is_valid() {
        let rule = SeparatorRule::default();
        assert!(rule.validate().is_ok());
        assert_eq!(rule.notes.as_deref(), Some(DEFAULT_NOTES_SEPARATOR));
        assert!(rule.vertical.is_none());
    }

    #[test]
    fn test_invalid_separator_rejected() {
        let rule = SeparatorRule::new("^(---");
        assert!(matches!(rule.validate(), Err(Error::InvalidConfig(_))));

        let rule = SeparatorRule::default().with_vertical("");
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_section_title() {
        let section = PresentationSection::new(
            "intro text\n\n## Debugging Node ##\nmore",
            SeparatorRule::default(),
        );
        assert_eq!(section.title(), Some("Debugging Node"));

        let section = PresentationSection::new("#hashtag only", SeparatorRule::default());
        assert_eq!(section.title(), None);
    }

    #[test]
    fn test_slide_count() {
        let section = PresentationSection::new(
            "# One\n\n---\n\n# Two\n\n---\n\n# Three",
            SeparatorRule::default(),
        );
        assert_eq!(section.slide_count(), 3);

        let single = PresentationSection::new("# Only", SeparatorRule::default());
        assert_eq!(single.slide_count(), 1);
    }
}
