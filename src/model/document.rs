//! Fetched slide documents.

use super::{PresentationSection, SeparatorRule};
use serde::{Deserialize, Serialize};

/// One slide file as returned by a content source.
///
/// A fetched document lives only until it is turned into a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedDocument {
    /// File name as requested (relative to the base path)
    pub filename: String,

    /// Payload exactly as the content source delivered it
    #[serde(skip_serializing, default)]
    pub raw: String,

    /// Decoded markdown text
    pub text: String,
}

impl FetchedDocument {
    /// Create a fetched document.
    pub fn new(filename: impl Into<String>, raw: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            raw: raw.into(),
            text: text.into(),
        }
    }

    /// Size of the decoded text in bytes.
    pub fn decoded_len(&self) -> usize {
        self.text.len()
    }

    /// Turn the document into a presentation section.
    pub fn into_section(self, separator: SeparatorRule) -> PresentationSection {
        PresentationSection::new(self.text, separator).with_filename(self.filename)
    }
}
