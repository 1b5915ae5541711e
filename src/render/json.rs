//! JSON rendering for decks.

use crate::error::{Error, Result};
use crate::model::Deck;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a deck to JSON.
pub fn to_json(deck: &Deck, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(deck),
        JsonFormat::Compact => serde_json::to_string(deck),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
