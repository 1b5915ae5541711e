//! Data model for slide loading.
//!
//! A load turns each [`FetchedDocument`] into a [`PresentationSection`]
//! and appends it to the [`Deck`] backing a render target.

mod deck;
mod document;
mod section;

pub use deck::Deck;
pub use document::FetchedDocument;
pub use section::{PresentationSection, SeparatorRule, DEFAULT_NOTES_SEPARATOR, DEFAULT_SEPARATOR};
