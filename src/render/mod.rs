//! Render targets and output formats for assembled decks.

mod engine;
mod html;
mod json;
mod options;

pub use engine::{EngineConfig, MarkdownOptions, Plugin};
pub use html::{to_html, HtmlDeck};
pub use json::{to_json, JsonFormat};
pub use options::{HtmlOptions, DEFAULT_ASSET_BASE};

use crate::error::Result;
use crate::model::PresentationSection;

/// A document the loader renders into.
///
/// A target exposes a loading indicator, a content container that
/// accepts sections in order, and the presentation engine initializer.
pub trait RenderTarget {
    /// Show or hide the loading indicator.
    ///
    /// Showing it marks the start of a load; a target may drop an error
    /// left by an earlier load at that point.
    fn set_loading(&mut self, visible: bool);

    /// Append a section to the content container.
    fn append_section(&mut self, section: PresentationSection);

    /// Replace the whole content container with a single error section.
    fn show_error(&mut self, message: &str);

    /// Initialize the presentation engine over the current content.
    fn initialize_engine(&mut self, config: &EngineConfig) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_loading(&mut self, visible: bool) {
        (**self).set_loading(visible)
    }

    fn append_section(&mut self, section: PresentationSection) {
        (**self).append_section(section)
    }

    fn show_error(&mut self, message: &str) {
        (**self).show_error(message)
    }

    fn initialize_engine(&mut self, config: &EngineConfig) -> Result<()> {
        (**self).initialize_engine(config)
    }
}
