//! Standalone HTML deck rendering.

use crate::error::{Error, Result};
use crate::model::{Deck, PresentationSection};

use super::{EngineConfig, HtmlOptions, Plugin, RenderTarget};

/// Render target backed by an in-memory [`Deck`] that can be written out
/// as a standalone HTML page.
///
/// # Example
///
/// ```
/// use slideloader::model::{PresentationSection, SeparatorRule};
/// use slideloader::render::{EngineConfig, HtmlDeck, RenderTarget};
///
/// let mut target = HtmlDeck::new();
/// target.append_section(PresentationSection::new("# Hello", SeparatorRule::default()));
/// target.initialize_engine(&EngineConfig::default()).unwrap();
///
/// let html = target.to_html();
/// assert!(html.contains("Reveal.initialize("));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlDeck {
    deck: Deck,
    options: HtmlOptions,
}

impl HtmlDeck {
    /// Create an empty HTML deck with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty HTML deck with the given options.
    pub fn with_options(options: HtmlOptions) -> Self {
        Self {
            deck: Deck::new(),
            options,
        }
    }

    /// The deck state.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consume the target and return the deck state.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// The rendering options.
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Render the current state as an HTML page.
    pub fn to_html(&self) -> String {
        to_html(&self.deck, &self.options)
    }

    /// Write the HTML page to a file.
    pub fn write_to<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_html())?;
        Ok(())
    }
}

impl RenderTarget for HtmlDeck {
    fn set_loading(&mut self, visible: bool) {
        if visible {
            self.deck.begin_loading();
        } else {
            self.deck.loading = false;
        }
    }

    fn append_section(&mut self, section: PresentationSection) {
        self.deck.push_section(section);
    }

    fn show_error(&mut self, message: &str) {
        self.deck.show_error(message);
    }

    fn initialize_engine(&mut self, config: &EngineConfig) -> Result<()> {
        if self.deck.is_failed() {
            return Err(Error::EngineInit("deck is showing an error".into()));
        }
        if self.deck.is_initialized() {
            return Err(Error::EngineInit("engine is already initialized".into()));
        }
        if self.deck.is_empty() {
            return Err(Error::EngineInit("deck has no sections".into()));
        }
        if !config.has_plugin(Plugin::Markdown) {
            return Err(Error::EngineInit(
                "markdown sections require the markdown plugin".into(),
            ));
        }
        self.deck.engine = Some(config.clone());
        Ok(())
    }
}

/// Render a deck as a standalone HTML page.
pub fn to_html(deck: &Deck, options: &HtmlOptions) -> String {
    let title = options
        .title
        .as_deref()
        .or(deck.title.as_deref())
        .or_else(|| deck.sections.iter().find_map(|s| s.title()))
        .unwrap_or("Slides");

    let mut output = String::with_capacity(2048 + deck.sections.iter().map(|s| s.source.len()).sum::<usize>());

    output.push_str("<!DOCTYPE html>\n");
    output.push_str(&format!("<html lang=\"{}\">\n", escape_attr(&options.lang)));
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no\">\n",
    );
    output.push_str(&format!("<title>{}</title>\n", escape_text(title)));
    push_stylesheet(&mut output, &options.asset("dist/reveal.css"));
    push_stylesheet(
        &mut output,
        &options.asset(&format!("dist/theme/{}.css", options.theme)),
    );
    push_stylesheet(
        &mut output,
        &options.asset(&format!("plugin/highlight/{}", options.highlight_theme)),
    );
    output.push_str("</head>\n");
    output.push_str("<body>\n");

    output.push_str("<div id=\"loading\" class=\"loading\"");
    if !deck.loading {
        output.push_str(" hidden");
    }
    output.push_str(&format!(">{}</div>\n", escape_text(&options.loading_text)));

    output.push_str("<div class=\"reveal\">\n<div class=\"slides\">\n");
    if let Some(ref message) = deck.error {
        render_error(&mut output, message);
    } else {
        for section in &deck.sections {
            render_section(&mut output, section);
        }
    }
    output.push_str("</div>\n</div>\n");

    if let Some(ref engine) = deck.engine {
        render_engine(&mut output, engine, options);
    }

    output.push_str("</body>\n</html>\n");
    output
}

fn push_stylesheet(output: &mut String, href: &str) {
    output.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape_attr(href)
    ));
}

fn render_section(output: &mut String, section: &PresentationSection) {
    output.push_str("<section data-markdown");
    output.push_str(&format!(
        " data-separator=\"{}\"",
        escape_attr(&section.separator.horizontal)
    ));
    if let Some(ref vertical) = section.separator.vertical {
        output.push_str(&format!(" data-separator-vertical=\"{}\"", escape_attr(vertical)));
    }
    if let Some(ref notes) = section.separator.notes {
        output.push_str(&format!(" data-separator-notes=\"{}\"", escape_attr(notes)));
    }
    if let Some(ref filename) = section.filename {
        output.push_str(&format!(" data-source=\"{}\"", escape_attr(filename)));
    }
    output.push_str(">\n<textarea data-template>\n");
    output.push_str(&escape_text(&section.source));
    if !section.source.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("</textarea>\n</section>\n");
}

fn render_error(output: &mut String, message: &str) {
    output.push_str("<section class=\"load-error\">\n");
    output.push_str("<h2>Could not load slides</h2>\n");
    output.push_str(&format!("<p>{}</p>\n", escape_text(message)));
    output.push_str("</section>\n");
}

fn render_engine(output: &mut String, engine: &EngineConfig, options: &HtmlOptions) {
    push_script(output, &options.asset("dist/reveal.js"));
    for plugin in &engine.plugins {
        push_script(output, &options.asset(plugin.script_path()));
    }
    match engine.to_js_object() {
        Ok(config) => {
            output.push_str(&format!("<script>\nReveal.initialize({});\n</script>\n", config));
        }
        Err(e) => log::warn!("engine config could not be serialized: {}", e),
    }
}

fn push_script(output: &mut String, src: &str) {
    output.push_str(&format!("<script src=\"{}\"></script>\n", escape_attr(src)));
}

/// Escape text content.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
