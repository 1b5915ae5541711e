//! Terminal loading indicator.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use slideloader::{EngineConfig, PresentationSection, RenderTarget};

/// Wraps a render target and mirrors its loading indicator as a spinner.
pub struct SpinnerTarget<T: RenderTarget> {
    inner: T,
    bar: ProgressBar,
    loaded: usize,
}

impl<T: RenderTarget> SpinnerTarget<T> {
    pub fn new(inner: T) -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::hidden();
        bar.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        Ok(Self {
            inner,
            bar,
            loaded: 0,
        })
    }
}

impl<T: RenderTarget> RenderTarget for SpinnerTarget<T> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            self.bar.set_message("Loading slides...");
            self.bar.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.bar.finish_and_clear();
        }
        self.inner.set_loading(loading);
    }

    fn append_section(&mut self, section: PresentationSection) {
        self.loaded += 1;
        if let Some(ref name) = section.filename {
            self.bar
                .set_message(format!("Loaded {} ({} so far)", name, self.loaded));
        }
        self.inner.append_section(section);
    }

    fn show_error(&mut self, message: &str) {
        self.inner.show_error(message);
    }

    fn initialize_engine(&mut self, engine: &EngineConfig) -> slideloader::Result<()> {
        self.bar.set_message("Initializing presentation");
        self.inner.initialize_engine(engine)
    }
}
