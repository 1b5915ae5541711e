//! Error types for slideloader.

use std::io;
use thiserror::Error;

/// Result type alias for slideloader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A content request returned a non-success status or could not complete.
    #[error("Failed to fetch {filename}: {reason}")]
    Fetch {
        /// The slide file that could not be fetched
        filename: String,
        /// Status line or transport error
        reason: String,
    },

    /// A payload could not be decoded into text.
    #[error("Failed to decode {filename}: {reason}")]
    Decode {
        /// The slide file whose payload was rejected
        filename: String,
        /// What went wrong while decoding
        reason: String,
    },

    /// The presentation engine refused to initialize.
    #[error("Presentation engine failed to initialize: {0}")]
    EngineInit(String),

    /// The content request configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A loader was asked to run a second time.
    #[error("Load has already been started")]
    AlreadyStarted,

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a fetch error for `filename`.
    pub fn fetch(filename: impl Into<String>, reason: impl ToString) -> Self {
        Error::Fetch {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a decode error for `filename`.
    pub fn decode(filename: impl Into<String>, reason: impl ToString) -> Self {
        Error::Decode {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }

    /// The slide file this error is about, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Error::Fetch { filename, .. } | Error::Decode { filename, .. } => Some(filename),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON error: {}", err))
    }
}
