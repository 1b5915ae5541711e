//! Transport decoding of slide payloads.

use crate::error::{Error, Result};
use crate::model::FetchedDocument;
use crate::source::{ContentPayload, PayloadEncoding};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use unicode_normalization::UnicodeNormalization;

/// UTF-8 byte order mark.
const UTF8_BOM: char = '\u{feff}';

/// Options for turning decoded bytes into slide text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Drop a leading byte order mark
    pub strip_bom: bool,

    /// Convert CRLF line endings to LF
    pub normalize_newlines: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,
}

impl DecodeOptions {
    /// Create decode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode bytes as-is, without any text normalization.
    pub fn raw() -> Self {
        Self {
            strip_bom: false,
            normalize_newlines: false,
            normalize_unicode: false,
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, enable: bool) -> Self {
        self.normalize_unicode = enable;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strip_bom: true,
            normalize_newlines: true,
            normalize_unicode: false,
        }
    }
}

/// Decode a base64 payload into bytes.
///
/// Whitespace inside the payload is ignored; the content API wraps its
/// base64 output at 60 columns.
///
/// # Example
///
/// ```
/// use slideloader::decode::decode_base64;
///
/// assert_eq!(decode_base64("aGVs\nbG8=").unwrap(), b"hello");
/// ```
pub fn decode_base64(payload: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}

/// Decode a payload delivered for `filename` into slide text.
///
/// # Example
///
/// ```
/// use slideloader::decode::{decode_payload, DecodeOptions};
///
/// let text = decode_payload("intro.md", "aGVsbG8=", &DecodeOptions::default()).unwrap();
/// assert_eq!(text, "hello");
/// ```
pub fn decode_payload(filename: &str, payload: &str, options: &DecodeOptions) -> Result<String> {
    let bytes = decode_base64(payload).map_err(|e| Error::decode(filename, e))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| Error::decode(filename, format!("payload is not UTF-8: {}", e)))?;
    Ok(normalize_text(text, options))
}

/// Decode a payload into a fetched document.
pub fn decode_document(payload: ContentPayload, options: &DecodeOptions) -> Result<FetchedDocument> {
    let text = match payload.encoding {
        PayloadEncoding::Base64 => decode_payload(&payload.filename, &payload.content, options)?,
        PayloadEncoding::Utf8 => normalize_text(payload.content.clone(), options),
    };
    Ok(FetchedDocument::new(payload.filename, payload.content, text))
}

/// Apply the text normalizations enabled in `options`.
pub fn normalize_text(text: String, options: &DecodeOptions) -> String {
    let mut text = text;

    if options.strip_bom && text.starts_with(UTF8_BOM) {
        text.replace_range(..UTF8_BOM.len_utf8(), "");
    }

    if options.normalize_newlines && text.contains('\r') {
        text = text.replace("\r\n", "\n");
    }

    if options.normalize_unicode {
        text = text.nfc().collect();
    }

    text
}
