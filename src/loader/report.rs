//! Load outcome statistics.

use crate::model::FetchedDocument;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected while a deck loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Name of the content source
    pub source: String,

    /// Number of fetches issued
    pub fetch_count: usize,

    /// Number of sections appended
    pub section_count: usize,

    /// Decoded text size in bytes
    pub bytes_decoded: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// When the load started
    pub started_at: DateTime<Utc>,

    /// When the load finished
    pub finished_at: Option<DateTime<Utc>>,
}

impl LoadReport {
    /// Start a report for a load from `source`.
    pub fn start(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fetch_count: 0,
            section_count: 0,
            bytes_decoded: 0,
            word_count: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Record that a fetch was issued.
    pub fn add_fetch(&mut self) {
        self.fetch_count += 1;
    }

    /// Record a decoded document that became a section.
    pub fn add_section(&mut self, document: &FetchedDocument) {
        self.section_count += 1;
        self.bytes_decoded += document.decoded_len();
        self.word_count += document.text.split_whitespace().count();
    }

    /// Stamp the finish time.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the load, once finished.
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_section_counts_text() {
        let mut report = LoadReport::start("mock");
        report.add_fetch();
        report.add_section(&FetchedDocument::new("a.md", "", "Hello, world! This is a test."));

        assert_eq!(report.fetch_count, 1);
        assert_eq!(report.section_count, 1);
        assert_eq!(report.word_count, 6);
        assert_eq!(report.bytes_decoded, 29);
    }

    #[test]
    fn test_elapsed_after_finish() {
        let mut report = LoadReport::start("mock");
        assert!(report.elapsed().is_none());
        report.finish();
        assert!(report.elapsed().unwrap() >= chrono::Duration::zero());
    }
}
