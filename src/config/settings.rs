//! Settings struct and related types for ask-exporter configuration
//!
//! This module defines the user preferences for export runs. Every field has
//! a default, so partial or older config files still load.

use crate::export::exporter::DEFAULT_TITLE_CHARS;
use crate::export::html::DEFAULT_TOC_LABEL_CHARS;
use crate::export::{ExportFormat, ExportRequest};
use crate::extract::extractor::DEFAULT_COPY_DELAY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Backend
// ─────────────────────────────────────────────────────────────────────────────

/// Which clipboard the extractor talks to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// The operating system clipboard
    #[default]
    System,
    /// A private in-process clipboard (headless runs)
    Memory,
}

impl ClipboardBackend {
    /// Get the display label for this backend.
    pub fn label(&self) -> &'static str {
        match self {
            ClipboardBackend::System => "System",
            ClipboardBackend::Memory => "Memory",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted export preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wait between pressing a copy button and reading the clipboard (ms)
    pub copy_delay_ms: u64,

    /// Pause after the final status message (ms)
    pub completion_delay_ms: u64,

    /// Maximum length of a title derived from the first question
    pub max_title_length: usize,

    /// Maximum length of a question label in the HTML sidebar
    pub toc_label_length: usize,

    /// Formats produced when none are given on the command line
    pub default_formats: Vec<ExportFormat>,

    /// Where documents are written; the current directory if unset
    pub output_directory: Option<PathBuf>,

    /// Clipboard used for extraction
    pub clipboard: ClipboardBackend,

    /// Open the first written file when the export finishes
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_delay_ms: DEFAULT_COPY_DELAY.as_millis() as u64,
            completion_delay_ms: 1000,
            max_title_length: DEFAULT_TITLE_CHARS,
            toc_label_length: DEFAULT_TOC_LABEL_CHARS,
            default_formats: ExportFormat::all().to_vec(),
            output_directory: None,
            clipboard: ClipboardBackend::default(),
            open_after_export: false,
        }
    }
}

impl Settings {
    /// Maximum delay, in milliseconds, for both delays
    pub const MAX_DELAY_MS: u64 = 10_000;
    /// Minimum title and label length
    pub const MIN_LABEL_LENGTH: usize = 1;
    /// Maximum title and label length
    pub const MAX_LABEL_LENGTH: usize = 200;

    /// Sanitize settings by clamping values to valid ranges.
    pub fn sanitize(&mut self) {
        self.copy_delay_ms = self.copy_delay_ms.min(Self::MAX_DELAY_MS);
        self.completion_delay_ms = self.completion_delay_ms.min(Self::MAX_DELAY_MS);

        self.max_title_length = self
            .max_title_length
            .clamp(Self::MIN_LABEL_LENGTH, Self::MAX_LABEL_LENGTH);
        self.toc_label_length = self
            .toc_label_length
            .clamp(Self::MIN_LABEL_LENGTH, Self::MAX_LABEL_LENGTH);

        // Drop duplicates, keep first-seen order
        let mut formats = Vec::with_capacity(self.default_formats.len());
        for format in self.default_formats.drain(..) {
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        self.default_formats = formats;
    }

    /// Parse settings from JSON and sanitize the values.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Whether `format` is produced by default.
    pub fn wants(&self, format: ExportFormat) -> bool {
        self.default_formats.contains(&format)
    }

    pub fn copy_delay(&self) -> Duration {
        Duration::from_millis(self.copy_delay_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Build an export request from these settings.
    pub fn export_request(&self, title: impl Into<String>) -> ExportRequest {
        let mut request = ExportRequest::new(title)
            .with_formats(
                self.wants(ExportFormat::Markdown),
                self.wants(ExportFormat::Html),
            )
            .with_delays(self.copy_delay(), self.completion_delay());
        request.toc_label_chars = self.toc_label_length;
        request
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
