//! Export Options and Configuration
//!
//! This module defines the output formats and the per-run export request.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::html::DEFAULT_TOC_LABEL_CHARS;
use crate::error::{Error, Result};
use crate::extract::extractor::DEFAULT_COPY_DELAY;

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// Supported output documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain Markdown transcript
    Markdown,
    /// Standalone HTML page with a table of contents
    Html,
}

impl ExportFormat {
    /// Get the display label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "Markdown",
            ExportFormat::Html => "HTML",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }

    /// Get all available export formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Markdown, ExportFormat::Html]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export Request
// ─────────────────────────────────────────────────────────────────────────────

/// One export run: what to call it, which documents to produce and how.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Document title; also the base of the output file names
    pub title: String,
    /// Produce the `.md` transcript
    pub markdown: bool,
    /// Produce the `.html` page
    pub html: bool,
    /// Wait between pressing a copy button and reading the clipboard
    pub copy_delay: Duration,
    /// Pause after the final status message
    pub completion_delay: Duration,
    /// Maximum sidebar label length, in characters
    pub toc_label_chars: usize,
}

impl ExportRequest {
    /// Create a request for both formats with default timings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markdown: true,
            html: true,
            copy_delay: DEFAULT_COPY_DELAY,
            completion_delay: Duration::from_millis(1000),
            toc_label_chars: DEFAULT_TOC_LABEL_CHARS,
        }
    }

    /// Select the output formats.
    pub fn with_formats(mut self, markdown: bool, html: bool) -> Self {
        self.markdown = markdown;
        self.html = html;
        self
    }

    /// Set both delays.
    pub fn with_delays(mut self, copy_delay: Duration, completion_delay: Duration) -> Self {
        self.copy_delay = copy_delay;
        self.completion_delay = completion_delay;
        self
    }

    /// Selected formats, Markdown first.
    pub fn formats(&self) -> Vec<ExportFormat> {
        ExportFormat::all()
            .iter()
            .copied()
            .filter(|format| match format {
                ExportFormat::Markdown => self.markdown,
                ExportFormat::Html => self.html,
            })
            .collect()
    }

    /// Check that at least one format is selected.
    pub fn validate(&self) -> Result<()> {
        if self.markdown || self.html {
            Ok(())
        } else {
            Err(Error::NoFormatSelected)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
