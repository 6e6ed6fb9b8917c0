//! Clipboard-driven message extraction
//!
//! For every message container the copy button is pressed, the page is given
//! a fixed settling delay to finish its clipboard write, and the clipboard is
//! read back. Only one value can live on the clipboard, so the cycle is
//! strictly sequential.

use super::clipboard::Clipboard;
use super::page::ChatPage;
use crate::conversation::Role;
use crate::error::Result;
use log::{debug, info, warn};
use std::thread;
use std::time::Duration;

/// Default wait between pressing a copy button and reading the clipboard.
pub const DEFAULT_COPY_DELAY: Duration = Duration::from_millis(200);

/// Copies messages off a page one at a time through the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardExtractor {
    copy_delay: Duration,
}

impl Default for ClipboardExtractor {
    fn default() -> Self {
        Self {
            copy_delay: DEFAULT_COPY_DELAY,
        }
    }
}

impl ClipboardExtractor {
    pub fn new(copy_delay: Duration) -> Self {
        Self { copy_delay }
    }

    /// Extract the trimmed text of every `role` message that has a copy button.
    ///
    /// Containers without a button are skipped with a warning, so the result
    /// may be shorter than the number of containers and later entries shift
    /// down. A failed clipboard read aborts the whole extraction.
    pub fn extract(
        &self,
        page: &mut dyn ChatPage,
        clipboard: &mut dyn Clipboard,
        role: Role,
    ) -> Result<Vec<String>> {
        let handles = page.locate(role);
        info!("Found {} containers for {}", handles.len(), role.label());

        let mut texts = Vec::with_capacity(handles.len());
        for handle in &handles {
            if !handle.has_copy_control {
                warn!(
                    "No copy button found in {} container {}",
                    role.label(),
                    handle.position + 1
                );
                continue;
            }

            debug!("Clicking copy button {} for {}", handle.position + 1, role.label());
            page.trigger_copy(handle, clipboard)?;
            thread::sleep(self.copy_delay);

            let text = clipboard.read_text()?;
            texts.push(text.trim().to_string());
        }

        info!("Total {} copied: {}", role.label(), texts.len());
        Ok(texts)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
