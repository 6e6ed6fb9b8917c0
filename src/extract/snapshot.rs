//! Page snapshots
//!
//! A snapshot is a JSON capture of a chat page's message containers: the
//! role of each container, its visible text and the payload its copy button
//! puts on the clipboard (`null` when the button is missing).
//!
//! ```json
//! {
//!   "title": "Recursion",
//!   "messages": [
//!     { "role": "user", "text": "What is recursion?", "copy": "What is recursion?" },
//!     { "role": "assistant", "copy": "## Definition\nA function that calls itself." }
//!   ]
//! }
//! ```

use super::clipboard::Clipboard;
use super::page::{ChatPage, MessageHandle};
use crate::conversation::Role;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ─────────────────────────────────────────────────────────────────────────────
// Snapshot Format
// ─────────────────────────────────────────────────────────────────────────────

/// One captured message container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    pub role: Role,
    /// Visible text of the container
    #[serde(default)]
    pub text: String,
    /// What the copy button writes to the clipboard; `None` if there is no button
    #[serde(default)]
    pub copy: Option<String>,
}

/// A captured chat page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPage {
    /// Page title, if the capture recorded one
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<SnapshotMessage>,
}

impl SnapshotPage {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading page snapshot from: {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| Error::SnapshotLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&contents).map_err(|e| Error::SnapshotParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn messages_for(&self, role: Role) -> impl Iterator<Item = &SnapshotMessage> {
        self.messages.iter().filter(move |m| m.role == role)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChatPage Implementation
// ─────────────────────────────────────────────────────────────────────────────

impl ChatPage for SnapshotPage {
    fn locate(&self, role: Role) -> Vec<MessageHandle> {
        self.messages_for(role)
            .enumerate()
            .map(|(position, message)| MessageHandle {
                role,
                position,
                has_copy_control: message.copy.is_some(),
            })
            .collect()
    }

    fn trigger_copy(
        &mut self,
        handle: &MessageHandle,
        clipboard: &mut dyn Clipboard,
    ) -> Result<()> {
        let payload = self
            .messages_for(handle.role)
            .nth(handle.position)
            .and_then(|m| m.copy.as_deref())
            .ok_or_else(|| {
                Error::Application(format!(
                    "No copy button on {} container {}",
                    handle.role.label(),
                    handle.position + 1
                ))
            })?;

        clipboard.write_text(payload)?;
        Ok(())
    }

    fn first_user_text(&self) -> Option<String> {
        self.messages_for(Role::User)
            .next()
            .map(|m| m.text.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
