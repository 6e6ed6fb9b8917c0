//! Message extraction
//!
//! This module reads a conversation off a chat page by pressing each
//! message's copy button and reading the clipboard.
//!
//! # Architecture
//!
//! - `page.rs` - The `ChatPage` capability the extractor drives
//! - `snapshot.rs` - A `ChatPage` backed by a JSON page capture
//! - `clipboard.rs` - System and in-memory clipboards
//! - `extractor.rs` - The sequential copy, wait, read loop

pub mod clipboard;
pub mod extractor;
pub mod page;
pub mod snapshot;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use extractor::ClipboardExtractor;
pub use page::ChatPage;
pub use snapshot::SnapshotPage;
