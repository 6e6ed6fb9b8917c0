//! Conversation Export Module
//!
//! This module turns a chat page into downloadable documents: a Markdown
//! transcript and a standalone HTML page with a navigable table of contents.
//!
//! # Architecture
//!
//! - `options.rs` - Output formats and the per-run request
//! - `exporter.rs` - Orchestration: extract, rebuild, render, save
//! - `markdown.rs` - Markdown transcript generation
//! - `html.rs` - HTML document and table of contents generation
//! - `assets.rs` - Stylesheet and script embedded in the HTML page
//! - `sink.rs` - Where finished documents are written
//! - `timestamp.rs` - Export time formatting

pub mod assets;
pub mod exporter;
pub mod html;
pub mod markdown;
pub mod options;
pub mod sink;
pub mod timestamp;

pub use exporter::{default_title, export, ExportReport};
pub use options::{ExportFormat, ExportRequest};
pub use sink::DirectorySink;
