//! Markdown processing for AI answers
//!
//! This module provides the two things the HTML export needs from an answer's
//! Markdown, both built on comrak, a CommonMark + GFM compatible parser:
//!
//! - Level-2 heading discovery for the table of contents ([`extract_h2_headings`])
//! - Conversion to an HTML fragment whose headings carry anchor ids
//!   ([`ComrakConverter`])
//!
//! Both sides derive anchors with [`slugify`], so every sidebar link resolves.
//!
//! # Example
//! ```ignore
//! use crate::markdown::{extract_h2_headings, slugify, ComrakConverter, MarkdownConverter};
//!
//! let answer = "## Definition\nA function that calls itself.";
//! let headings = extract_h2_headings(answer); // ["Definition"]
//! let html = ComrakConverter::new().to_html(answer)?;
//! assert!(html.contains(&format!("id=\"{}\"", slugify(&headings[0]))));
//! ```

pub mod converter;
pub mod headings;

pub use converter::{ComrakConverter, MarkdownConverter};
pub use headings::{extract_h2_headings, slugify};
