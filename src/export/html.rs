//! HTML Export Generation
//!
//! This module generates a standalone, navigable HTML page from a
//! conversation: questions as numbered blocks, answers converted from
//! Markdown, and a sidebar table of contents linking to every question and
//! to the level-2 headings of its answer.
//!
//! Anchor scheme: question blocks carry `id="Q<n>"`, answer headings carry
//! `id="<slug>"` (see [`slugify`]). Sidebar entries use the classes `toc-q`
//! and `toc-h2`.

use super::assets::{FONT_LINKS, SCRIPT_JS, STYLE_CSS};
use super::timestamp::format_timestamp;
use crate::conversation::{Conversation, Role};
use crate::error::{Error, Result};
use crate::markdown::{extract_h2_headings, slugify, MarkdownConverter};
use crate::string_utils::truncate_with_ellipsis;
use chrono::NaiveDateTime;
use log::error;

/// Default length of question labels in the sidebar, in characters.
pub const DEFAULT_TOC_LABEL_CHARS: usize = 60;

// ─────────────────────────────────────────────────────────────────────────────
// HTML Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Renders conversations as standalone HTML documents.
pub struct HtmlRenderer<'a> {
    converter: &'a dyn MarkdownConverter,
    toc_label_chars: usize,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(converter: &'a dyn MarkdownConverter) -> Self {
        Self {
            converter,
            toc_label_chars: DEFAULT_TOC_LABEL_CHARS,
        }
    }

    /// Set the maximum sidebar label length.
    pub fn with_toc_label_chars(mut self, chars: usize) -> Self {
        self.toc_label_chars = chars;
        self
    }

    /// Generate the complete HTML document.
    ///
    /// Fails with [`Error::RendererUnavailable`] when the Markdown converter
    /// cannot be used; nothing is produced in that case.
    pub fn render(
        &self,
        title: &str,
        conversation: &Conversation,
        exported_at: &NaiveDateTime,
    ) -> Result<String> {
        if !self.converter.is_available() {
            error!("Markdown renderer not available, cannot generate HTML");
            return Err(Error::RendererUnavailable);
        }

        let content = self.render_content(conversation)?;
        let toc = render_toc(conversation, self.toc_label_chars);
        let title = html_escape(title);

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="ask-exporter">
    <title>{title}</title>
    {fonts}
    <style>
{css}
    </style>
</head>
<body>
    <div class="container">
        <nav class="toc-sidebar">
            <h2>📑 Contents</h2>
{toc}
        </nav>
        <main class="main-content">
            <div class="header">
                <h1>{title}</h1>
                <div class="meta">Exported: {exported}</div>
            </div>
            <div class="content">
{content}
            </div>
        </main>
    </div>
    <script>
{script}
    </script>
</body>
</html>
"#,
            title = title,
            fonts = FONT_LINKS,
            css = STYLE_CSS,
            toc = toc,
            exported = format_timestamp(exported_at),
            content = content,
            script = SCRIPT_JS,
        );

        Ok(html)
    }

    /// Render the question and answer blocks in conversation order.
    fn render_content(&self, conversation: &Conversation) -> Result<String> {
        let mut html = String::new();
        let mut first_question = true;

        for turn in conversation.turns() {
            match turn.role {
                Role::User => {
                    if !first_question {
                        html.push_str("<div class=\"separator\">───────</div>\n");
                    }
                    first_question = false;

                    html.push_str(&format!(
                        "<div id=\"Q{n}\" class=\"question\">\n<blockquote><strong>Q{n}:</strong><br>\n<pre class=\"question-text\">{text}</pre>\n</blockquote>\n</div>\n",
                        n = turn.ordinal,
                        text = html_escape(&turn.content),
                    ));
                }
                Role::Assistant => {
                    html.push_str("<div class=\"answer\">\n");
                    html.push_str(&self.converter.to_html(&turn.content)?);
                    html.push_str("</div>\n");
                }
            }
        }

        Ok(html)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table of Contents
// ─────────────────────────────────────────────────────────────────────────────

/// Build the sidebar list.
///
/// One `toc-q` entry per question, then one `toc-h2` entry per level-2
/// heading of the answer directly after it. A question that is not followed
/// by an answer gets no nested entries.
pub fn render_toc(conversation: &Conversation, label_chars: usize) -> String {
    let mut html = String::from("<ul>\n");

    for (idx, turn) in conversation.turns().iter().enumerate() {
        if !turn.is_user() {
            continue;
        }

        let label = truncate_with_ellipsis(&turn.content, label_chars);
        html.push_str(&format!(
            "<li><a href=\"#Q{n}\" class=\"toc-q\">Q{n}: {label}</a></li>\n",
            n = turn.ordinal,
            label = html_escape(&label),
        ));

        if let Some(answer) = conversation.answer_after(idx) {
            for heading in extract_h2_headings(&answer.content) {
                html.push_str(&format!(
                    "<li><a href=\"#{id}\" class=\"toc-h2\">{text}</a></li>\n",
                    id = slugify(&heading),
                    text = html_escape(&heading),
                ));
            }
        }
    }

    html.push_str("</ul>");
    html
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// HTML-escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
