//! Markdown to HTML conversion using comrak
//!
//! Answers are rendered through the `MarkdownConverter` seam so that the HTML
//! export can detect a missing renderer and so tests can substitute one.
//! The comrak implementation gives every heading element an `id` computed by
//! [`slugify`] from the heading's source text, matching the sidebar links.

use super::headings::{atx_heading_text, slugify};
use crate::error::Result;
use comrak::{
    format_html,
    nodes::{Ast, AstNode, NodeHtmlBlock, NodeValue},
    parse_document, Arena, Options,
};
use std::cell::RefCell;

// ─────────────────────────────────────────────────────────────────────────────
// Converter Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Something that can turn Markdown into an HTML fragment.
pub trait MarkdownConverter {
    /// Whether the converter can be used at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Convert Markdown text into an HTML fragment.
    fn to_html(&self, markdown: &str) -> Result<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Comrak Converter
// ─────────────────────────────────────────────────────────────────────────────

/// GitHub-flavored Markdown rendering with slug ids on headings.
pub struct ComrakConverter {
    options: Options,
}

impl Default for ComrakConverter {
    fn default() -> Self {
        let mut options = Options::default();

        // Enable common extensions
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        // Answers come from the page's own rendered Markdown; keep raw HTML.
        // Also required for the id-bearing heading blocks spliced in below.
        options.render.unsafe_ = true;

        Self { options }
    }
}

impl ComrakConverter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkdownConverter for ComrakConverter {
    fn to_html(&self, markdown: &str) -> Result<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);
        let source_lines: Vec<&str> = markdown.lines().collect();

        let headings: Vec<&AstNode> = root
            .descendants()
            .filter(|node| matches!(node.data.borrow().value, NodeValue::Heading(_)))
            .collect();

        for node in headings {
            let (level, setext, start) = {
                let ast = node.data.borrow();
                match ast.value {
                    NodeValue::Heading(ref heading) => {
                        (heading.level, heading.setext, ast.sourcepos.start)
                    }
                    _ => continue,
                }
            };

            let text = if setext {
                None
            } else {
                start
                    .line
                    .checked_sub(1)
                    .and_then(|idx| source_lines.get(idx))
                    .and_then(|line| atx_heading_text(line))
                    .map(str::to_string)
            };
            let id = slugify(&text.unwrap_or_else(|| plain_text(node)));

            let mut rendered = Vec::new();
            format_html(node, &self.options, &mut rendered)?;
            let rendered = String::from_utf8_lossy(&rendered);
            let tagged = rendered.replacen(
                &format!("<h{}>", level),
                &format!("<h{} id=\"{}\">", level, id),
                1,
            );

            let block = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 6,
                literal: tagged,
            });
            let replacement = arena.alloc(AstNode::new(RefCell::new(Ast::new(block, start))));
            node.insert_before(replacement);
            node.detach();
        }

        let mut html = Vec::new();
        format_html(root, &self.options, &mut html)?;
        Ok(String::from_utf8_lossy(&html).into_owned())
    }
}

/// Concatenate the literal text below a node.
fn plain_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.descendants() {
        match child.data.borrow().value {
            NodeValue::Text(ref literal) => text.push_str(literal),
            NodeValue::Code(ref code) => text.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(markdown: &str) -> String {
        ComrakConverter::new().to_html(markdown).unwrap()
    }

    #[test]
    fn test_basic_markdown() {
        let html = convert("**Bold** and *italic*\n\n- item");
        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
        assert!(html.contains("<li>item</li>"));
    }

    #[test]
    fn test_heading_gets_slug_id() {
        let html = convert("## Getting Started!\n\nBody");
        assert!(html.contains("<h2 id=\"getting-started\">Getting Started!</h2>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn test_heading_ids_all_levels() {
        let html = convert("# Top\n\n### Deep Dive");
        assert!(html.contains("<h1 id=\"top\">Top</h1>"));
        assert!(html.contains("<h3 id=\"deep-dive\">Deep Dive</h3>"));
    }

    #[test]
    fn test_inline_markup_uses_source_text() {
        let html = convert("## The `foo` fn");
        assert!(html.contains("<h2 id=\"the-foo-fn\">"));
        assert!(html.contains("<code>foo</code>"));
    }

    #[test]
    fn test_setext_heading_uses_plain_text() {
        let html = convert("Overview\n--------\n");
        assert!(html.contains("<h2 id=\"overview\">Overview</h2>"));
    }

    #[test]
    fn test_duplicate_headings_share_id() {
        let html = convert("## Example\n\none\n\n## Example\n\ntwo");
        assert_eq!(html.matches("id=\"example\"").count(), 2);
    }

    #[test]
    fn test_code_block_not_a_heading() {
        let html = convert("```js\n## not a heading\n```");
        assert!(!html.contains("<h2"));
        assert!(html.contains("<pre><code class=\"language-js\">"));
    }

    #[test]
    fn test_comrak_is_available() {
        assert!(ComrakConverter::new().is_available());
    }
}
