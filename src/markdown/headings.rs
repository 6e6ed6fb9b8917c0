//! Heading extraction and anchor slugs
//!
//! Answers are scanned line by line for level-2 headings, which populate the
//! sidebar of the HTML export. The slug function here is the single source of
//! anchor ids: the converter uses it for heading `id` attributes and the
//! table of contents uses it for `href` targets.

use regex::Regex;
use std::sync::OnceLock;

/// Runs of characters outside ASCII `[A-Za-z0-9_]`.
static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"[^0-9A-Za-z_]+").expect("valid slug pattern"))
}

/// Turn heading text into an anchor id.
///
/// Lowercases, collapses every run of non-word characters into a single
/// hyphen and strips hyphens from both ends. Applying it twice yields the
/// same result.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let collapsed = non_word().replace_all(lower.trim(), "-");
    collapsed.trim_matches('-').to_string()
}

/// Extract level-2 (`## `) headings from Markdown text.
///
/// Lines inside fenced code blocks and blockquote lines are ignored. A line
/// starting with three backticks toggles the fence state and is never a
/// heading itself. Headings are returned in source order, duplicates kept.
pub fn extract_h2_headings(markdown: &str) -> Vec<String> {
    let mut headings = Vec::new();
    let mut in_code_block = false;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block || trimmed.starts_with('>') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("## ") {
            headings.push(rest.trim().to_string());
        }
    }

    headings
}

/// Strip the ATX markers from a heading source line.
///
/// `"### Title ##"` becomes `"Title"`. Used by the converter so that heading
/// ids are computed from the same text the extractor returns.
pub(crate) fn atx_heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }

    // Optional closing sequence: a run of '#' preceded by whitespace
    let rest = rest.trim();
    let without_closing = rest.trim_end_matches('#');
    let text = if without_closing.len() == rest.len() {
        rest
    } else if without_closing.is_empty() {
        ""
    } else if without_closing.ends_with(' ') || without_closing.ends_with('\t') {
        without_closing.trim_end()
    } else {
        rest
    };

    Some(text)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Getting Started!"), "getting-started");
        assert_eq!(slugify("Definition"), "definition");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Getting Started!");
        assert_eq!(slugify(&once), once);

        let once = slugify("  What's new in v2.0?  ");
        assert_eq!(once, "what-s-new-in-v2-0");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_keeps_underscores_and_collapses_runs() {
        assert_eq!(slugify("snake_case -- name"), "snake_case-name");
        assert_eq!(slugify("The `foo` fn"), "the-foo-fn");
    }

    #[test]
    fn test_slugify_non_ascii_is_separator() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_extract_skips_fenced_code() {
        let md = "## A\n```\n## B\n```\n## C";
        assert_eq!(extract_h2_headings(md), vec!["A", "C"]);
    }

    #[test]
    fn test_extract_only_in_fence_or_quote_is_empty() {
        let md = "Intro\n```md\n## Inside fence\n```\n> ## Quoted\n>## Also quoted";
        assert!(extract_h2_headings(md).is_empty());
    }

    #[test]
    fn test_extract_only_level_two() {
        let md = "# One\n## Two\n### Three\n##NoSpace\n  ##  Indented  ";
        assert_eq!(extract_h2_headings(md), vec!["Two", "Indented"]);
    }

    #[test]
    fn test_extract_keeps_duplicates_in_order() {
        let md = "## Example\ntext\n## Summary\n## Example";
        assert_eq!(extract_h2_headings(md), vec!["Example", "Summary", "Example"]);
    }

    #[test]
    fn test_extract_indented_fence_toggles() {
        let md = "  ```rust\n## hidden\n  ```\n## shown";
        assert_eq!(extract_h2_headings(md), vec!["shown"]);
    }

    #[test]
    fn test_atx_heading_text() {
        assert_eq!(atx_heading_text("## Example"), Some("Example"));
        assert_eq!(atx_heading_text("### Title ##"), Some("Title"));
        assert_eq!(atx_heading_text("## C#"), Some("C#"));
        assert_eq!(atx_heading_text("#hashtag"), None);
        assert_eq!(atx_heading_text("plain"), None);
    }
}
