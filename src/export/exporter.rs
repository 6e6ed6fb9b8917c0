//! Export orchestration
//!
//! Drives one export run end to end: copy the user messages, copy the
//! answers, rebuild the conversation, then render and save each selected
//! document. Every stage is announced to a [`Progress`] observer.

use super::html::HtmlRenderer;
use super::markdown::render_markdown;
use super::options::{ExportFormat, ExportRequest};
use super::sink::ExportSink;
use super::timestamp;
use crate::conversation::{Conversation, Role};
use crate::error::{Error, Result};
use crate::extract::{ChatPage, Clipboard, ClipboardExtractor};
use crate::markdown::MarkdownConverter;
use crate::progress::Progress;
use crate::string_utils::{sanitize_filename, truncate_with_ellipsis};
use log::{info, warn};
use std::path::PathBuf;
use std::thread;

/// Title used when the page has no user message to derive one from.
pub const FALLBACK_TITLE: &str = "Brave Ask Conversation";

/// Default maximum length of a derived title, in characters.
pub const DEFAULT_TITLE_CHARS: usize = 40;

/// Outcome of a successful export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// User messages copied off the page
    pub user_messages: usize,
    /// AI answers copied off the page
    pub answers: usize,
    /// Turns in the rebuilt conversation
    pub turns: usize,
    /// Files written, in the order they were saved
    pub files: Vec<PathBuf>,
    /// Formats that were selected but could not be produced
    pub skipped: Vec<ExportFormat>,
}

/// Derive a title from the first user message, or fall back to a fixed one.
pub fn default_title(page: &dyn ChatPage, max_chars: usize) -> String {
    page.first_user_text()
        .map(|text| truncate_with_ellipsis(&text, max_chars))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Run a complete export.
///
/// Fails with [`Error::NoFormatSelected`] before touching the page when no
/// format is requested. Any other failure is reported to `progress` and
/// returned; `progress.finish()` is called either way once the run started.
pub fn export(
    request: &ExportRequest,
    page: &mut dyn ChatPage,
    clipboard: &mut dyn Clipboard,
    converter: &dyn MarkdownConverter,
    sink: &mut dyn ExportSink,
    progress: &mut dyn Progress,
) -> Result<ExportReport> {
    request.validate()?;

    let result = run(request, page, clipboard, converter, sink, progress);
    match &result {
        Ok(_) => {
            progress.update("Export complete! ✓");
            thread::sleep(request.completion_delay);
        }
        Err(err) => progress.failed(err),
    }
    progress.finish();

    result
}

fn run(
    request: &ExportRequest,
    page: &mut dyn ChatPage,
    clipboard: &mut dyn Clipboard,
    converter: &dyn MarkdownConverter,
    sink: &mut dyn ExportSink,
    progress: &mut dyn Progress,
) -> Result<ExportReport> {
    let extractor = ClipboardExtractor::new(request.copy_delay);

    progress.update("Copying user messages...");
    let user_texts = extractor.extract(page, clipboard, Role::User)?;

    progress.update("Copying AI answers...");
    let answer_texts = extractor.extract(page, clipboard, Role::Assistant)?;

    progress.update("Building conversation...");
    let conversation = Conversation::build(&user_texts, &answer_texts);
    info!(
        "Built conversation with {} turns from {} questions and {} answers",
        conversation.len(),
        user_texts.len(),
        answer_texts.len()
    );
    if conversation.is_empty() {
        warn!("No messages were copied; the documents will only contain the header");
    }

    let mut report = ExportReport {
        user_messages: user_texts.len(),
        answers: answer_texts.len(),
        turns: conversation.len(),
        ..Default::default()
    };

    let exported_at = timestamp::now();
    let stem = sanitize_filename(&request.title);

    for format in request.formats() {
        let file_name = format!("{}.{}", stem, format.extension());
        let document = match format {
            ExportFormat::Markdown => {
                progress.update("Generating Markdown...");
                render_markdown(&request.title, &conversation, &exported_at)
            }
            ExportFormat::Html => {
                progress.update("Generating HTML...");
                let rendered = HtmlRenderer::new(converter)
                    .with_toc_label_chars(request.toc_label_chars)
                    .render(&request.title, &conversation, &exported_at);
                match rendered {
                    Ok(html) => html,
                    Err(err @ Error::RendererUnavailable) => {
                        warn!("Skipping {} export: {}", format.label(), err);
                        progress.failed(&err);
                        report.skipped.push(format);
                        continue;
                    }
                    Err(err) => return Err(err),
                }
            }
        };

        report.files.push(sink.save(&file_name, &document)?);
    }

    Ok(report)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sink::{DirectorySink, MemorySink};
    use crate::extract::page::MessageHandle;
    use crate::extract::{ClipboardError, MemoryClipboard, SnapshotPage};
    use crate::markdown::ComrakConverter;
    use crate::progress::RecordingProgress;
    use std::cell::Cell;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    const RECURSION: &str = r###"{
        "title": "Recursion",
        "messages": [
            { "role": "user", "text": "What is recursion?", "copy": "What is recursion?" },
            { "role": "assistant", "copy": "## Definition\nA function that calls itself.\n\n## Example\n```js\nfoo()\n```" }
        ]
    }"###;

    fn request(title: &str) -> ExportRequest {
        ExportRequest::new(title).with_delays(Duration::ZERO, Duration::ZERO)
    }

    fn page(json: &str) -> SnapshotPage {
        SnapshotPage::from_json(json).unwrap()
    }

    fn contents<'a>(sink: &'a MemorySink, name: &str) -> &'a str {
        sink.files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, body)| body.as_str())
            .unwrap()
    }

    /// A page that counts every interaction.
    struct CountingPage {
        locates: Cell<usize>,
    }

    impl ChatPage for CountingPage {
        fn locate(&self, _role: Role) -> Vec<MessageHandle> {
            self.locates.set(self.locates.get() + 1);
            Vec::new()
        }

        fn trigger_copy(
            &mut self,
            _handle: &MessageHandle,
            _clipboard: &mut dyn Clipboard,
        ) -> Result<()> {
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn read_text(&mut self) -> std::result::Result<String, ClipboardError> {
            Err(ClipboardError::ReadError("permission denied".to_string()))
        }

        fn write_text(&mut self, _text: &str) -> std::result::Result<(), ClipboardError> {
            Ok(())
        }
    }

    struct MissingConverter;

    impl MarkdownConverter for MissingConverter {
        fn is_available(&self) -> bool {
            false
        }

        fn to_html(&self, _markdown: &str) -> Result<String> {
            Err(Error::RendererUnavailable)
        }
    }

    #[test]
    fn test_recursion_export() {
        let mut page = page(RECURSION);
        let mut clipboard = MemoryClipboard::new();
        let mut sink = MemorySink::default();
        let mut progress = RecordingProgress::default();

        let report = export(
            &request("Recursion"),
            &mut page,
            &mut clipboard,
            &ComrakConverter::new(),
            &mut sink,
            &mut progress,
        )
        .unwrap();

        assert_eq!(report.user_messages, 1);
        assert_eq!(report.answers, 1);
        assert_eq!(report.turns, 2);
        assert_eq!(
            report.files,
            vec![PathBuf::from("Recursion.md"), PathBuf::from("Recursion.html")]
        );
        assert!(report.skipped.is_empty());

        let md = contents(&sink, "Recursion.md");
        assert!(md.contains("◤━━━━━━ Q1 ━━━━━◥\nWhat is recursion?\n◣━━━━━━ Q1 ━━━━━◢"));
        assert!(md.contains("## Definition"));

        let html = contents(&sink, "Recursion.html");
        assert!(html.contains("<a href=\"#Q1\" class=\"toc-q\">Q1: What is recursion?</a>"));
        assert!(html.contains("<a href=\"#definition\" class=\"toc-h2\">Definition</a>"));
        assert!(html.contains("<a href=\"#example\" class=\"toc-h2\">Example</a>"));
        assert!(html.contains("<h2 id=\"definition\">"));
        assert!(html.contains("<h2 id=\"example\">"));
        assert!(html.contains("<div id=\"Q1\" class=\"question\">"));
    }

    #[test]
    fn test_stage_messages() {
        let mut page = page(RECURSION);
        let mut progress = RecordingProgress::default();

        export(
            &request("Recursion"),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut MemorySink::default(),
            &mut progress,
        )
        .unwrap();

        assert_eq!(
            progress.messages,
            vec![
                "Copying user messages...",
                "Copying AI answers...",
                "Building conversation...",
                "Generating Markdown...",
                "Generating HTML...",
                "Export complete! ✓",
            ]
        );
        assert!(progress.failures.is_empty());
        assert!(progress.finished);
    }

    #[test]
    fn test_no_format_selected_has_no_side_effects() {
        let mut page = CountingPage {
            locates: Cell::new(0),
        };
        let mut sink = MemorySink::default();
        let mut progress = RecordingProgress::default();

        let result = export(
            &request("Chat").with_formats(false, false),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut sink,
            &mut progress,
        );

        assert!(matches!(result, Err(Error::NoFormatSelected)));
        assert_eq!(page.locates.get(), 0);
        assert!(sink.files.is_empty());
        assert!(progress.messages.is_empty());
        assert!(!progress.finished);
    }

    #[test]
    fn test_markdown_only() {
        let mut page = page(RECURSION);
        let mut sink = MemorySink::default();
        let mut progress = RecordingProgress::default();

        export(
            &request("Recursion").with_formats(true, false),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut sink,
            &mut progress,
        )
        .unwrap();

        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.files[0].0, "Recursion.md");
        assert!(!progress.messages.iter().any(|m| m == "Generating HTML..."));
    }

    #[test]
    fn test_unavailable_renderer_skips_html_only() {
        let mut page = page(RECURSION);
        let mut sink = MemorySink::default();
        let mut progress = RecordingProgress::default();

        let report = export(
            &request("Recursion"),
            &mut page,
            &mut MemoryClipboard::new(),
            &MissingConverter,
            &mut sink,
            &mut progress,
        )
        .unwrap();

        assert_eq!(report.files, vec![PathBuf::from("Recursion.md")]);
        assert_eq!(report.skipped, vec![ExportFormat::Html]);
        assert_eq!(
            progress.failures,
            vec!["HTML export failed: Markdown renderer not available."]
        );
        assert!(progress.finished);
    }

    #[test]
    fn test_clipboard_failure_aborts() {
        let mut page = page(RECURSION);
        let mut sink = MemorySink::default();
        let mut progress = RecordingProgress::default();

        let result = export(
            &request("Recursion"),
            &mut page,
            &mut DeniedClipboard,
            &ComrakConverter::new(),
            &mut sink,
            &mut progress,
        );

        assert!(matches!(result, Err(Error::Clipboard(_))));
        assert!(sink.files.is_empty());
        assert_eq!(progress.failures.len(), 1);
        assert!(progress.finished);
        assert!(!progress.messages.iter().any(|m| m == "Export complete! ✓"));
    }

    #[test]
    fn test_title_is_sanitized_for_file_names() {
        let mut page = page(RECURSION);
        let mut sink = MemorySink::default();

        export(
            &request("My:Chat*Export?"),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut sink,
            &mut RecordingProgress::default(),
        )
        .unwrap();

        assert_eq!(sink.files[0].0, "MyChatExport.md");
        assert_eq!(sink.files[1].0, "MyChatExport.html");
        assert!(sink.files[0].1.contains("**Title:** My:Chat*Export?"));
    }

    #[test]
    fn test_export_to_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut page = page(RECURSION);
        let mut sink = DirectorySink::new(dir.path());

        let report = export(
            &request("Recursion"),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut sink,
            &mut RecordingProgress::default(),
        )
        .unwrap();

        assert_eq!(report.files.len(), 2);
        let md = fs::read_to_string(dir.path().join("Recursion.md")).unwrap();
        assert!(md.starts_with("---\n**Title:** Recursion\n"));
        assert!(dir.path().join("Recursion.html").exists());
    }

    #[test]
    fn test_missing_copy_button_shifts_pairing() {
        let json = r#"{
            "messages": [
                { "role": "user", "copy": "q1" },
                { "role": "assistant", "copy": null },
                { "role": "user", "copy": "q2" },
                { "role": "assistant", "copy": "a2" }
            ]
        }"#;
        let mut page = page(json);
        let mut sink = MemorySink::default();

        let report = export(
            &request("Chat").with_formats(true, false),
            &mut page,
            &mut MemoryClipboard::new(),
            &ComrakConverter::new(),
            &mut sink,
            &mut RecordingProgress::default(),
        )
        .unwrap();

        assert_eq!(report.answers, 1);
        // a2 now follows q1
        let md = contents(&sink, "Chat.md");
        assert!(md.contains("◣━━━━━━ Q1 ━━━━━◢\n\na2\n\n---\n\n"));
    }

    #[test]
    fn test_default_title() {
        let long = page(r#"{ "messages": [
            { "role": "user", "text": "  Explain the difference between processes and threads please  ", "copy": "x" }
        ] }"#);
        assert_eq!(
            default_title(&long, DEFAULT_TITLE_CHARS),
            "Explain the difference between processes..."
        );

        let short = page(r#"{ "messages": [ { "role": "user", "text": "Hi", "copy": "Hi" } ] }"#);
        assert_eq!(default_title(&short, DEFAULT_TITLE_CHARS), "Hi");

        let empty = page(r#"{ "messages": [] }"#);
        assert_eq!(default_title(&empty, DEFAULT_TITLE_CHARS), FALLBACK_TITLE);
    }
}
