//! ask-exporter - Main Entry Point
//!
//! Exports a Brave Ask (Leo) chat to Markdown and a navigable HTML page by
//! pressing every message's copy button and reading the clipboard back.

mod config;
mod conversation;
mod error;
mod export;
mod extract;
mod markdown;
mod progress;
mod string_utils;

use clap::Parser;
use config::{load_config, save_config, ClipboardBackend, Settings};
use error::Result;
use export::{default_title, export, DirectorySink, ExportReport};
use extract::{Clipboard, MemoryClipboard, SnapshotPage, SystemClipboard};
use log::{info, warn};
use markdown::ComrakConverter;
use progress::LogProgress;
use std::path::PathBuf;
use std::process::ExitCode;

/// Application name constant.
const APP_NAME: &str = "ask-exporter";

#[derive(Parser, Debug)]
#[command(name = "ask-exporter")]
#[command(version, about = "Export Brave Ask conversations to Markdown and HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    ask-exporter chat.json                 Export with configured formats
    ask-exporter chat.json --html -o out   HTML only, into ./out
    ask-exporter chat.json --title \"Notes\" --clipboard memory")]
struct Cli {
    /// Captured chat page (JSON snapshot)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Document title; derived from the first question if omitted
    #[arg(short, long)]
    title: Option<String>,

    /// Produce the Markdown transcript
    #[arg(long)]
    markdown: bool,

    /// Produce the HTML page
    #[arg(long)]
    html: bool,

    /// Directory to write documents into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Wait between pressing a copy button and reading the clipboard
    #[arg(long, value_name = "MS")]
    copy_delay_ms: Option<u64>,

    /// Clipboard used for extraction
    #[arg(long, value_enum)]
    clipboard: Option<ClipboardBackend>,

    /// Open the first written document when done
    #[arg(long)]
    open: bool,

    /// Persist the effective settings as the new defaults
    #[arg(long)]
    save_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded settings.
    fn apply(&self, settings: &mut Settings) {
        if self.markdown || self.html {
            settings.default_formats = export::ExportFormat::all()
                .iter()
                .copied()
                .filter(|format| match format {
                    export::ExportFormat::Markdown => self.markdown,
                    export::ExportFormat::Html => self.html,
                })
                .collect();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_directory = Some(dir.clone());
        }
        if let Some(ms) = self.copy_delay_ms {
            settings.copy_delay_ms = ms;
        }
        if let Some(backend) = self.clipboard {
            settings.clipboard = backend;
        }
        if self.open {
            settings.open_after_export = true;
        }
        settings.sanitize();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("Starting {}", APP_NAME);

    match run(&cli) {
        Ok(report) => {
            for path in &report.files {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExportReport> {
    let mut settings = load_config();
    cli.apply(&mut settings);

    if cli.save_config {
        let path = save_config(&settings)?;
        info!("Saved settings to {}", path.display());
    }

    let mut page = SnapshotPage::load(&cli.snapshot)?;

    let title = resolve_title(cli.title.as_deref(), &page, settings.max_title_length);
    info!("Exporting \"{}\"", title);

    let mut clipboard: Box<dyn Clipboard> = match settings.clipboard {
        ClipboardBackend::System => Box::new(SystemClipboard::new()?),
        ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
    };
    info!("Using {} clipboard", settings.clipboard.label());

    let output_dir = settings
        .output_directory
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut sink = DirectorySink::new(output_dir);

    let request = settings.export_request(title);
    let report = export(
        &request,
        &mut page,
        clipboard.as_mut(),
        &ComrakConverter::new(),
        &mut sink,
        &mut LogProgress,
    )?;

    info!(
        "Exported {} questions and {} answers ({} turns) to {}",
        report.user_messages,
        report.answers,
        report.turns,
        sink.directory().display()
    );

    if settings.open_after_export {
        if let Some(first) = report.files.first() {
            if let Err(e) = open::that(first) {
                warn!("Failed to open {}: {}", first.display(), e);
            }
        }
    }

    Ok(report)
}

/// Pick the document title: `--title`, then the snapshot's own title, then
/// one derived from the first question. Blank candidates are skipped.
fn resolve_title(requested: Option<&str>, page: &SnapshotPage, max_chars: usize) -> String {
    requested
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| page.title.as_deref().map(str::trim).filter(|t| !t.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| default_title(page, max_chars))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
