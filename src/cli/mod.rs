//! # CLI Module
//!
//! Command-line interface for the photo year sorter.
//!
//! ## Usage
//! ```bash
//! # Move everything from ~/OldPhotos into ~/Photos/<year>/
//! photo-sort ~/OldPhotos ~/Photos
//!
//! # Copy, keep source folders, keep sidecars, no filename inference
//! photo-sort ~/OldPhotos ~/Photos false false false false
//!
//! # Unattended, JSON report
//! photo-sort ~/OldPhotos ~/Photos --yes --output json
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use photo_year_sorter::core::organize::{
    OperationMode, RunConfiguration, RunStatistics, TreeWalker,
};
use photo_year_sorter::error::{OrganizeError, Result};
use photo_year_sorter::events::{Event, EventChannel, EventReceiver, OrganizeEvent};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Photo Year Sorter - file photos into year folders
#[derive(Parser, Debug)]
#[command(name = "photo-sort")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Source folder path
    source: PathBuf,

    /// Destination folder path (created if absent)
    destination: PathBuf,

    /// Move = true, Copy = false
    #[arg(default_value_t = true, action = ArgAction::Set)]
    move_files: bool,

    /// Delete source folders left empty (move only)
    #[arg(default_value_t = false, action = ArgAction::Set)]
    delete_empty_source_folders: bool,

    /// Delete .db and .xmp files (move only)
    #[arg(default_value_t = false, action = ArgAction::Set)]
    delete_redundant_files: bool,

    /// Infer the year from the filename or modification time when the
    /// photo carries no date
    #[arg(default_value_t = true, action = ArgAction::Set)]
    attempt_inference: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Report format
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Print every transferred file (skips and failures are always logged)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
}

impl Cli {
    fn configuration(&self) -> RunConfiguration {
        RunConfiguration {
            source: self.source.clone(),
            destination: self.destination.clone(),
            operation: OperationMode::from_move_flag(self.move_files),
            delete_empty_source_folders: self.delete_empty_source_folders,
            delete_redundant_files: self.delete_redundant_files,
            attempt_inference: self.attempt_inference,
        }
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.configuration();
    config.validate()?;

    let term = Term::stderr();
    print_configuration(&term, &config);

    if !cli.yes && !confirm(&term) {
        return Err(OrganizeError::Aborted);
    }

    let (sender, receiver) = EventChannel::new();
    let pretty = matches!(cli.output, OutputFormat::Pretty);
    let verbose = cli.verbose;
    let event_thread = thread::spawn(move || render_events(receiver, pretty, verbose));

    let result = TreeWalker::new(&config, &sender).run();

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    let stats = result?;
    match cli.output {
        OutputFormat::Pretty => print_pretty_report(&term, &stats),
        OutputFormat::Json => print_json_report(&stats),
    }

    Ok(())
}

fn print_configuration(term: &Term, config: &RunConfiguration) {
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    term.write_line(&format!("{}", style("Checking arguments:").bold()))
        .ok();
    term.write_line(&format!("  Source folder:               {}", config.source.display()))
        .ok();
    term.write_line(&format!(
        "  Destination folder:          {}",
        config.destination.display()
    ))
    .ok();
    term.write_line(&format!("  Move or copy:                {}", config.operation))
        .ok();
    term.write_line(&format!(
        "  Delete empty source folders: {}",
        yes_no(config.delete_empty_source_folders)
    ))
    .ok();
    term.write_line(&format!(
        "  Delete .db/.xmp files:       {}",
        yes_no(config.delete_redundant_files)
    ))
    .ok();
    term.write_line(&format!(
        "  Infer missing dates:         {}",
        yes_no(config.attempt_inference)
    ))
    .ok();

    if !config.is_move() && (config.delete_empty_source_folders || config.delete_redundant_files) {
        term.write_line(&format!(
            "  {}",
            style("(copy mode: nothing is deleted from the source)").dim()
        ))
        .ok();
    }
}

/// Ask for a single `y` keystroke. Falls back to a line of input when
/// stdin is not a terminal.
fn confirm(term: &Term) -> bool {
    term.write_line(&format!("{}", style("Is this right? [y/n]").cyan()))
        .ok();

    let answer = term.read_char().or_else(|_| {
        term.read_line()
            .map(|line| line.trim().chars().next().unwrap_or('n'))
    });

    matches!(answer, Ok('y') | Ok('Y'))
}

fn render_events(receiver: EventReceiver, pretty: bool, verbose: bool) {
    let progress = if pretty {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {pos} files placed {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    for event in receiver.iter() {
        let Event::Organize(event) = event;
        match event {
            OrganizeEvent::DirectoryEntered { path } => {
                if let Some(ref pb) = progress {
                    pb.set_message(path.display().to_string());
                }
            }
            OrganizeEvent::FileTransferred(t) => {
                if let Some(ref pb) = progress {
                    pb.inc(1);
                    if verbose {
                        pb.println(format!(
                            "{} {} -> {} ({})",
                            style("✓").green(),
                            t.source.display(),
                            t.destination.display(),
                            t.method
                        ));
                    }
                }
            }
            OrganizeEvent::Completed(_) => {
                if let Some(ref pb) = progress {
                    pb.finish_and_clear();
                }
            }
            _ => {}
        }
    }
}

fn print_pretty_report(term: &Term, stats: &RunStatistics) {
    term.write_line("").ok();
    term.write_line(&format!("{} All done!", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    term.write_line(&format!(
        "  {} files moved or copied",
        style(stats.files_processed).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "    {} by capture time",
        style(stats.files_by_capture_time).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "    {} by file modified date",
        style(stats.files_by_file_modified_date).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "    {} by inference",
        style(stats.files_by_inference).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} moved or copied",
        style(format_bytes(stats.bytes_processed)).yellow()
    ))
    .ok();
    term.write_line(&format!(
        "  {} files skipped",
        style(stats.files_skipped).cyan()
    ))
    .ok();
    if stats.files_skipped > 0 {
        term.write_line(&format!(
            "    {}",
            style(format!(
                "{} unreadable, {} without a date, {} duplicates, {} failed transfers",
                stats.skipped_unreadable,
                stats.skipped_no_date,
                stats.skipped_duplicate,
                stats.skipped_transfer_failed
            ))
            .dim()
        ))
        .ok();
    }
    term.write_line(&format!(
        "  {} source folders deleted",
        style(stats.source_folders_deleted).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  {} redundant files deleted",
        style(stats.redundant_files_deleted).cyan()
    ))
    .ok();
}

fn print_json_report(stats: &RunStatistics) {
    match serde_json::to_string_pretty(stats) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to serialize report"),
    }
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
