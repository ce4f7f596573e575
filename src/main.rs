//! # photo-sort CLI
//!
//! Command-line interface for the photo year sorter.
//!
//! ## Usage
//! ```bash
//! photo-sort ~/OldPhotos ~/Photos
//! photo-sort ~/OldPhotos ~/Photos false          # copy instead of move
//! photo-sort ~/OldPhotos ~/Photos true true true # move, prune, delete sidecars
//! ```

mod cli;

use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    photo_year_sorter::init_tracing();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
