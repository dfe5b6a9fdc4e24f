//! # CLI Layer
//!
//! One possible client for tutz. It is the only code that touches the
//! terminal: it resolves the data directory, sets up logging, feeds command
//! lines to [`TutzApi`] and prints the filtered view and feedback.
//!
//! Two modes:
//! - one-shot: `tutz add t/C101 m/CS2103T d/2025-01-10` runs a single command
//! - read loop: `tutz` with no command reads lines from stdin. On a terminal
//!   it prompts and reprints the view after every command; from a pipe it
//!   prints feedback only and exits non-zero if any command failed.

mod args;
mod print;

use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use print::{print_error, print_messages, print_tutorials};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tutz::api::TutzApi;
use tutz::config::TutzConfig;
use tutz::error::{Result, TutzError};
use tutz::logging;
use tutz::store::fs::FileStore;

const HOME_ENV: &str = "TUTZ_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(&cli)?;
    let config = TutzConfig::load(&data_dir)?;
    logging::init(cli.verbose, &config.log_level)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let store = FileStore::new(config.data_path(&data_dir));
    let mut api = TutzApi::open(store)?;

    match cli.command_line() {
        Some(line) => run_once(&mut api, &line),
        None => run_loop(&mut api),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "tutz", "tutz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TutzError::Config("could not determine a data directory".to_string()))
}

fn run_once(api: &mut TutzApi<FileStore>, line: &str) -> Result<()> {
    let result = api.execute(line)?;
    print_tutorials(api.filtered());
    print_messages(&result.messages);
    Ok(())
}

fn run_loop(api: &mut TutzApi<FileStore>) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut failures = 0usize;

    if interactive {
        print_tutorials(api.filtered());
        prompt()?;
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }
        if !trimmed.is_empty() {
            match api.execute(trimmed) {
                Ok(result) => {
                    if interactive {
                        print_tutorials(api.filtered());
                    }
                    print_messages(&result.messages);
                }
                Err(e) => {
                    failures += 1;
                    print_error(&e);
                }
            }
        }
        if interactive {
            prompt()?;
        }
    }

    if !interactive && failures > 0 {
        eprintln!(
            "{} command{} failed",
            failures,
            if failures == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
