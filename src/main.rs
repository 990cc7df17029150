//! fzpick CLI application entry point
//!
//! Reads items (one per line) from stdin or a file, runs the interactive
//! fuzzy finder on the terminal and prints the accepted items on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Pick one file
//! find . -type f | fzpick
//!
//! # Pick several, with a preview of each
//! ls | fzpick -m --preview 'head -n 40 {}'
//!
//! # Accept right away if the query leaves a single match
//! fzpick -q main -a 1 --input files.txt
//! ```
//!
//! # Exit codes
//!
//! - `0`: at least one item was accepted and printed
//! - `1`: the selection was accepted but empty
//! - `2`: an error occurred
//! - `130`: the user aborted
//!
//! # Configuration
//!
//! Defaults are read from the user's config directory
//! (`~/.config/fzpick/config.toml` on Linux) unless `--no-config` is given.
//! `fzpick --init-config` writes that file with every key filled in.

use colored::Colorize;
use fzpick::{
    FzpickError,
    cli::Cli,
    config::FzpickConfig,
    finder::{Callbacks, Engine, Outcome, is_multiline},
    logging,
    scoring::ScoringResult,
    ui::{CommandPreview, RatatuiFinder},
};
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, FzpickError>;

const EXIT_EMPTY: u8 = 1;
const EXIT_ERROR: u8 = 2;
const EXIT_ABORTED: u8 = 130;

/// Read the items, one per line
///
/// Invalid UTF-8 is replaced rather than rejected. Lines containing other
/// line-break characters cannot be displayed and are skipped.
fn read_items(cli: &Cli) -> Result<Vec<String>> {
    let raw = match &cli.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut raw = Vec::new();
            io::stdin().read_to_end(&mut raw)?;
            raw
        }
    };

    let text = String::from_utf8_lossy(&raw);
    let mut skipped = 0usize;
    let items: Vec<String> = text
        .lines()
        .filter(|line| {
            let keep = !is_multiline(line);
            if !keep {
                skipped += 1;
            }
            keep
        })
        .map(str::to_owned)
        .collect();

    if skipped > 0 {
        tracing::warn!(skipped, "skipped items containing line breaks");
    }
    Ok(items)
}

/// Print the accepted items to stdout
fn print_selection(selected: &[&String], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        writeln!(out, "{}", serde_json::to_string(selected)?)?;
    } else {
        for item in selected {
            writeln!(out, "{item}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = if cli.no_config {
        FzpickConfig::default()
    } else {
        FzpickConfig::load()?
    };
    if cli.init_config {
        let path = FzpickConfig::config_path()?;
        config.save()?;
        tracing::info!(path = %path.display(), "configuration written");
        println!("{} {}", "Configuration saved to".green(), path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let options = cli.finder_options(&config);

    let items = read_items(cli)?;
    tracing::info!(items = items.len(), multi = options.multi, "items read");

    let mut callbacks = Callbacks::default();
    if let Some(needle) = cli.preselect.clone() {
        callbacks = callbacks
            .with_preselect(move |item: &String, _: &ScoringResult| item.contains(needle.as_str()));
    }
    let mut engine = Engine::new(&items, callbacks, options)?;

    let mut finder = RatatuiFinder::new().with_theme(config.theme.to_theme());
    if let Some(command) = &cli.preview {
        finder = finder.with_preview_provider(CommandPreview::new(command.as_str()));
    }

    match finder.run(&mut engine)? {
        Outcome::Aborted => {
            tracing::info!("aborted by user");
            eprintln!("{}", "fzpick: aborted".yellow());
            Ok(ExitCode::from(EXIT_ABORTED))
        }
        Outcome::Accepted(selected) => {
            tracing::info!(selected = selected.len(), "selection accepted");
            print_selection(&selected, cli.json)?;
            Ok(if selected.is_empty() {
                ExitCode::from(EXIT_EMPTY)
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // logging is best effort; the finder works without it
    let _ = logging::init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "fzpick failed");
            eprintln!("{} {e}", "fzpick:".red().bold());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
