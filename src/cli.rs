//! Command-line interface definitions and parsing
//!
//! This module defines the CLI of the `fzpick` binary using the `clap` crate.
//! Flags override the values from the configuration file.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use fzpick::cli::Cli;
//! use fzpick::config::FzpickConfig;
//!
//! let cli = Cli::try_parse_from(["fzpick", "--multi", "-q", "src"]).unwrap();
//! let options = cli.finder_options(&FzpickConfig::default());
//! assert!(options.multi);
//! assert_eq!(options.query, "src");
//! ```

use crate::config::FzpickConfig;
use crate::finder::FinderOptions;
use clap::Parser;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fzpick")]
#[command(
    about = "Pick lines from stdin with an interactive fuzzy finder",
    long_about = "Reads one item per line, lets you filter them interactively with \
                  full-word fuzzy matching and prints the accepted items on stdout."
)]
#[command(version)]
pub struct Cli {
    /// Allow selecting more than one item (TAB toggles)
    #[arg(short = 'm', long = "multi")]
    pub multi: bool,

    /// Initial query
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Number of entries moved by PAGE-UP/PAGE-DOWN
    #[arg(long = "page-size", value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Preview command; `{}` is replaced by the quoted item
    #[arg(long = "preview", value_name = "CMD")]
    pub preview: Option<String>,

    /// Width of the preview pane in percent
    #[arg(
        long = "preview-percent",
        value_name = "PERCENT",
        value_parser = clap::value_parser!(u16).range(0..=100)
    )]
    pub preview_percent: Option<u16>,

    /// Accept immediately if the initial query leaves exactly one match
    /// (single-select) or exactly N matches (multi-select)
    #[arg(short = 'a', long = "auto-accept", value_name = "N")]
    pub auto_accept: Option<usize>,

    /// Read items from FILE instead of stdin
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print the selection as a JSON array
    #[arg(long = "json")]
    pub json: bool,

    /// Preselect items containing SUBSTR (multi-select only)
    #[arg(long = "preselect", value_name = "SUBSTR")]
    pub preselect: Option<String>,

    /// Ignore the configuration file
    #[arg(long = "no-config")]
    pub no_config: bool,

    /// Write the current configuration (defaults for missing keys) to the
    /// config file and exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merge the flags over the configured defaults
    #[must_use]
    pub fn finder_options(&self, config: &FzpickConfig) -> FinderOptions {
        let mut options = config.finder_options();
        if self.multi {
            options = options.with_multi(true);
        }
        if let Some(query) = &self.query {
            options = options.with_query(query.as_str());
        }
        if let Some(page_size) = self.page_size {
            options = options.with_page_size(page_size);
        }
        if let Some(percent) = self.preview_percent {
            options = options.with_preview_percent(percent);
        }
        if let Some(threshold) = self.auto_accept {
            options = options.with_auto_accept(threshold);
        }
        options
    }
}
