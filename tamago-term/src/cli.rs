//! Command-line options for the `tamago` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::runner::Format;

/// TAMAGO: a virtual pet in your terminal.
///
/// Type `feed`, `sleep` or `play` to look after the pet; its needs decay
/// while you are away.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tamago")]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pet name, overriding `pet.name` from the config.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed for reproducible thoughts.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Emit one JSON snapshot per line instead of text frames.
    #[arg(long)]
    pub json: bool,

    /// More logging (can be repeated: -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Debug logging, same as -vv.
    #[arg(long)]
    pub debug: bool,
}

impl Options {
    /// Output format selected by `--json`.
    #[must_use]
    pub fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }

    /// Log level requested on the command line, if any.
    ///
    /// `None` leaves the choice to `general.log_level`.
    #[must_use]
    pub fn log_level(&self) -> Option<Level> {
        match (self.verbose, self.debug) {
            (0, false) => None,
            (1, false) => Some(Level::INFO),
            (0..=2, _) => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }
}
