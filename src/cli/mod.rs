//! Command-line interface for conf-booking
//!
//! Argument definitions live here; the work for each command is done in
//! [`handlers`].

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Book conference tickets from the command line
#[derive(Parser, Debug)]
#[command(name = "conf-booking", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "CONF_BOOKING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit one JSON object per event instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the booking loop until tickets sell out (default)
    Book(BookArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Book(BookArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct BookArgs {
    /// Conference name, overriding configuration
    #[arg(short, long)]
    pub name: Option<String>,

    /// Ticket capacity, overriding configuration
    #[arg(short, long)]
    pub tickets: Option<u32>,

    /// Print a booking summary when the session ends
    #[arg(long)]
    pub summary: bool,

    /// Read whitespace-separated fields from stdin even on a terminal
    #[arg(long)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}
