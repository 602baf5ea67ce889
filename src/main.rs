//! conf-booking - Conference ticket booking
//!
//! This is the main entry point for the conf-booking CLI application.
//! It handles command-line argument parsing and dispatches to the appropriate
//! command handlers.

use clap::Parser;
use conf_booking::cli::{Cli, Commands, ConfigCommands, OutputFormatter, handlers};
use conf_booking::config::Config;
use conf_booking::error::{BookingError, Result};
use std::process;
use tracing_subscriber::EnvFilter;

/// Main entry point for the conf-booking CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// # Errors
///
/// Returns any error that occurs while loading configuration or executing
/// the command
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    dispatch_command(cli.command.unwrap_or_default(), config, formatter)
}

/// Log to stderr with `--verbose` (debug) or when `RUST_LOG` is set
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch_command(command: Commands, config: Config, formatter: &OutputFormatter) -> Result<()> {
    match command {
        Commands::Book(args) => {
            let outcome = handlers::handle_book_command(args, config, formatter)?;
            tracing::debug!("Session ended: {:?}", outcome);
            Ok(())
        },
        Commands::Config {
            command: ConfigCommands::Show,
        } => handlers::handle_config_show(&config, formatter),
    }
}

/// Handle errors and display them to the user
///
/// This function formats errors in a user-friendly way, including:
/// - The main error message
/// - Any suggestions for fixing the error
/// - Additional context in verbose mode
fn handle_error(error: &BookingError, formatter: &OutputFormatter) {
    // Display the main error message
    formatter.error(&error.user_message());

    // Display suggestions if available
    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    // In JSON mode, output error as JSON
    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{:?}", error),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
