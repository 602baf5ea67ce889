//! Handler for the `book` command
//!
//! Wires the ledger, notifier and an input source into a booking session.

use crate::cli::{BookArgs, OutputFormatter};
use crate::config::Config;
use crate::error::Result;
use crate::interactive::{BookingSession, ConsolePrompt, SessionOutcome, TokenReader};
use crate::notifier::Notifier;
use crate::storage::InMemoryLedger;
use std::io::{self, IsTerminal};
use tokio::runtime::Runtime;

/// Handler for the `book` command
///
/// This function:
/// 1. Applies command-line overrides to the configuration
/// 2. Starts the runtime that confirmation deliveries are spawned on
/// 3. Runs the session with interactive prompts, or a token reader when
///    stdin is not a terminal (or `--plain` is given)
/// 4. Optionally prints the booking summary
/// 5. Drops or drains outstanding confirmations
///
/// # Errors
///
/// Returns an error if:
/// - The overrides produce an invalid configuration
/// - The runtime cannot be started
/// - Reading input or writing JSON output fails
pub fn handle_book_command(
    args: BookArgs,
    config: Config,
    formatter: &OutputFormatter,
) -> Result<SessionOutcome> {
    let config = config.with_overrides(args.name, args.tickets)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("conf-booking-notifier")
        .enable_all()
        .build()?;

    let ledger = InMemoryLedger::new(config.conference.tickets);
    let notifier = Notifier::new(
        runtime.handle().clone(),
        config.notification.delay(),
        formatter.clone(),
    );
    let session = BookingSession::new(&config.conference.name, &ledger, &notifier, formatter)
        .detailed_errors(config.validation.detailed_errors);

    let stdin = io::stdin();
    let outcome = if args.plain || !stdin.is_terminal() {
        session.run(&mut TokenReader::new(stdin.lock()))?
    } else {
        session.run(&mut ConsolePrompt::new().quiet(formatter.is_json()))?
    };

    if args.summary {
        session.print_summary()?;
    }

    finish_notifications(runtime, &notifier, config.notification.drain_on_exit, formatter);
    Ok(outcome)
}

/// Wait for or abandon confirmations still waiting out their delay
fn finish_notifications(
    runtime: Runtime,
    notifier: &Notifier,
    drain: bool,
    formatter: &OutputFormatter,
) {
    let outstanding = notifier.outstanding();
    if outstanding == 0 {
        return;
    }

    if drain {
        formatter.info(&format!(
            "Waiting for {outstanding} confirmation emails to be sent..."
        ));
        runtime.block_on(notifier.drain());
    } else {
        tracing::warn!(
            "Exiting with {} confirmation emails not yet sent",
            outstanding
        );
        runtime.shutdown_background();
    }
}
