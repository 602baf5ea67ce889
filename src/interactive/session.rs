//! The booking session loop
//!
//! ```text
//! ACCEPTING --(valid request, tickets remain)--> ACCEPTING
//! ACCEPTING --(invalid request)----------------> ACCEPTING
//! ACCEPTING --(valid request, inventory hits 0)-> SOLD_OUT (terminal)
//! ```

use super::AttendeeSource;
use crate::cli::OutputFormatter;
use crate::core::{Booking, BookingRequest, ValidationResult, validate, validate_detailed};
use crate::error::{BookingError, Result, ValidationError};
use crate::notifier::Notifier;
use crate::storage::BookingRepository;
use serde_json::json;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Accepting,
    SoldOut,
}

/// Why the session loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every ticket was booked
    SoldOut,
    /// The input source ran dry while tickets remained
    InputClosed,
}

/// Result of processing a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Booked(Booking),
    Rejected(ValidationResult),
}

/// Drives prompt, validate, book, notify and display cycles
pub struct BookingSession<'a> {
    conference: &'a str,
    ledger: &'a dyn BookingRepository,
    notifier: &'a Notifier,
    output: &'a OutputFormatter,
    detailed_errors: bool,
}

impl<'a> BookingSession<'a> {
    pub fn new(
        conference: &'a str,
        ledger: &'a dyn BookingRepository,
        notifier: &'a Notifier,
        output: &'a OutputFormatter,
    ) -> Self {
        Self {
            conference,
            ledger,
            notifier,
            output,
            detailed_errors: true,
        }
    }

    /// Report one message per failed rule (default) or one per field group
    #[must_use]
    pub const fn detailed_errors(mut self, detailed: bool) -> Self {
        self.detailed_errors = detailed;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.ledger.is_sold_out() {
            SessionState::SoldOut
        } else {
            SessionState::Accepting
        }
    }

    /// Run until sold out or the source is exhausted
    pub fn run(&self, source: &mut dyn AttendeeSource) -> Result<SessionOutcome> {
        self.greet()?;

        while self.state() == SessionState::Accepting {
            let Some(request) = source.next_request()? else {
                self.output.info(&format!(
                    "No more input. {} tickets remain unbooked.",
                    self.ledger.remaining_tickets()
                ));
                self.output.json(&json!({
                    "event": "input_closed",
                    "remaining": self.ledger.remaining_tickets(),
                }))?;
                return Ok(SessionOutcome::InputClosed);
            };
            self.process(&request)?;
        }

        self.output
            .success("Our conference is booked out. Come back next year.");
        self.output.json(&json!({ "event": "sold_out" }))?;
        Ok(SessionOutcome::SoldOut)
    }

    /// Print the welcome banner
    pub fn greet(&self) -> Result<()> {
        let remaining = self.ledger.remaining_tickets();
        self.output
            .info(&format!("Welcome to {} booking app", self.conference));
        self.output.print(&format!(
            "We have a total of {} tickets and {} are still available.",
            self.ledger.capacity(),
            remaining
        ));
        self.output.print("Get your tickets here to attend!");
        self.output.rule('=');
        self.output.json(&json!({
            "event": "welcome",
            "conference": self.conference,
            "capacity": self.ledger.capacity(),
            "remaining": remaining,
        }))
    }

    /// Validate one request and book it if every rule passes
    pub fn process(&self, request: &BookingRequest) -> Result<StepOutcome> {
        let remaining = self.ledger.remaining_tickets();
        let check = if self.detailed_errors {
            validate_detailed
        } else {
            validate
        };
        let result = check(
            &request.first_name,
            &request.last_name,
            &request.email,
            request.ticket_count,
            remaining,
        );

        if !result.is_valid() {
            self.report_rejection(&result)?;
            return Ok(StepOutcome::Rejected(result));
        }

        let booking = match self.ledger.book(
            request.ticket_count,
            &request.first_name,
            &request.last_name,
            &request.email,
        ) {
            Ok(booking) => booking,
            // Another writer took the tickets between validation and booking
            Err(BookingError::NotEnoughTickets {
                requested,
                remaining,
            }) => {
                let result = ValidationResult {
                    ticket_count_valid: false,
                    errors: vec![ValidationError::NotEnoughTickets {
                        requested,
                        remaining,
                    }],
                    ..result
                };
                self.report_rejection(&result)?;
                return Ok(StepOutcome::Rejected(result));
            },
            Err(e) => return Err(e),
        };

        self.notifier.notify(&booking);
        self.report_booking(&booking)?;
        Ok(StepOutcome::Booked(booking))
    }

    fn report_booking(&self, booking: &Booking) -> Result<()> {
        let remaining = self.ledger.remaining_tickets();
        let first_names = self.ledger.first_names();

        self.output.success(&format!(
            "\n✅ Thank you {} for booking {} tickets. You will receive a confirmation email at {}.",
            booking.full_name(),
            booking.ticket_count(),
            booking.email()
        ));
        self.output.info(&format!(
            "📊 {} tickets remaining for {}",
            remaining, self.conference
        ));
        self.output.rule('-');
        self.output.print(&format!(
            "The first names of bookings are: {}",
            first_names.join(", ")
        ));

        self.output.json(&json!({
            "event": "booked",
            "booking": booking,
            "remaining": remaining,
            "first_names": first_names,
        }))
    }

    fn report_rejection(&self, result: &ValidationResult) -> Result<()> {
        self.output.warning("\n❌ Please fix the following errors:");

        if result.errors.is_empty() {
            if !result.name_valid {
                self.output.print(
                    "   • First name or last name you entered is too short (minimum 2 characters).",
                );
            }
            if !result.email_valid {
                self.output
                    .print("   • Email address entered is invalid. Please include @ and domain.");
            }
            if !result.ticket_count_valid {
                self.output
                    .print("   • The number of tickets you entered is invalid.");
            }
        } else {
            for message in result.messages() {
                self.output.print(&format!("   • {message}"));
            }
        }
        self.output.print("");

        self.output.json(&json!({
            "event": "rejected",
            "name_valid": result.name_valid,
            "email_valid": result.email_valid,
            "ticket_count_valid": result.ticket_count_valid,
            "errors": result.messages(),
        }))
    }

    /// Print the end-of-session report
    pub fn print_summary(&self) -> Result<()> {
        let summary = self.ledger.summary(self.conference);

        if self.output.is_json() {
            return self
                .output
                .json(&json!({ "event": "summary", "summary": summary }));
        }

        if summary.bookings.is_empty() {
            self.output.print("No bookings yet.");
            return Ok(());
        }

        self.output
            .info(&format!("\n📋 Booking Summary for {}:", summary.conference));
        self.output
            .print(&format!("Total bookings: {}", summary.bookings.len()));
        self.output
            .print(&format!("Tickets sold: {}", summary.tickets_sold));
        self.output
            .print(&format!("Remaining tickets: {}", summary.remaining));
        self.output.print("\n👥 Attendees:");
        for (i, booking) in summary.bookings.iter().enumerate() {
            self.output.print(&format!(
                "{}. {} ({} tickets) booked at {}",
                i + 1,
                booking.full_name(),
                booking.ticket_count(),
                booking.booked_at().format("%H:%M:%S UTC")
            ));
        }
        self.output.print("");
        Ok(())
    }
}
