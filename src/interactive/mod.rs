//! Input collaborators for the booking session
//!
//! The session only needs a stream of [`BookingRequest`]s. Two sources are
//! provided:
//!
//! - [`ConsolePrompt`]: guided dialoguer prompts for a human at a terminal
//! - [`TokenReader`]: whitespace-separated fields from any reader, used when
//!   stdin is piped

mod session;

pub use session::{BookingSession, SessionOutcome, SessionState, StepOutcome};

use crate::core::{BookingRequest, BookingRequestBuilder};
use crate::error::{BookingError, Result};
use dialoguer::{Input, theme::ColorfulTheme};
use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind};

/// Supplies booking requests to the session loop
#[cfg_attr(test, mockall::automock)]
pub trait AttendeeSource {
    /// Collect the next request, or `None` once input is exhausted
    fn next_request(&mut self) -> Result<Option<BookingRequest>>;
}

/// Interactive prompts for one booking at a time
pub struct ConsolePrompt {
    theme: ColorfulTheme,
    show_header: bool,
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePrompt {
    /// Create a new console prompt
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            show_header: true,
        }
    }

    /// Prompt without the per-booking header, for JSON output mode
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.show_header = !quiet;
        self
    }

    fn header(&self) -> Option<&'static str> {
        self.show_header
            .then_some("\n📝 Please enter your booking details:")
    }

    fn text(&self, prompt: &str) -> std::result::Result<String, dialoguer::Error> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
    }

    fn collect(&self) -> std::result::Result<BookingRequest, dialoguer::Error> {
        // dialoguer draws on stderr; keep the header with the prompts
        if let Some(header) = self.header() {
            eprintln!("{header}");
        }

        let first_name = self.text("Enter your first name")?;
        let last_name = self.text("Enter your last name")?;
        let email = self.text("Enter your email address")?;
        // dialoguer re-prompts until the answer parses as a number
        let ticket_count = Input::<u32>::with_theme(&self.theme)
            .with_prompt("Enter the number of tickets")
            .interact_text()?;

        Ok(BookingRequestBuilder::new()
            .first_name(first_name)
            .last_name(last_name)
            .email(email)
            .ticket_count(ticket_count)
            .build())
    }
}

impl AttendeeSource for ConsolePrompt {
    fn next_request(&mut self) -> Result<Option<BookingRequest>> {
        match self.collect() {
            Ok(request) => Ok(Some(request)),
            Err(dialoguer::Error::IO(e))
                if matches!(e.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted) =>
            {
                Ok(None)
            },
            Err(e) => Err(BookingError::Prompt(e)),
        }
    }
}

/// Reads first name, last name, email and ticket count as whitespace tokens
///
/// Tokens may be split across lines in any way. A ticket count that is not a
/// non-negative integer is read as 0 so validation reports it.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            // invalid UTF-8 is kept as replacement characters so validation rejects it
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

fn parse_ticket_count(token: &str) -> u32 {
    token.parse().unwrap_or_else(|_| {
        tracing::warn!("Ticket count '{}' is not a number, reading it as 0", token);
        0
    })
}

impl<R: BufRead> AttendeeSource for TokenReader<R> {
    fn next_request(&mut self) -> Result<Option<BookingRequest>> {
        let mut fields = Vec::with_capacity(4);
        while fields.len() < 4 {
            match self.next_token()? {
                Some(token) => fields.push(token),
                None => {
                    if !fields.is_empty() {
                        tracing::warn!("Input ended with an incomplete booking: {:?}", fields);
                    }
                    return Ok(None);
                },
            }
        }

        let ticket_count = parse_ticket_count(&fields[3]);
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();

        Ok(Some(
            BookingRequestBuilder::new()
                .first_name(next())
                .last_name(next())
                .email(next())
                .ticket_count(ticket_count)
                .build(),
        ))
    }
}
