//! Error types for conf-booking
//!
//! Two layers of errors live here:
//!
//! - [`ValidationError`] describes a single failed input rule. These are always
//!   recoverable: the session reports them and asks again.
//! - [`BookingError`] is the crate-wide error returned through [`Result`]. Only
//!   configuration and I/O failures end the program.

use thiserror::Error;

/// A single failed validation rule for a booking request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name must be at least 2 characters and contain only letters")]
    InvalidFirstName,

    #[error("Last name must be at least 2 characters and contain only letters")]
    InvalidLastName,

    #[error("Please enter a valid email address (e.g., user@example.com)")]
    InvalidEmail,

    #[error("Number of tickets must be greater than 0")]
    NoTicketsRequested,

    #[error("Not enough tickets available (requested {requested}, {remaining} remaining)")]
    NotEnoughTickets { requested: u32, remaining: u32 },
}

/// Main error type for conf-booking operations
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not enough tickets available: requested {requested}, {remaining} remaining")]
    NotEnoughTickets { requested: u32, remaining: u32 },
}

impl From<config::ConfigError> for BookingError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl BookingError {
    /// Message shown to the user when the error ends the program
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
            Self::Prompt(_) => "Could not read from the terminal".to_string(),
            Self::NotEnoughTickets {
                requested,
                remaining,
            } => format!("Cannot book {requested} tickets, only {remaining} remaining"),
            _ => self.to_string(),
        }
    }

    /// Hints for fixing the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(_) => vec![
                "Check the file passed with --config".to_string(),
                "Check CONF_BOOKING__* environment variables".to_string(),
                "Run 'conf-booking config show' to see the effective configuration".to_string(),
            ],
            Self::Prompt(_) => vec![
                "Pipe booking details through stdin when no terminal is attached".to_string(),
            ],
            Self::NotEnoughTickets { .. } => {
                vec!["Request fewer tickets and try again".to_string()]
            },
            _ => vec![],
        }
    }

    /// Whether the session can carry on after this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotEnoughTickets { .. })
    }

    /// Whether this error was caused by configuration
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type alias for conf-booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
