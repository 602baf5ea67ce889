//! conf-booking - Conference ticket booking from the command line
//!
//! This crate provides a small booking loop with features including:
//! - Validation of attendee names, email addresses and ticket counts
//! - An in-memory ledger that never oversells, even when shared across threads
//! - Fire-and-forget confirmation delivery on a tokio runtime
//! - Interactive prompts or piped input, text or JSON output

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

//! # Concurrent Safety
//!
//! The ledger performs its inventory check, decrement and append under a
//! single lock, so one `InMemoryLedger` can serve any number of threads.
//! Confirmation tasks only read the booking snapshot they were handed.
//!
//! # Example
//!
//! ```rust,ignore
//! use conf_booking::core::validate_detailed;
//! use conf_booking::storage::{BookingRepository, InMemoryLedger};
//!
//! let ledger = InMemoryLedger::new(50);
//! let check = validate_detailed("Jane", "Doe", "jane@x.co", 5, ledger.remaining_tickets());
//! if check.is_valid() {
//!     let booking = ledger.book(5, "Jane", "Doe", "jane@x.co")?;
//!     assert_eq!(ledger.remaining_tickets(), 45);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod notifier;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{BookingError, Result, ValidationError};
