use crate::core::{Booking, BookingSummary};
use crate::error::{BookingError, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutable ledger state, only ever touched with the lock held
#[derive(Debug)]
struct LedgerState {
    remaining: u32,
    bookings: Vec<Booking>,
}

/// Ticket inventory and booking history kept in memory
///
/// All mutation goes through [`InMemoryLedger::book_tickets`], which performs
/// the inventory check, the decrement and the append under one lock. The
/// ledger can therefore be shared between threads behind an `Arc` without
/// ever overselling.
#[derive(Debug)]
pub struct InMemoryLedger {
    capacity: u32,
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// Creates a ledger with `capacity` tickets available
    pub const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            state: Mutex::new(LedgerState {
                remaining: capacity,
                bookings: Vec::new(),
            }),
        }
    }

    /// Total tickets the ledger started with
    pub const fn total_capacity(&self) -> u32 {
        self.capacity
    }

    // A panic while holding the lock cannot leave the state half-written:
    // the decrement and the push happen after every fallible step.
    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn book_tickets(
        &self,
        ticket_count: u32,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Booking> {
        let mut state = self.lock();

        if ticket_count == 0 || ticket_count > state.remaining {
            return Err(BookingError::NotEnoughTickets {
                requested: ticket_count,
                remaining: state.remaining,
            });
        }

        let booking = Booking::new(
            ticket_count,
            first_name.trim(),
            last_name.trim(),
            email.trim(),
        );
        state.remaining -= ticket_count;
        state.bookings.push(booking.clone());

        tracing::debug!(
            "Ledger: booked {} tickets ({}), {} remaining across {} bookings",
            ticket_count,
            booking.id().short(),
            state.remaining,
            state.bookings.len()
        );

        Ok(booking)
    }

    pub(crate) fn remaining(&self) -> u32 {
        self.lock().remaining
    }

    pub(crate) fn snapshot(&self) -> Vec<Booking> {
        self.lock().bookings.clone()
    }

    pub(crate) fn collect_first_names(&self) -> Vec<String> {
        self.lock()
            .bookings
            .iter()
            .map(|b| b.first_name().to_string())
            .collect()
    }

    pub(crate) fn build_summary(&self, conference: &str) -> BookingSummary {
        let state = self.lock();
        BookingSummary {
            conference: conference.to_string(),
            capacity: self.capacity,
            remaining: state.remaining,
            tickets_sold: self.capacity - state.remaining,
            bookings: state.bookings.clone(),
        }
    }
}
