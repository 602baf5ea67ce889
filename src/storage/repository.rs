use crate::core::{Booking, BookingSummary};
use crate::error::Result;

/// Repository trait for booking ledger operations
///
/// This trait defines the interface the session uses to record bookings and
/// query inventory, allowing different ledger implementations.
pub trait BookingRepository: Send + Sync {
    /// Books tickets for an attendee whose details were already validated
    ///
    /// Decrements the inventory and appends the booking as one step. Fails
    /// with `NotEnoughTickets` if the inventory changed since validation.
    fn book(&self, ticket_count: u32, first_name: &str, last_name: &str, email: &str)
    -> Result<Booking>;

    /// Tickets not yet booked
    fn remaining_tickets(&self) -> u32;

    /// Tickets the conference started with
    fn capacity(&self) -> u32;

    /// First name of every booking, in booking order
    fn first_names(&self) -> Vec<String>;

    /// All bookings, in booking order
    fn bookings(&self) -> Vec<Booking>;

    /// Report of the ledger for the given conference
    fn summary(&self, conference: &str) -> BookingSummary;

    /// Whether the inventory is exhausted
    fn is_sold_out(&self) -> bool {
        self.remaining_tickets() == 0
    }
}

use super::memory::InMemoryLedger;

impl BookingRepository for InMemoryLedger {
    fn book(
        &self,
        ticket_count: u32,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Booking> {
        self.book_tickets(ticket_count, first_name, last_name, email)
    }

    fn remaining_tickets(&self) -> u32 {
        self.remaining()
    }

    fn capacity(&self) -> u32 {
        self.total_capacity()
    }

    fn first_names(&self) -> Vec<String> {
        self.collect_first_names()
    }

    fn bookings(&self) -> Vec<Booking> {
        self.snapshot()
    }

    fn summary(&self, conference: &str) -> BookingSummary {
        self.build_summary(conference)
    }
}
