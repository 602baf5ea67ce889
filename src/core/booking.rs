use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a booking
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Creates a new random booking ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the first 8 characters, enough to tell bookings apart on screen
    pub fn short(&self) -> String {
        self.0.to_string().chars().take(8).collect()
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Attendee input collected for a single booking attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
}

/// An accepted reservation of tickets for one attendee
///
/// Bookings are only created by the ledger and never change afterwards,
/// so every field is read through an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    id: BookingId,
    first_name: String,
    last_name: String,
    email: String,
    ticket_count: u32,
    booked_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn new(
        ticket_count: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: BookingId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ticket_count,
            booked_at: Utc::now(),
        }
    }

    pub const fn id(&self) -> &BookingId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn ticket_count(&self) -> u32 {
        self.ticket_count
    }

    pub const fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    /// Full attendee name as shown in confirmations
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Snapshot of the ledger used for the end-of-session report
#[derive(Debug, Clone, Serialize)]
pub struct BookingSummary {
    pub conference: String,
    pub capacity: u32,
    pub remaining: u32,
    pub tickets_sold: u32,
    pub bookings: Vec<Booking>,
}
