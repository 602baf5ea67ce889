//! Core domain types for conference bookings
//!
//! - [`BookingRequest`]: raw attendee input for one loop iteration
//! - [`Booking`]: an accepted, immutable reservation
//! - [`validation`]: pure checks run before anything is booked

mod booking;
mod builders;
pub mod validation;

pub use booking::{Booking, BookingId, BookingRequest, BookingSummary};
pub use builders::BookingRequestBuilder;
pub use validation::{ValidationResult, validate, validate_detailed};
