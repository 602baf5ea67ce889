//! In-memory booking ledger
//!
//! The ledger owns the ticket inventory and the ordered booking history.
//! Nothing is persisted; a ledger lives as long as one booking session.

mod memory;
mod repository;

pub use memory::InMemoryLedger;
pub use repository::BookingRepository;
