//! Test utilities for conf-booking
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::cli::OutputFormatter;
use crate::core::{BookingRequest, BookingRequestBuilder};
use crate::storage::InMemoryLedger;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose clones share one buffer
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().clone()).expect("Output is not UTF-8")
    }

    /// Written output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Test fixture bundling a ledger with captured output
pub struct TestSession {
    pub ledger: InMemoryLedger,
    pub buffer: SharedBuffer,
    pub output: OutputFormatter,
}

impl TestSession {
    /// Text-mode fixture with `capacity` tickets
    pub fn new(capacity: u32) -> Self {
        Self::with_mode(capacity, false)
    }

    /// JSON-mode fixture with `capacity` tickets
    pub fn json(capacity: u32) -> Self {
        Self::with_mode(capacity, true)
    }

    fn with_mode(capacity: u32, json: bool) -> Self {
        let buffer = SharedBuffer::new();
        let output = OutputFormatter::with_writer(json, buffer.clone());
        Self {
            ledger: InMemoryLedger::new(capacity),
            buffer,
            output,
        }
    }
}

/// Create a request that passes validation when enough tickets remain
pub fn valid_request(first_name: &str, ticket_count: u32) -> BookingRequest {
    BookingRequestBuilder::new()
        .first_name(first_name)
        .last_name("Tester")
        .email(format!("{}@example.com", first_name.to_lowercase()))
        .ticket_count(ticket_count)
        .build()
}

/// Create a request with the given fields
pub fn request(first_name: &str, last_name: &str, email: &str, ticket_count: u32) -> BookingRequest {
    BookingRequestBuilder::new()
        .first_name(first_name)
        .last_name(last_name)
        .email(email)
        .ticket_count(ticket_count)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate;

    #[test]
    fn test_valid_request_fixture() {
        let request = valid_request("Jane", 2);
        assert_eq!(request.email, "jane@example.com");
        assert!(
            validate(
                &request.first_name,
                &request.last_name,
                &request.email,
                request.ticket_count,
                10
            )
            .is_valid()
        );
    }

    #[test]
    fn test_shared_buffer_lines() {
        let mut buffer = SharedBuffer::new();
        let mut clone = buffer.clone();
        writeln!(buffer, "first").unwrap();
        writeln!(clone, "second").unwrap();
        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }
}
