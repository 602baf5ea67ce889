//! Input validation for booking requests
//!
//! Every check trims surrounding whitespace first and is a pure function of
//! its arguments. The email check is a coarse filter, not RFC 5322.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Shortest accepted name, after trimming
const MIN_NAME_LEN: usize = 2;

/// Shortest accepted email, after trimming (`a@b.c`)
const MIN_EMAIL_LEN: usize = 5;

/// Outcome of validating one booking request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub name_valid: bool,
    pub email_valid: bool,
    pub ticket_count_valid: bool,
    /// Failed rules in fixed order: first name, last name, email, ticket count.
    /// Empty unless produced by [`validate_detailed`].
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// True when every rule passed
    pub const fn is_valid(&self) -> bool {
        self.name_valid && self.email_valid && self.ticket_count_valid
    }

    /// Human-readable messages for the failed rules
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Checks that a name is at least two characters of ASCII letters or spaces
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    name.len() >= MIN_NAME_LEN && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Checks that an email looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() >= MIN_EMAIL_LEN && EMAIL_PATTERN.is_match(email)
}

/// Checks that at least one ticket is requested and no more than remain
pub const fn is_valid_ticket_count(ticket_count: u32, remaining: u32) -> bool {
    ticket_count > 0 && ticket_count <= remaining
}

/// Validates a request, reporting only which rules failed
pub fn validate(
    first_name: &str,
    last_name: &str,
    email: &str,
    ticket_count: u32,
    remaining: u32,
) -> ValidationResult {
    ValidationResult {
        name_valid: is_valid_name(first_name) && is_valid_name(last_name),
        email_valid: is_valid_email(email),
        ticket_count_valid: is_valid_ticket_count(ticket_count, remaining),
        errors: Vec::new(),
    }
}

/// Validates a request and collects one error per failed rule
pub fn validate_detailed(
    first_name: &str,
    last_name: &str,
    email: &str,
    ticket_count: u32,
    remaining: u32,
) -> ValidationResult {
    let mut result = validate(first_name, last_name, email, ticket_count, remaining);

    if !is_valid_name(first_name) {
        result.errors.push(ValidationError::InvalidFirstName);
    }
    if !is_valid_name(last_name) {
        result.errors.push(ValidationError::InvalidLastName);
    }
    if !result.email_valid {
        result.errors.push(ValidationError::InvalidEmail);
    }
    if !result.ticket_count_valid {
        result.errors.push(if ticket_count == 0 {
            ValidationError::NoTicketsRequested
        } else {
            ValidationError::NotEnoughTickets {
                requested: ticket_count,
                remaining,
            }
        });
    }

    result
}
