use super::BookingRequest;

/// Builder for creating `BookingRequest` instances
///
/// Input collaborators fill fields one prompt at a time; anything left unset
/// becomes empty (or zero tickets) and is rejected later by validation.
#[derive(Default)]
pub struct BookingRequestBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    ticket_count: Option<u32>,
}

impl BookingRequestBuilder {
    /// Create a new request builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first name
    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the email address
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the number of tickets
    #[must_use]
    pub const fn ticket_count(mut self, ticket_count: u32) -> Self {
        self.ticket_count = Some(ticket_count);
        self
    }

    /// Build the request
    pub fn build(self) -> BookingRequest {
        BookingRequest {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            ticket_count: self.ticket_count.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = BookingRequestBuilder::new()
            .first_name("Jane")
            .last_name("Doe")
            .email("jane@x.co")
            .ticket_count(5)
            .build();

        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.last_name, "Doe");
        assert_eq!(request.email, "jane@x.co");
        assert_eq!(request.ticket_count, 5);
    }

    #[test]
    fn test_request_builder_defaults() {
        let request = BookingRequestBuilder::new().first_name("Jane").build();

        assert_eq!(request.first_name, "Jane");
        assert!(request.email.is_empty());
        assert_eq!(request.ticket_count, 0);
    }
}
