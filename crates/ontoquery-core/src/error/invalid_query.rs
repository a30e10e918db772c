use super::Error;

/// Error when a query request is malformed.
///
/// This occurs when:
/// - `from` is missing or empty
/// - a `where` value is not a scalar
/// - a field name is unknown and the planner rejects unknown fields
#[derive(Debug)]
pub(super) struct InvalidQuery {
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid query error.
    pub fn is_invalid_query(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidQuery(_)))
    }
}
