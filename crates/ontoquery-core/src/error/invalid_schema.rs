use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - object type, property or data source names are duplicated
/// - a property uses the reserved name `id`
/// - a field mapping names an undeclared property
/// - two properties map to the same physical column, or a property maps to
///   the id column
///
/// These errors are caught while the schema is loaded, before any catalog is
/// built.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
