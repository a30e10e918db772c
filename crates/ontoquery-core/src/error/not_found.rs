use super::Error;

/// Error when a query names an object type the schema does not declare.
#[derive(Debug)]
pub(super) struct NotFound {
    object_type: Box<str>,
}

impl std::error::Error for NotFound {}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "object type '{}' not found", self.object_type)
    }
}

impl Error {
    pub fn not_found(object_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            object_type: object_type.into().into(),
        }))
    }

    pub fn is_not_found(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::NotFound(_)))
    }
}
