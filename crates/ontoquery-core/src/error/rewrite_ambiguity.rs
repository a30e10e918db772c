use super::Error;

/// Error when logical identifiers cannot be rewritten to physical ones
/// without risking a wrong or repeated substitution.
#[derive(Debug)]
pub(super) struct RewriteAmbiguity {
    message: Box<str>,
}

impl std::error::Error for RewriteAmbiguity {}

impl core::fmt::Display for RewriteAmbiguity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "ambiguous identifier rewrite: {}", self.message)
    }
}

impl Error {
    pub fn rewrite_ambiguity(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RewriteAmbiguity(RewriteAmbiguity {
            message: message.into().into(),
        }))
    }

    pub fn is_rewrite_ambiguity(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::RewriteAmbiguity(_)))
    }
}
