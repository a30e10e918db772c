use super::Error;

/// Error when a connection to a data source cannot be opened or has been
/// released.
///
/// The catalog recovers from this error locally: the failing source and every
/// object type bound to it are left out of the catalog, and the build
/// continues.
#[derive(Debug)]
pub(super) struct ConnectionFailure {
    source_id: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ConnectionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ConnectionFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "failed to connect to data source `{}`: {}",
            self.source_id, self.inner
        )
    }
}

impl Error {
    /// Creates a connection failure for the data source `source_id`.
    pub fn connection_failure(
        source_id: impl Into<String>,
        err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        Error::from(super::ErrorKind::ConnectionFailure(ConnectionFailure {
            source_id: source_id.into().into(),
            inner: err.into(),
        }))
    }

    /// Returns `true` if this error is a connection failure.
    pub fn is_connection_failure(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::ConnectionFailure(_)))
    }
}
