mod adhoc;
mod connection_failure;
mod driver_operation_failed;
mod invalid_connection_url;
mod invalid_query;
mod invalid_schema;
mod not_found;
mod rewrite_ambiguity;
mod unresolved_mapping;
mod unsupported_data_source_type;

use adhoc::AdhocError;
use connection_failure::ConnectionFailure;
use driver_operation_failed::DriverOperationFailed;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_query::InvalidQuery;
use invalid_schema::InvalidSchema;
use not_found::NotFound;
use rewrite_ambiguity::RewriteAmbiguity;
use std::sync::Arc;
use unresolved_mapping::UnresolvedMapping;
use unsupported_data_source_type::UnsupportedDataSourceType;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while loading a schema, planning, rendering or
/// executing a query.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root
    /// cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let inner = consequent.inner.unwrap_or_else(|| {
            Arc::new(ErrorInner {
                kind: ErrorKind::Unknown,
                cause: None,
            })
        });

        // A freshly built consequent is uniquely owned. If it was cloned, fall
        // back to rebuilding it around a new cause.
        let inner = match Arc::try_unwrap(inner) {
            Ok(mut inner) => {
                inner.cause = Some(self);
                inner
            }
            Err(shared) => ErrorInner {
                kind: ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
                cause: Some(self),
            },
        };

        Error {
            inner: Some(Arc::new(inner)),
        }
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if this error, or any error in its cause chain, matches
    /// the predicate.
    fn any_in_chain(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::ConnectionFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ConnectionFailure(ConnectionFailure),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidQuery(InvalidQuery),
    InvalidSchema(InvalidSchema),
    NotFound(NotFound),
    RewriteAmbiguity(RewriteAmbiguity),
    UnresolvedMapping(UnresolvedMapping),
    UnsupportedDataSourceType(UnsupportedDataSourceType),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ConnectionFailure(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidQuery(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
            RewriteAmbiguity(err) => core::fmt::Display::fmt(err, f),
            UnresolvedMapping(err) => core::fmt::Display::fmt(err, f),
            UnsupportedDataSourceType(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown ontoquery error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::invalid_connection_url(err.to_string())
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
