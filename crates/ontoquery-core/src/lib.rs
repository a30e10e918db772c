mod error;
pub use error::{Error, IntoError};

pub mod driver;
pub use driver::{Connection, Driver};

pub mod plan;
pub use plan::Plan;

pub mod query;
pub use query::OntologyQuery;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses ontoquery's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
