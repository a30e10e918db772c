mod rows;
pub use rows::Rows;

use crate::{async_trait, stmt::Value, Result};

use std::fmt::Debug;

/// Opens connections to one configured data source.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open connection to a data source.
///
/// Connections run one statement at a time; callers sharing a connection
/// must serialize access.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a query, binding `params` to the statement's placeholders in
    /// order, and returns every row.
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows>;

    /// Closes the connection.
    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
