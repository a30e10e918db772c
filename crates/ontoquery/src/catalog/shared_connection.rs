use ontoquery_core::{
    driver::{Connection, Rows},
    err,
    schema::DatabaseKind,
    stmt::Value,
    Result,
};

use std::sync::Arc;
use tokio::sync::Mutex;

/// The single connection of a data source, shared by every query against it.
///
/// Statements are serialized: a query waits until the previous statement on
/// the same connection has returned. Clones refer to the same connection.
#[derive(Debug, Clone)]
pub struct SharedConnection {
    source_id: Arc<str>,
    kind: DatabaseKind,

    /// `None` once closed
    inner: Arc<Mutex<Option<Box<dyn Connection>>>>,
}

impl SharedConnection {
    pub fn new(source_id: &str, kind: DatabaseKind, connection: Box<dyn Connection>) -> SharedConnection {
        SharedConnection {
            source_id: source_id.into(),
            kind,
            inner: Arc::new(Mutex::new(Some(connection))),
        }
    }

    /// Id of the data source this connection belongs to.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn kind(&self) -> DatabaseKind {
        self.kind
    }

    pub async fn query(&self, sql: &str, params: &[Value]) -> Result<Rows> {
        let mut connection = self.inner.lock().await;

        match connection.as_mut() {
            Some(connection) => connection.query(sql, params).await,
            None => Err(err!(
                "connection to data source `{}` is closed",
                self.source_id
            )),
        }
    }

    /// Closes the connection. Closing twice is a no-op.
    pub async fn close(&self) -> Result<()> {
        let connection = self.inner.lock().await.take();

        match connection {
            Some(connection) => connection.close().await,
            None => Ok(()),
        }
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}
