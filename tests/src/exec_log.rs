use ontoquery::{
    driver::{Connection, Rows},
    stmt::Value,
    Result,
};
use std::sync::{Arc, Mutex};

/// Statements executed through [`LoggingConnection`]s, with their parameters.
#[derive(Debug, Clone, Default)]
pub struct ExecLog(Arc<Mutex<Vec<(String, Vec<Value>)>>>);

impl ExecLog {
    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.0.lock().unwrap().clone()
    }

    /// SQL text of the statements, in execution order.
    pub fn sql(&self) -> Vec<String> {
        self.statements().into_iter().map(|(sql, _)| sql).collect()
    }

    /// Removes and returns the most recent statement.
    pub fn pop(&self) -> (String, Vec<Value>) {
        self.0.lock().unwrap().pop().expect("no statement executed")
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Wraps a driver connection, recording every statement it executes.
#[derive(Debug)]
pub struct LoggingConnection {
    inner: Box<dyn Connection>,
    log: ExecLog,
}

impl LoggingConnection {
    pub fn new(inner: Box<dyn Connection>, log: ExecLog) -> Self {
        Self { inner, log }
    }
}

#[async_trait::async_trait]
impl Connection for LoggingConnection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.log
            .0
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));

        self.inner.query(sql, params).await
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.inner.close().await
    }
}
