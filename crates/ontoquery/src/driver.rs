//! Driver selection by database kind.
//!
//! Each kind is backed by a driver crate behind a cargo feature of the same
//! name. Connecting to a kind whose feature is disabled fails.

use crate::Result;

pub use ontoquery_core::driver::{Connection, Driver, Rows};
use ontoquery_core::schema::{DataSourceConfig, DatabaseKind};

/// Returns the driver for `source`, resolving its connection URL and
/// credentials.
pub fn driver(source: &DataSourceConfig) -> Result<Box<dyn Driver>> {
    let kind = source.kind()?;
    let url = source.connection_url()?;
    let username = source.username();
    let password = source.password();

    match kind {
        DatabaseKind::Mysql => mysql(&url, username, password),
        DatabaseKind::Postgresql => postgresql(&url, username, password),
        DatabaseKind::Sqlite => sqlite(&url),
    }
}

/// Opens a connection to `source`.
pub async fn connect(source: &DataSourceConfig) -> Result<Box<dyn Connection>> {
    driver(source)?.connect().await
}

#[cfg(feature = "mysql")]
fn mysql(url: &str, username: Option<String>, password: Option<String>) -> Result<Box<dyn Driver>> {
    let driver = ontoquery_driver_mysql::MySQL::new(url)?.credentials(username, password);
    Ok(Box::new(driver))
}

#[cfg(not(feature = "mysql"))]
fn mysql(_url: &str, _: Option<String>, _: Option<String>) -> Result<Box<dyn Driver>> {
    ontoquery_core::bail!("`mysql` feature not enabled")
}

#[cfg(feature = "postgresql")]
fn postgresql(
    url: &str,
    username: Option<String>,
    password: Option<String>,
) -> Result<Box<dyn Driver>> {
    let driver = ontoquery_driver_postgresql::PostgreSQL::new(url)?.credentials(username, password);
    Ok(Box::new(driver))
}

#[cfg(not(feature = "postgresql"))]
fn postgresql(_url: &str, _: Option<String>, _: Option<String>) -> Result<Box<dyn Driver>> {
    ontoquery_core::bail!("`postgresql` feature not enabled")
}

#[cfg(feature = "sqlite")]
fn sqlite(url: &str) -> Result<Box<dyn Driver>> {
    let driver = ontoquery_driver_sqlite::Sqlite::new(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    ontoquery_core::bail!("`sqlite` feature not enabled")
}
