//! Binds object types to live data source connections.

mod shared_connection;
pub use shared_connection::SharedConnection;

mod table;
pub use table::{RelationalTable, Table};

use crate::driver;

use ontoquery_core::{
    driver::Connection,
    schema::{DataSourceConfig, DataSourceMapping, ObjectType, ResolveMapping},
    Error, Result, Schema,
};

use indexmap::IndexMap;
use std::{future::Future, sync::Arc};
use tracing::{debug, warn};

/// Registry of the object types that can be queried, each bound to the one
/// open connection of its data source.
///
/// Built once and shared by every query. Data sources that cannot be
/// connected to are left out, along with the object types stored in them;
/// the rest of the catalog stays usable.
#[derive(Debug)]
pub struct Catalog {
    schema: Arc<Schema>,

    /// Open connections, by data source id
    connections: IndexMap<String, SharedConnection>,

    /// Queryable object types, by name
    tables: IndexMap<String, Table>,

    /// Data sources left out of the catalog and why
    failures: IndexMap<String, Error>,
}

impl Catalog {
    /// Connects to every data source of `schema` with the built-in drivers.
    pub async fn build(schema: Arc<Schema>) -> Catalog {
        Catalog::build_with(schema, |source| async move { driver::connect(&source).await }).await
    }

    /// Like [`build`](Self::build), opening connections with `connect`.
    pub async fn build_with<F, Fut>(schema: Arc<Schema>, connect: F) -> Catalog
    where
        F: Fn(DataSourceConfig) -> Fut,
        Fut: Future<Output = Result<Box<dyn Connection>>>,
    {
        let mut connections = IndexMap::new();
        let mut failures = IndexMap::new();

        for source in schema.data_sources() {
            let kind = match source.kind() {
                Ok(kind) => kind,
                Err(err) => {
                    warn!(source = %source.id, error = %err, "skipping data source");
                    failures.insert(source.id.clone(), err);
                    continue;
                }
            };

            match connect(source.clone()).await {
                Ok(connection) => {
                    debug!(source = %source.id, %kind, "connected to data source");
                    connections.insert(
                        source.id.clone(),
                        SharedConnection::new(&source.id, kind, connection),
                    );
                }
                Err(err) => {
                    let err = if err.is_connection_failure() {
                        err
                    } else {
                        Error::connection_failure(&source.id, err)
                    };
                    warn!(source = %source.id, error = %err, "data source unavailable");
                    failures.insert(source.id.clone(), err);
                }
            }
        }

        let mut tables = IndexMap::new();

        for object_type in schema.object_types() {
            let Some(mapping) = object_type.mapping() else {
                debug!(object_type = %object_type.name, "no configured data source mapping; not queryable");
                continue;
            };

            let Some(connection) = connections.get(&mapping.connection_id) else {
                debug!(
                    object_type = %object_type.name,
                    source = %mapping.connection_id,
                    "data source not connected; not queryable"
                );
                continue;
            };

            let ident_case = schema
                .data_source(&mapping.connection_id)
                .map(|source| source.identifier_case)
                .unwrap_or_default();

            tables.insert(
                object_type.name.clone(),
                Table::Relational(RelationalTable {
                    connection: connection.clone(),
                    mapping: mapping.clone(),
                    ident_case,
                }),
            );
        }

        debug!(
            tables = tables.len(),
            connections = connections.len(),
            "catalog built"
        );

        Catalog {
            schema,
            connections,
            tables,
            failures,
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The table backing `object_type`, if it is queryable.
    pub fn table(&self, object_type: &str) -> Option<&Table> {
        self.tables.get(object_type)
    }

    /// Queryable object types and their tables, in schema order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &Table)> + '_ {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Data sources that were left out, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> + '_ {
        self.failures.iter().map(|(id, err)| (id.as_str(), err))
    }

    pub fn resolve_mapping(&self, object_type: &str) -> Option<&DataSourceMapping> {
        self.table(object_type).map(Table::mapping)
    }

    pub fn resolve_connection(&self, object_type: &str) -> Option<SharedConnection> {
        self.table(object_type)
            .map(|table| table.connection().clone())
    }

    /// Closes every connection and empties the catalog.
    ///
    /// Errors while closing are logged and otherwise ignored.
    pub async fn close(&mut self) {
        for (id, connection) in self.connections.drain(..) {
            if let Err(err) = connection.close().await {
                warn!(source = %id, error = %err, "error closing connection");
            }
        }

        self.tables.clear();
    }
}

impl ResolveMapping for Catalog {
    fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.schema.object_type(name)
    }

    fn resolve_mapping(&self, object_type: &str) -> Option<&DataSourceMapping> {
        Catalog::resolve_mapping(self, object_type)
    }
}
