#![allow(dead_code)]

use ontoquery::{
    driver::{Connection, Rows},
    schema::DataSourceConfig,
    stmt::Value,
    Error, Result, Schema,
};
use ontoquery_core::async_trait;

use std::sync::{Arc, Mutex};

pub const FLEET: &str = r#"{
    "object_types": [
        {
            "name": "Vehicle",
            "properties": [
                {"name": "plate", "type": "string"},
                {"name": "model", "type": "string"},
                {"name": "mileage", "type": "integer"},
                {"name": "color", "type": "string"}
            ],
            "data_source": {
                "connection_id": "fleet_db",
                "table": "vehicles",
                "id_column": "vid",
                "field_mapping": {"plate": "plate_no", "model": "model_name", "mileage": "km"}
            }
        },
        {
            "name": "Trip",
            "properties": [{"name": "distance", "type": "float"}],
            "data_source": {
                "connection_id": "fleet_db",
                "table": "trips",
                "id_column": "trip_id",
                "field_mapping": {"distance": "distance_km"}
            }
        },
        {
            "name": "Shipment",
            "properties": [{"name": "weight", "type": "float"}],
            "data_source": {
                "connection_id": "warehouse",
                "table": "shipments",
                "id_column": "sid",
                "field_mapping": {"weight": "weight_kg"}
            }
        },
        {
            "name": "Depot",
            "properties": [{"name": "city", "type": "string"}],
            "data_source": {
                "connection_id": "depot_db",
                "table": "depots",
                "id_column": "did",
                "field_mapping": {"city": "city"}
            }
        },
        {
            "name": "Ghost",
            "properties": [],
            "data_source": {"connection_id": "nowhere", "table": "ghosts", "id_column": "gid"}
        },
        {
            "name": "Driver",
            "properties": [{"name": "name", "type": "string"}]
        }
    ],
    "data_sources": [
        {"id": "fleet_db", "type": "sqlite", "jdbc_url": "sqlite::memory:"},
        {"id": "warehouse", "type": "db2", "jdbc_url": "jdbc:db2://warehouse:50000/main"},
        {"id": "depot_db", "type": "postgres", "host": "depots.internal", "database": "depots"}
    ]
}"#;

pub fn schema() -> Arc<Schema> {
    Arc::new(Schema::from_json(FLEET).unwrap())
}

/// Statements received by mock connections, with their parameters.
#[derive(Debug, Clone, Default)]
pub struct Log(Arc<Mutex<Vec<(String, Vec<Value>)>>>);

impl Log {
    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// Sources for which connecting was attempted, in order.
#[derive(Debug, Clone, Default)]
pub struct Attempts(Arc<Mutex<Vec<String>>>);

impl Attempts {
    pub fn sources(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Debug)]
pub struct MockConnection {
    log: Log,
    rows: Rows,
    closed: Arc<Mutex<bool>>,
}

#[async_trait]
impl Connection for MockConnection {
    async fn query(&mut self, sql: &str, params: &[Value]) -> Result<Rows> {
        self.log
            .0
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        Ok(self.rows.clone())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        *self.closed.lock().unwrap() = true;
        Ok(())
    }
}

/// Opens mock connections for every source except `depot_db`, which refuses.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    pub log: Log,
    pub attempts: Attempts,
    pub rows: Rows,
    pub closed: Arc<Mutex<bool>>,
}

impl Mock {
    pub fn returning(columns: &[&str], rows: Vec<Vec<Value>>) -> Mock {
        Mock {
            rows: Rows {
                columns: columns.iter().map(|column| column.to_string()).collect(),
                rows,
            },
            ..Mock::default()
        }
    }

    pub fn connect(
        &self,
    ) -> impl Fn(DataSourceConfig) -> std::future::Ready<Result<Box<dyn Connection>>> + '_ {
        move |source| {
            self.attempts.0.lock().unwrap().push(source.id.clone());

            if source.id == "depot_db" {
                let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
                return std::future::ready(Err(Error::from(refused)));
            }

            std::future::ready(Ok(Box::new(MockConnection {
                log: self.log.clone(),
                rows: self.rows.clone(),
                closed: self.closed.clone(),
            }) as Box<dyn Connection>))
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap()
    }
}
