use crate::{ExecLog, LoggingConnection};

use ontoquery::{
    db::Builder,
    driver::{self, Connection},
    schema::DataSourceConfig,
    Db, Result, Schema,
};
use std::path::PathBuf;
use tempfile::TempDir;

/// SQLite databases for a small vehicle fleet, in a temporary directory.
///
/// * `fleet.db`: `vehicles` and `trips`
/// * `depots.db`: `depots`, configured with lower case identifiers
///
/// The schema also declares object types that are never queryable: one on a
/// source of an unsupported type, one on a database file that does not
/// exist, and one without a mapping.
pub struct Fleet {
    dir: TempDir,
    log: ExecLog,
}

impl Fleet {
    pub fn new() -> Fleet {
        let dir = tempfile::tempdir().unwrap();

        let fleet = rusqlite::Connection::open(dir.path().join("fleet.db")).unwrap();
        fleet
            .execute_batch(
                "CREATE TABLE vehicles (
                    vid INTEGER PRIMARY KEY,
                    plate_no TEXT,
                    model_name TEXT,
                    km INTEGER,
                    active_flag INTEGER,
                    weight_t REAL,
                    bought_on TEXT
                );
                INSERT INTO vehicles VALUES (1, 'B-FL 101', 'Transit', 120500, 1, 2.8, '2019-03-01');
                INSERT INTO vehicles VALUES (2, 'B-FL 102', 'Transit', 80400, 1, 2.8, '2020-07-15');
                INSERT INTO vehicles VALUES (3, 'B-FL 103', 'Sprinter', 15000, 0, 3.5, '2023-01-09');
                INSERT INTO vehicles VALUES (4, '京A·12345', 'Crafter', 5200, 1, 3.0, '2024-02-29');
                INSERT INTO vehicles VALUES (5, 'M-XY 7', NULL, NULL, 1, NULL, NULL);

                CREATE TABLE trips (trip_id INTEGER PRIMARY KEY, vid INTEGER, distance_km REAL);
                INSERT INTO trips VALUES (10, 1, 12.5);
                INSERT INTO trips VALUES (11, 1, 310.0);
                INSERT INTO trips VALUES (12, 3, 48.25);",
            )
            .unwrap();

        let depots = rusqlite::Connection::open(dir.path().join("depots.db")).unwrap();
        depots
            .execute_batch(
                "CREATE TABLE depots (did INTEGER PRIMARY KEY, city_name TEXT);
                INSERT INTO depots VALUES (1, 'Berlin');
                INSERT INTO depots VALUES (2, 'Hamburg');",
            )
            .unwrap();

        Fleet {
            dir,
            log: ExecLog::default(),
        }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    pub fn schema(&self) -> Schema {
        let schema = serde_json::json!({
            "object_types": [
                {
                    "name": "Vehicle",
                    "properties": [
                        {"name": "plate", "type": "string"},
                        {"name": "model", "type": "string"},
                        {"name": "mileage", "type": "integer"},
                        {"name": "active", "type": "boolean"},
                        {"name": "weight", "type": "float"},
                        {"name": "boughtOn", "type": "date"},
                        {"name": "color", "type": "string"}
                    ],
                    "data_source": {
                        "connection_id": "fleet_db",
                        "table": "vehicles",
                        "id_column": "vid",
                        "field_mapping": {
                            "plate": "plate_no",
                            "model": "model_name",
                            "mileage": "km",
                            "active": "active_flag",
                            "weight": "weight_t",
                            "boughtOn": "bought_on"
                        }
                    }
                },
                {
                    "name": "Trip",
                    "properties": [
                        {"name": "vehicle", "type": "integer"},
                        {"name": "distance", "type": "float"}
                    ],
                    "data_source": {
                        "connection_id": "fleet_db",
                        "table": "trips",
                        "id_column": "trip_id",
                        "field_mapping": {"vehicle": "vid", "distance": "distance_km"}
                    }
                },
                {
                    "name": "Depot",
                    "properties": [{"name": "city", "type": "string"}],
                    "data_source": {
                        "connection_id": "depot_db",
                        "table": "depots",
                        "id_column": "did",
                        "field_mapping": {"city": "city_name"}
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
                    "name": "Invoice",
                    "properties": [{"name": "total", "type": "float"}],
                    "data_source": {
                        "connection_id": "billing_db",
                        "table": "invoices",
                        "id_column": "iid",
                        "field_mapping": {"total": "total_eur"}
                    }
                },
                {
                    "name": "Driver",
                    "properties": [{"name": "name", "type": "string"}]
                }
            ],
            "data_sources": [
                {
                    "id": "fleet_db",
                    "type": "sqlite",
                    "database": self.path("fleet.db").display().to_string()
                },
                {
                    "id": "depot_db",
                    "type": "sqlite",
                    "jdbc_url": format!("jdbc:sqlite:{}", self.path("depots.db").display()),
                    "identifier_case": "lower"
                },
                {"id": "warehouse", "type": "db2", "host": "warehouse.internal", "port": 50000},
                {
                    "id": "billing_db",
                    "type": "sqlite",
                    "database": self.path("missing/billing.db").display().to_string()
                }
            ]
        });

        Schema::from_json(&schema.to_string()).unwrap()
    }

    /// Statements executed by databases opened through [`db`](Self::db).
    pub fn log(&self) -> &ExecLog {
        &self.log
    }

    pub async fn db(&self) -> Db {
        self.db_with(&mut Db::builder()).await
    }

    pub async fn db_with(&self, builder: &mut Builder) -> Db {
        builder
            .build_with(self.schema(), |source| self.connect(source))
            .await
    }

    async fn connect(&self, source: DataSourceConfig) -> Result<Box<dyn Connection>> {
        let connection = driver::connect(&source).await?;
        Ok(Box::new(LoggingConnection::new(connection, self.log.clone())))
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Fleet::new()
    }
}
