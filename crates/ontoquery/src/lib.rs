pub mod catalog;
pub use catalog::{Catalog, SharedConnection, Table};

pub mod db;
pub use db::{Db, QueryResult};

pub mod driver;

mod engine;
pub use engine::{Planner, UnknownFieldPolicy};

pub use ontoquery_core::{
    plan, query, schema, stmt, Error, OntologyQuery, Result, Schema,
};
