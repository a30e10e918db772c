mod builder;
pub use builder::Builder;

mod query_result;
pub use query_result::QueryResult;

use crate::{
    catalog::Table,
    engine::{self, Planner, UnknownFieldPolicy},
    Catalog,
};

use ontoquery_core::{
    plan::Plan,
    schema::{IdentCase, ResolveMapping},
    Error, OntologyQuery, Result, Schema,
};
use ontoquery_sql::{Inline, Serializer};

use std::sync::Arc;
use tracing::debug;

/// Entry point for querying object types.
///
/// Owns the catalog of connected data sources. Queries are planned against
/// the logical schema, rendered in the dialect of the data source backing
/// the queried object type, and executed on that source's connection.
#[derive(Debug)]
pub struct Db {
    catalog: Catalog,
    unknown_fields: UnknownFieldPolicy,

    /// Overrides the identifier case configured on each data source
    ident_case: Option<IdentCase>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to every data source of `schema` with default options.
    pub async fn connect(schema: impl Into<Arc<Schema>>) -> Db {
        Db::builder().build(schema).await
    }

    pub fn schema(&self) -> &Arc<Schema> {
        self.catalog.schema()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn planner(&self) -> Planner<'_> {
        Planner::new(self.schema()).unknown_fields(self.unknown_fields)
    }

    /// Builds the relational plan for `query`.
    pub fn plan(&self, query: &OntologyQuery) -> Result<Plan> {
        self.planner().build(query)
    }

    /// Returns the SQL `query` runs as, with literals written inline.
    pub fn explain(&self, query: &OntologyQuery) -> Result<String> {
        let plan = self.plan(query)?;
        let table = self.table(&plan)?;
        self.serializer(table).render(&plan, &mut Inline)
    }

    /// Runs `query` and returns its rows, labeled with logical field names.
    pub async fn query(&self, query: &OntologyQuery) -> Result<QueryResult> {
        let plan = self.plan(query)?;
        let table = self.table(&plan)?;

        let serializer = self.serializer(table);
        let select = serializer.lower(&plan)?;
        let mut params = vec![];
        let sql = serializer.serialize(&select, &mut params);

        let connection = table.connection();
        debug!(source = connection.source_id(), %sql, params = params.len(), "executing query");

        let rows = connection.query(&sql, &params).await?;
        let columns = engine::logical_columns(&rows.columns, &select, table.mapping());

        Ok(QueryResult {
            columns,
            rows: rows.rows,
        })
    }

    /// Closes every data source connection.
    pub async fn close(mut self) {
        self.catalog.close().await;
    }

    fn table(&self, plan: &Plan) -> Result<&Table> {
        let name = &plan.scan().object_type;
        self.catalog
            .table(name)
            .ok_or_else(|| Error::unresolved_mapping(name, None))
    }

    fn serializer<'a>(&'a self, table: &Table) -> Serializer<'a> {
        let ident_case = self.ident_case.unwrap_or(match table {
            Table::Relational(table) => table.ident_case,
        });

        Serializer::for_database(&self.catalog as &dyn ResolveMapping, table.kind())
            .ident_case(ident_case)
    }
}
