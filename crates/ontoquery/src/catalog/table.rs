use super::SharedConnection;

use ontoquery_core::schema::{DataSourceMapping, DatabaseKind, IdentCase};

/// How a queryable object type is stored.
#[derive(Debug, Clone)]
pub enum Table {
    /// A table of a relational data source
    Relational(RelationalTable),
}

#[derive(Debug, Clone)]
pub struct RelationalTable {
    pub connection: SharedConnection,
    pub mapping: DataSourceMapping,

    /// Case of physical identifiers in SQL sent to this table's source
    pub ident_case: IdentCase,
}

impl Table {
    pub fn mapping(&self) -> &DataSourceMapping {
        match self {
            Table::Relational(table) => &table.mapping,
        }
    }

    pub fn connection(&self) -> &SharedConnection {
        match self {
            Table::Relational(table) => &table.connection,
        }
    }

    /// Database kind of the source holding the table.
    pub fn kind(&self) -> DatabaseKind {
        self.connection().kind()
    }
}
