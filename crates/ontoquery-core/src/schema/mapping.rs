use indexmap::IndexMap;
use serde::Deserialize;

/// Binds one object type to its physical storage: which data source, which
/// table, which primary-key column, and which column backs each property.
///
/// Properties without an entry in `field_mapping` have no queryable column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataSourceMapping {
    /// Id of the data source holding the table
    #[serde(default)]
    pub connection_id: String,

    /// Physical table name
    #[serde(default)]
    pub table: String,

    /// Physical primary-key column
    #[serde(default)]
    pub id_column: String,

    /// Logical property name to physical column name
    #[serde(default)]
    pub field_mapping: IndexMap<String, String>,
}

impl DataSourceMapping {
    pub fn new(
        connection_id: impl Into<String>,
        table: impl Into<String>,
        id_column: impl Into<String>,
    ) -> DataSourceMapping {
        DataSourceMapping {
            connection_id: connection_id.into(),
            table: table.into(),
            id_column: id_column.into(),
            field_mapping: IndexMap::new(),
        }
    }

    /// Maps `property` to the physical `column`.
    pub fn field(mut self, property: impl Into<String>, column: impl Into<String>) -> Self {
        self.field_mapping.insert(property.into(), column.into());
        self
    }

    /// Returns the physical column backing `property`.
    pub fn column_name(&self, property: &str) -> Option<&str> {
        self.field_mapping.get(property).map(String::as_str)
    }

    /// Returns the property backed by the physical `column`.
    ///
    /// Exact inverse of [`column_name`](Self::column_name). Schema
    /// verification rejects mappings where two properties share a column, so
    /// at most one entry can match.
    pub fn property_name(&self, column: &str) -> Option<&str> {
        self.field_mapping
            .iter()
            .find(|(_, c)| *c == column)
            .map(|(property, _)| property.as_str())
    }

    /// Like [`property_name`](Self::property_name) but ignoring ASCII case,
    /// for databases that fold the case of returned column labels.
    pub fn property_name_ignore_case(&self, column: &str) -> Option<&str> {
        self.property_name(column).or_else(|| {
            self.field_mapping
                .iter()
                .find(|(_, c)| c.eq_ignore_ascii_case(column))
                .map(|(property, _)| property.as_str())
        })
    }

    /// True when the connection id, table and id column are all present.
    pub fn is_configured(&self) -> bool {
        !self.connection_id.is_empty() && !self.table.is_empty() && !self.id_column.is_empty()
    }
}
