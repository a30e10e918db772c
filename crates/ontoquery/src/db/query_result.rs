use ontoquery_core::stmt::Value;

use serde_json::{Map, Value as Json};

/// Rows returned by a query, with columns named by logical field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of the named column in row `row`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.rows.get(row)?.get(index)
    }

    /// `{"columns": [..], "rows": [{column: value, ..}, ..]}`
    pub fn to_json(&self) -> Json {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let record: Map<String, Json> = self
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Value::to_json))
                    .collect();
                Json::Object(record)
            })
            .collect();

        let mut ret = Map::new();
        ret.insert("columns".to_string(), Json::from(self.columns.clone()));
        ret.insert("rows".to_string(), Json::Array(rows));
        Json::Object(ret)
    }
}
