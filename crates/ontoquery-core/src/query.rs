use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// A declarative query against one object type, expressed in logical names.
///
/// Deserializes from the request format:
///
/// ```json
/// {
///   "from": "Vehicle",
///   "select": ["plate", "model"],
///   "where": {"plate": "X"},
///   "orderBy": [{"field": "model", "direction": "DESC"}],
///   "limit": 10,
///   "offset": 0
/// }
/// ```
///
/// Unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyQuery {
    /// Object type to query
    #[serde(default)]
    pub from: Option<String>,

    /// Fields to return, in order. Empty means every field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,

    /// Conjunction of equality filters, logical field name to value
    #[serde(default, rename = "where", skip_serializing_if = "IndexMap::is_empty")]
    pub filter: IndexMap<String, Json>,

    #[serde(
        default,
        rename = "orderBy",
        alias = "order_by",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub order_by: Vec<OrderBy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Rows to skip. Only applied together with `limit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl OntologyQuery {
    pub fn new(object_type: impl Into<String>) -> OntologyQuery {
        OntologyQuery {
            from: Some(object_type.into()),
            ..OntologyQuery::default()
        }
    }

    pub fn from_json(src: &str) -> Result<OntologyQuery> {
        serde_json::from_str(src).map_err(|err| Error::invalid_query(err.to_string()))
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Json>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(OrderBy {
            field: field.into(),
            direction: Some(direction.as_str().to_string()),
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Name of the queried object type, failing when absent or empty.
    pub fn object_type(&self) -> Result<&str> {
        match self.from.as_deref() {
            Some(from) if !from.trim().is_empty() => Ok(from),
            _ => Err(Error::invalid_query("query must specify 'from' object type")),
        }
    }
}

impl OrderBy {
    /// Direction of the entry. Anything other than `DESC`, in any case, sorts
    /// ascending.
    pub fn direction(&self) -> Direction {
        match self.direction.as_deref() {
            Some(direction) if direction.trim().eq_ignore_ascii_case("desc") => Direction::Desc,
            _ => Direction::Asc,
        }
    }
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Direction::Desc)
    }
}
