use crate::Error;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Declared type of an object type property.
///
/// Literal values in filters are encoded according to the declared type of
/// the field they are compared against, not the runtime type of the value
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Type {
    String,
    Integer,
    Float,
    Boolean,

    /// Dates travel as opaque text; no parsing or format negotiation.
    Date,

    /// Timestamps travel as opaque text; no parsing or format negotiation.
    Timestamp,
}

impl Type {
    pub fn as_str(self) -> &'static str {
        match self {
            Type::String => "string",
            Type::Integer => "integer",
            Type::Float => "float",
            Type::Boolean => "boolean",
            Type::Date => "date",
            Type::Timestamp => "timestamp",
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match &*s.trim().to_ascii_lowercase() {
            "string" | "text" => Type::String,
            "integer" | "int" | "long" => Type::Integer,
            "float" | "double" | "number" | "decimal" => Type::Float,
            "boolean" | "bool" => Type::Boolean,
            "date" => Type::Date,
            "timestamp" | "datetime" => Type::Timestamp,
            _ => return Err(Error::invalid_schema(format!("unknown property type `{s}`"))),
        })
    }
}

impl TryFrom<String> for Type {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Type> for String {
    fn from(value: Type) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
