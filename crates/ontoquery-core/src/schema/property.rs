use crate::stmt::Type;

use serde::Deserialize;

/// A typed, logically named attribute of an object type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    /// Logical name, unique within the object type
    pub name: String,

    /// Declared type
    #[serde(rename = "type", alias = "data_type")]
    pub ty: Type,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type) -> Property {
        Property {
            name: name.into(),
            ty,
        }
    }
}
