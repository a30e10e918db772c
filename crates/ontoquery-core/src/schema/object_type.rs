use super::{DataSourceMapping, Property};
use crate::stmt::Type;

use serde::Deserialize;

/// Logical name of the canonical id field, always at row position 0.
pub const ID_FIELD: &str = "id";

/// A logical entity with typed properties, queryable as a table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObjectType {
    /// Globally unique name; also the logical table name
    pub name: String,

    /// Declared properties. Their order defines the canonical row layout.
    #[serde(default)]
    pub properties: Vec<Property>,

    /// Physical storage of the object type, if any
    #[serde(default)]
    pub data_source: Option<DataSourceMapping>,
}

/// A field of the canonical row layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a> {
    pub name: &'a str,

    /// `None` for the id field, which has no declared type.
    pub ty: Option<Type>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> ObjectType {
        ObjectType {
            name: name.into(),
            properties: vec![],
            data_source: None,
        }
    }

    pub fn property(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.properties.push(Property::new(name, ty));
        self
    }

    pub fn data_source(mut self, mapping: DataSourceMapping) -> Self {
        self.data_source = Some(mapping);
        self
    }

    /// Returns the mapping only when it is fully configured.
    pub fn mapping(&self) -> Option<&DataSourceMapping> {
        self.data_source
            .as_ref()
            .filter(|mapping| mapping.is_configured())
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Position of the named field in the canonical row layout: the id field
    /// at 0, then each property in declaration order.
    pub fn field_position(&self, name: &str) -> Option<usize> {
        if name == ID_FIELD {
            return Some(0);
        }

        self.properties
            .iter()
            .position(|property| property.name == name)
            .map(|index| index + 1)
    }

    /// The canonical row layout.
    pub fn fields(&self) -> impl Iterator<Item = Field<'_>> + '_ {
        std::iter::once(Field {
            name: ID_FIELD,
            ty: None,
        })
        .chain(self.properties.iter().map(|property| Field {
            name: &property.name,
            ty: Some(property.ty),
        }))
    }

    /// Width of the canonical row layout.
    pub fn width(&self) -> usize {
        self.properties.len() + 1
    }
}
