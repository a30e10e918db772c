use crate::{schema::ObjectType, stmt::Type};

/// Shape of the rows produced by a plan operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowType {
    pub fields: Vec<RowField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowField {
    /// Logical field name
    pub name: String,

    /// Declared type, `None` for the id field
    pub ty: Option<Type>,

    /// Position of the field in the object type's canonical row layout
    pub source: usize,
}

impl RowType {
    /// The canonical row layout of `object_type`.
    pub fn canonical(object_type: &ObjectType) -> RowType {
        RowType {
            fields: object_type
                .fields()
                .enumerate()
                .map(|(source, field)| RowField {
                    name: field.name.to_string(),
                    ty: field.ty,
                    source,
                })
                .collect(),
        }
    }

    /// Position of the field named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn field(&self, position: usize) -> Option<&RowField> {
        self.fields.get(position)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(super) fn select(&self, positions: &[usize]) -> RowType {
        RowType {
            fields: positions
                .iter()
                .filter_map(|position| self.fields.get(*position).cloned())
                .collect(),
        }
    }
}
