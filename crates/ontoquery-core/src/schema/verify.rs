use super::{DataSourceMapping, ObjectType, Schema, ID_FIELD};
use crate::{Error, Result};

use std::collections::HashSet;

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for object_type in self.schema.object_types() {
            self.verify_property_names(object_type)?;

            if let Some(mapping) = &object_type.data_source {
                self.verify_field_mapping(object_type, mapping)?;
            }
        }

        Ok(())
    }

    fn verify_property_names(&self, object_type: &ObjectType) -> Result<()> {
        if object_type.name.is_empty() {
            return Err(Error::invalid_schema("object type name must not be empty"));
        }

        let mut seen = HashSet::new();

        for property in &object_type.properties {
            if property.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "object type `{}` declares a property with an empty name",
                    object_type.name
                )));
            }

            if property.name == ID_FIELD {
                return Err(Error::invalid_schema(format!(
                    "object type `{}` declares property `{ID_FIELD}`, which is reserved for the id field",
                    object_type.name
                )));
            }

            if !seen.insert(property.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "object type `{}` declares property `{}` more than once",
                    object_type.name, property.name
                )));
            }
        }

        Ok(())
    }

    /// The reverse column lookup must be a true inverse, so every mapped
    /// column has to be distinct from the others and from the id column.
    fn verify_field_mapping(
        &self,
        object_type: &ObjectType,
        mapping: &DataSourceMapping,
    ) -> Result<()> {
        let mut columns = Columns::default();

        if !mapping.id_column.is_empty() {
            columns.insert(&mapping.id_column);
        }

        for (property, column) in &mapping.field_mapping {
            if object_type.property_by_name(property).is_none() {
                return Err(Error::invalid_schema(format!(
                    "field mapping of `{}` names undeclared property `{property}`",
                    object_type.name
                )));
            }

            if column.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "property `{property}` of `{}` is mapped to an empty column name",
                    object_type.name
                )));
            }

            if !columns.insert(column) {
                return Err(Error::invalid_schema(format!(
                    "column `{column}` of `{}` is mapped more than once",
                    object_type.name
                )));
            }
        }

        Ok(())
    }
}

/// Column names folded the way `IdentCase` renders them. Two columns collide
/// when either their upper or their lower case forms are equal.
#[derive(Default)]
struct Columns {
    upper: HashSet<String>,
    lower: HashSet<String>,
}

impl Columns {
    fn insert(&mut self, column: &str) -> bool {
        let upper = self.upper.insert(column.to_uppercase());
        let lower = self.lower.insert(column.to_lowercase());
        upper && lower
    }
}
