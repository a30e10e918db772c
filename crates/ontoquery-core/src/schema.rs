mod data_source;
pub use data_source::{resolve_env, resolve_env_with, DataSourceConfig, DatabaseKind, IdentCase};

mod mapping;
pub use mapping::DataSourceMapping;

mod object_type;
pub use object_type::{Field, ObjectType, ID_FIELD};

mod property;
pub use property::Property;

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// The logical schema: every declared object type and data source.
///
/// Loaded once at startup and read-only afterwards. Object types and data
/// sources keep their declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub object_types: IndexMap<String, ObjectType>,
    pub data_sources: IndexMap<String, DataSourceConfig>,
}

/// Schema configuration as it appears in a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub object_types: Vec<ObjectType>,

    #[serde(default)]
    pub data_sources: Vec<DataSourceConfig>,
}

/// Lookup of object types and their physical mappings, as needed to lower a
/// plan to SQL.
///
/// Implemented by [`Schema`], which answers with every configured mapping,
/// and by the catalog, which only answers for object types bound to a live
/// connection.
pub trait ResolveMapping {
    fn object_type(&self, name: &str) -> Option<&ObjectType>;

    fn resolve_mapping(&self, object_type: &str) -> Option<&DataSourceMapping>;
}

impl Schema {
    /// Builds and verifies a schema from its configuration.
    pub fn from_config(config: SchemaConfig) -> Result<Schema> {
        let mut schema = Schema::default();

        for object_type in config.object_types {
            if schema.object_types.contains_key(&object_type.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate object type `{}`",
                    object_type.name
                )));
            }
            schema
                .object_types
                .insert(object_type.name.clone(), object_type);
        }

        for data_source in config.data_sources {
            if schema.data_sources.contains_key(&data_source.id) {
                return Err(Error::invalid_schema(format!(
                    "duplicate data source `{}`",
                    data_source.id
                )));
            }
            schema
                .data_sources
                .insert(data_source.id.clone(), data_source);
        }

        schema.verify()?;
        Ok(schema)
    }

    /// Parses and verifies a schema from JSON text.
    pub fn from_json(src: &str) -> Result<Schema> {
        let config: SchemaConfig = serde_json::from_str(src)
            .map_err(|err| Error::invalid_schema(err.to_string()))?;
        Schema::from_config(config)
    }

    /// Reads, parses and verifies a JSON schema file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Schema> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).context(crate::err!("reading {}", path.display())))?;
        Schema::from_json(&src)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.get(name)
    }

    /// Returns the object type named `name`, or a `NotFound` error.
    pub fn expect_object_type(&self, name: &str) -> Result<&ObjectType> {
        self.object_type(name)
            .ok_or_else(|| Error::not_found(name))
    }

    pub fn data_source(&self, id: &str) -> Option<&DataSourceConfig> {
        self.data_sources.get(id)
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.object_types.values()
    }

    pub fn data_sources(&self) -> impl Iterator<Item = &DataSourceConfig> {
        self.data_sources.values()
    }
}

impl ResolveMapping for Schema {
    fn object_type(&self, name: &str) -> Option<&ObjectType> {
        Schema::object_type(self, name)
    }

    fn resolve_mapping(&self, object_type: &str) -> Option<&DataSourceMapping> {
        Schema::object_type(self, object_type)?.mapping()
    }
}
