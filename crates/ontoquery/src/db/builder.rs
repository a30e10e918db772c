use super::Db;
use crate::{engine::UnknownFieldPolicy, Catalog, Result};

use ontoquery_core::{
    driver::Connection,
    schema::{DataSourceConfig, IdentCase},
    Schema,
};

use std::{future::Future, sync::Arc};

#[derive(Debug, Default)]
pub struct Builder {
    unknown_fields: UnknownFieldPolicy,
    ident_case: Option<IdentCase>,
}

impl Builder {
    /// What to do with query fields the object type does not declare.
    /// Defaults to skipping them.
    pub fn unknown_fields(&mut self, policy: UnknownFieldPolicy) -> &mut Self {
        self.unknown_fields = policy;
        self
    }

    /// Case physical identifiers are rendered in, for every data source.
    /// Without it each data source's `identifier_case` applies.
    pub fn ident_case(&mut self, ident_case: IdentCase) -> &mut Self {
        self.ident_case = Some(ident_case);
        self
    }

    /// Builds the catalog with the built-in drivers.
    pub async fn build(&self, schema: impl Into<Arc<Schema>>) -> Db {
        let catalog = Catalog::build(schema.into()).await;
        self.with_catalog(catalog)
    }

    /// Builds the catalog, opening connections with `connect`.
    pub async fn build_with<F, Fut>(&self, schema: impl Into<Arc<Schema>>, connect: F) -> Db
    where
        F: Fn(DataSourceConfig) -> Fut,
        Fut: Future<Output = Result<Box<dyn Connection>>>,
    {
        let catalog = Catalog::build_with(schema.into(), connect).await;
        self.with_catalog(catalog)
    }

    pub fn with_catalog(&self, catalog: Catalog) -> Db {
        Db {
            catalog,
            unknown_fields: self.unknown_fields,
            ident_case: self.ident_case,
        }
    }
}
