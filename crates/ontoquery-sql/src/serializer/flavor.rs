use super::Serializer;

use ontoquery_core::schema::{DatabaseKind, IdentCase, ResolveMapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl<'a> Serializer<'a> {
    pub fn sqlite(resolver: &'a dyn ResolveMapping) -> Serializer<'a> {
        Serializer::new(resolver, Flavor::Sqlite)
    }

    pub fn postgresql(resolver: &'a dyn ResolveMapping) -> Serializer<'a> {
        Serializer::new(resolver, Flavor::Postgresql)
    }

    pub fn mysql(resolver: &'a dyn ResolveMapping) -> Serializer<'a> {
        Serializer::new(resolver, Flavor::Mysql)
    }

    /// Serializer for the dialect spoken by `kind`.
    pub fn for_database(resolver: &'a dyn ResolveMapping, kind: DatabaseKind) -> Serializer<'a> {
        match kind {
            DatabaseKind::Postgresql => Serializer::postgresql(resolver),
            DatabaseKind::Mysql => Serializer::mysql(resolver),
            DatabaseKind::Sqlite => Serializer::sqlite(resolver),
        }
    }

    fn new(resolver: &'a dyn ResolveMapping, flavor: Flavor) -> Serializer<'a> {
        Serializer {
            resolver,
            flavor,
            ident_case: IdentCase::default(),
        }
    }
}
