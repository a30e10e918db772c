use super::{Flavor, Formatter, ToSql};

use ontoquery_core::stmt;

/// Destination of the literal values referenced by a statement.
pub trait Params {
    /// Binds `param`, returning its placeholder, or `None` when the value is
    /// to be written inline as a literal.
    fn push(&mut self, param: &stmt::Value) -> Option<Placeholder>;
}

/// 1-based position of a bound parameter.
pub struct Placeholder(pub usize);

/// Writes every literal inline instead of binding it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inline;

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Option<Placeholder> {
        self.push(value.clone());
        Some(Placeholder(self.len()))
    }
}

impl Params for Inline {
    fn push(&mut self, _: &stmt::Value) -> Option<Placeholder> {
        None
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a String cannot fail
        let _ = match f.serializer.flavor {
            Flavor::Mysql => write!(f.dst, "?"),
            Flavor::Postgresql => write!(f.dst, "${}", self.0),
            Flavor::Sqlite => write!(f.dst, "?{}", self.0),
        };
    }
}
