#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
pub(crate) use ident::push_quoted;

mod lower;

mod params;
pub use params::{Inline, Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::stmt::Select;

use ontoquery_core::{
    plan::Plan,
    schema::{IdentCase, ResolveMapping},
    Result,
};

/// Serialize a plan or statement to a SQL string
pub struct Serializer<'a> {
    /// Object type and mapping lookup used when lowering plans
    resolver: &'a dyn ResolveMapping,

    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Case applied to physical identifiers
    ident_case: IdentCase,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    /// Sets the case applied to physical identifiers. Defaults to upper case.
    pub fn ident_case(mut self, ident_case: IdentCase) -> Self {
        self.ident_case = ident_case;
        self
    }

    /// Lowers `plan` to SQL referencing physical tables and columns.
    ///
    /// Literals are bound through `params`: either as placeholders collected
    /// for the driver, or written inline with [`Inline`].
    pub fn render(&self, plan: &Plan, params: &mut impl Params) -> Result<String> {
        let stmt = self.lower(plan)?;
        Ok(self.serialize(&stmt, params))
    }

    /// Renders `plan` with the logical object type and field names in place
    /// of physical identifiers.
    ///
    /// The output is not meant to reach a database as is; see
    /// [`IdentifierRewriter`](crate::IdentifierRewriter).
    pub fn render_logical(&self, plan: &Plan, params: &mut impl Params) -> Result<String> {
        let stmt = self.lower_logical(plan)?;
        Ok(self.serialize(&stmt, params))
    }

    pub fn serialize(&self, stmt: &Select, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    pub(crate) fn resolver(&self) -> &'a dyn ResolveMapping {
        self.resolver
    }

    pub(crate) fn case(&self) -> IdentCase {
        self.ident_case
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    pub(crate) fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }

    /// Character used to quote identifiers
    pub(crate) fn quote(&self) -> char {
        match self.flavor {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        }
    }
}
