use super::{Ident, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Conjunction of the operands
    And(Vec<Expr>),

    /// `column = value`, or `column IS NULL` when the value is null
    Eq(Ident, Value),
}

impl Expr {
    pub fn eq(column: impl Into<Ident>, value: impl Into<Value>) -> Expr {
        Expr::Eq(column.into(), value.into())
    }
}
