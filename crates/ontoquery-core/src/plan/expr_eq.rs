use super::Expr;
use crate::stmt::Value;

/// `field = value`, with `field` a position in the input row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEq {
    pub field: usize,
    pub value: Value,
}

impl Expr {
    pub fn eq(field: usize, value: impl Into<Value>) -> Expr {
        ExprEq {
            field,
            value: value.into(),
        }
        .into()
    }
}

impl From<ExprEq> for Expr {
    fn from(value: ExprEq) -> Self {
        Expr::Eq(value)
    }
}
