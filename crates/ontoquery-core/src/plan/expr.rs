use super::{ExprAnd, ExprEq, RowType};
use crate::stmt::Value;

use std::fmt;

/// A filter predicate over the fields of an operator's input row.
///
/// Only conjunctions of equalities are supported.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    And(ExprAnd),
    Eq(ExprEq),
}

impl Expr {
    /// Combines predicates with AND. A single predicate is returned
    /// unmodified; no predicates yields `None`.
    pub fn and_from_vec(operands: Vec<Expr>) -> Option<Expr> {
        match operands.len() {
            0 => None,
            1 => operands.into_iter().next(),
            _ => Some(ExprAnd { operands }.into()),
        }
    }

    /// Every equality in the predicate, in order.
    pub fn equalities(&self) -> Vec<&ExprEq> {
        match self {
            Expr::Eq(eq) => vec![eq],
            Expr::And(and) => and.operands.iter().flat_map(Expr::equalities).collect(),
        }
    }

    pub(super) fn fmt_with(&self, f: &mut fmt::Formatter<'_>, row: Option<&RowType>) -> fmt::Result {
        match self {
            Expr::Eq(eq) => {
                match row.and_then(|row| row.fields.get(eq.field)) {
                    Some(field) => write!(f, "=({}, ", field.name)?,
                    None => write!(f, "=(${}, ", eq.field)?,
                }
                match &eq.value {
                    Value::String(value) => write!(f, "'{value}')"),
                    value => write!(f, "{value})"),
                }
            }
            Expr::And(and) => {
                write!(f, "AND(")?;
                for (i, operand) in and.operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    operand.fmt_with(f, row)?;
                }
                write!(f, ")")
            }
        }
    }
}
