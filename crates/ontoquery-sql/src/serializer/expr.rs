use super::{Delimited, Params, ToSql};

use crate::stmt::{self, Value};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(operands) => {
                fmt!(f, Delimited(operands, " AND "));
            }
            Eq(column, Value::Null) => {
                fmt!(f, column " IS NULL");
            }
            Eq(column, value) => {
                fmt!(f, column " = " value);
            }
        }
    }
}
