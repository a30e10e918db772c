use super::{Direction, Expr, Ident};

/// `SELECT .. FROM .. [WHERE ..] [ORDER BY ..] [LIMIT .. [OFFSET ..]]` over a
/// single table.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<Column>,
    pub from: Ident,
    pub filter: Option<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Limit>,
}

/// A selected column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: Ident,

    /// Logical field the column carries. Not part of the SQL text.
    pub field: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub column: Ident,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
    pub count: u64,
    pub offset: u64,
}

impl Select {
    /// Logical field names of the selected columns, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.field.as_str())
    }
}
