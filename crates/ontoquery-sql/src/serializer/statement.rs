use super::{Comma, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(|column| &column.name));
        let from = &self.from;
        fmt!(f, "SELECT " columns " FROM " from);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY " Comma(&self.order_by));
        }

        if let Some(limit) = &self.limit {
            fmt!(f, " LIMIT " limit.count);

            if limit.offset > 0 {
                fmt!(f, " OFFSET " limit.offset);
            }
        }
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.column " " self.direction.as_str());
    }
}
