//! SQL statements produced by lowering a plan.

mod expr;
pub use expr::Expr;

mod ident;
pub use ident::Ident;

mod select;
pub use select::{Column, Limit, OrderByExpr, Select};

pub use ontoquery_core::{query::Direction, stmt::Value};
