mod exec;
pub(crate) use exec::logical_columns;

mod planner;
pub use planner::{Planner, UnknownFieldPolicy};
