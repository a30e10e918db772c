use super::{Expr, Plan};

/// Keeps the input rows matching `condition`. The row shape is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub input: Box<Plan>,
    pub condition: Expr,
}

impl From<Filter> for Plan {
    fn from(value: Filter) -> Self {
        Plan::Filter(value)
    }
}
