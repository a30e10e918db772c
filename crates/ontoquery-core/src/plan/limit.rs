use super::Plan;

#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub input: Box<Plan>,

    /// Maximum number of rows returned, always positive
    pub count: u64,

    /// Rows skipped before the first one returned
    pub offset: u64,
}

impl From<Limit> for Plan {
    fn from(value: Limit) -> Self {
        Plan::Limit(value)
    }
}
