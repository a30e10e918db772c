use super::Plan;
use crate::query::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub input: Box<Plan>,
    pub keys: Vec<SortKey>,
}

/// One ordering key. `position` refers to the input row of the sort, which
/// is the projected row when a projection precedes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortKey {
    pub position: usize,
    pub direction: Direction,
}

impl SortKey {
    pub fn new(position: usize, direction: Direction) -> SortKey {
        SortKey {
            position,
            direction,
        }
    }
}

impl From<Sort> for Plan {
    fn from(value: Sort) -> Self {
        Plan::Sort(value)
    }
}
