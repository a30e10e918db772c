use super::{Plan, RowType};
use crate::schema::ObjectType;

/// Reads every row of an object type, in its canonical layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// Logical name of the scanned object type
    pub object_type: String,

    pub row_type: RowType,
}

impl Scan {
    pub fn new(object_type: &ObjectType) -> Scan {
        Scan {
            object_type: object_type.name.clone(),
            row_type: RowType::canonical(object_type),
        }
    }
}

impl From<Scan> for Plan {
    fn from(value: Scan) -> Self {
        Plan::Scan(value)
    }
}
