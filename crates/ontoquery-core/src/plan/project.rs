use super::{Plan, RowType};

/// Reorders and narrows the input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub input: Box<Plan>,

    /// Input row positions, in output order
    pub fields: Vec<usize>,

    /// Output row shape
    pub row_type: RowType,
}

impl Project {
    pub(super) fn new(input: Plan, fields: Vec<usize>) -> Project {
        let fields: Vec<_> = fields
            .into_iter()
            .filter(|position| *position < input.row_type().len())
            .collect();
        let row_type = input.row_type().select(&fields);

        Project {
            input: Box::new(input),
            fields,
            row_type,
        }
    }

    /// Names of the projected fields, in output order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.row_type.fields.iter().map(|field| field.name.as_str())
    }
}

impl From<Project> for Plan {
    fn from(value: Project) -> Self {
        Plan::Project(value)
    }
}
