//! Relational plans over logical field positions.
//!
//! A plan is a chain of operators, each reading the row produced by its
//! input. Plans built by the planner always follow the fixed pipeline
//! `Scan -> Filter -> Project -> Sort -> Limit`, every stage but the scan
//! being optional.

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_eq;
pub use expr_eq::ExprEq;

mod filter;
pub use filter::Filter;

mod limit;
pub use limit::Limit;

mod project;
pub use project::Project;

mod row_type;
pub use row_type::{RowField, RowType};

mod scan;
pub use scan::Scan;

mod sort;
pub use sort::{Sort, SortKey};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    Scan(Scan),
    Filter(Filter),
    Project(Project),
    Sort(Sort),
    Limit(Limit),
}

/// Operator kind, used to check pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Scan,
    Filter,
    Project,
    Sort,
    Limit,
}

impl Plan {
    pub fn stage(&self) -> Stage {
        match self {
            Plan::Scan(_) => Stage::Scan,
            Plan::Filter(_) => Stage::Filter,
            Plan::Project(_) => Stage::Project,
            Plan::Sort(_) => Stage::Sort,
            Plan::Limit(_) => Stage::Limit,
        }
    }

    /// Input of the operator, `None` for a scan.
    pub fn input(&self) -> Option<&Plan> {
        match self {
            Plan::Scan(_) => None,
            Plan::Filter(filter) => Some(&filter.input),
            Plan::Project(project) => Some(&project.input),
            Plan::Sort(sort) => Some(&sort.input),
            Plan::Limit(limit) => Some(&limit.input),
        }
    }

    /// Shape of the rows this operator produces.
    pub fn row_type(&self) -> &RowType {
        match self {
            Plan::Scan(scan) => &scan.row_type,
            Plan::Project(project) => &project.row_type,
            Plan::Filter(filter) => filter.input.row_type(),
            Plan::Sort(sort) => sort.input.row_type(),
            Plan::Limit(limit) => limit.input.row_type(),
        }
    }

    /// The scan at the leaf of the plan.
    pub fn scan(&self) -> &Scan {
        match self {
            Plan::Scan(scan) => scan,
            Plan::Filter(filter) => filter.input.scan(),
            Plan::Project(project) => project.input.scan(),
            Plan::Sort(sort) => sort.input.scan(),
            Plan::Limit(limit) => limit.input.scan(),
        }
    }

    /// Operators from the leaf scan up to this node.
    pub fn stages(&self) -> Vec<&Plan> {
        let mut stages = vec![];
        let mut plan = Some(self);
        while let Some(node) = plan {
            stages.push(node);
            plan = node.input();
        }
        stages.reverse();
        stages
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, Plan::Scan(_))
    }

    pub fn as_project(&self) -> Option<&Project> {
        match self {
            Plan::Project(project) => Some(project),
            _ => None,
        }
    }

    /// Adds a filter on top of this plan.
    pub fn filter(self, condition: impl Into<Expr>) -> Plan {
        Filter {
            input: Box::new(self),
            condition: condition.into(),
        }
        .into()
    }

    /// Adds a projection of the given input positions on top of this plan.
    ///
    /// Positions refer to this plan's output row; out of range positions are
    /// ignored.
    pub fn project(self, fields: Vec<usize>) -> Plan {
        Project::new(self, fields).into()
    }

    pub fn sort(self, keys: Vec<SortKey>) -> Plan {
        Sort {
            input: Box::new(self),
            keys,
        }
        .into()
    }

    pub fn limit(self, count: u64, offset: u64) -> Plan {
        Limit {
            input: Box::new(self),
            count,
            offset,
        }
        .into()
    }
}

impl fmt::Display for Plan {
    /// Renders one operator per line, the leaf scan last, each input indented
    /// below the operator reading it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, node) in self.stages().into_iter().rev().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}", "", indent = depth * 2)?;

            let fields = node.input().map(Plan::row_type);

            match node {
                Plan::Scan(scan) => write!(f, "Scan(table=[{}])", scan.object_type)?,
                Plan::Filter(filter) => {
                    write!(f, "Filter(condition=[")?;
                    filter.condition.fmt_with(f, fields)?;
                    write!(f, "])")?;
                }
                Plan::Project(project) => {
                    write!(f, "Project(")?;
                    for (i, field) in project.row_type.fields.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}=[${}]", field.name, project.fields[i])?;
                    }
                    write!(f, ")")?;
                }
                Plan::Sort(sort) => {
                    write!(f, "Sort(")?;
                    for (i, key) in sort.keys.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "sort{i}=[${}], dir{i}=[{}]", key.position, key.direction.as_str())?;
                    }
                    write!(f, ")")?;
                }
                Plan::Limit(limit) => {
                    write!(f, "Limit(offset=[{}], fetch=[{}])", limit.offset, limit.count)?
                }
            }
        }

        Ok(())
    }
}
