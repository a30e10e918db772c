use ontoquery_core::{
    plan::{Expr, Plan, RowType, Scan, SortKey},
    stmt::Value,
    Error, OntologyQuery, Result, Schema,
};

use tracing::debug;

/// What to do with a query field that names nothing in the row it is
/// resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFieldPolicy {
    /// Drop the entry and continue
    #[default]
    Skip,

    /// Fail with `InvalidQuery`
    Reject,
}

/// Builds relational plans from queries.
///
/// Plans follow the fixed pipeline `Scan -> Filter -> Project -> Sort ->
/// Limit`. Filters and projections resolve field names against the canonical
/// row of the object type; sort keys resolve against the row after
/// projection, so a query can only order by fields it selects.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    schema: &'a Schema,
    unknown_fields: UnknownFieldPolicy,
}

impl<'a> Planner<'a> {
    pub fn new(schema: &'a Schema) -> Planner<'a> {
        Planner {
            schema,
            unknown_fields: UnknownFieldPolicy::default(),
        }
    }

    pub fn unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn build(&self, query: &OntologyQuery) -> Result<Plan> {
        let object_type = self.schema.expect_object_type(query.object_type()?)?;
        let mut plan: Plan = Scan::new(object_type).into();

        let mut predicates = vec![];
        for (field, value) in &query.filter {
            let row = plan.row_type();
            let Some(position) = self.resolve(row, field, "where")? else {
                continue;
            };

            let value = Value::encode_literal(value, row.fields[position].ty)?;
            predicates.push(Expr::eq(position, value));
        }

        if let Some(condition) = Expr::and_from_vec(predicates) {
            plan = plan.filter(condition);
        }

        let mut fields = vec![];
        for field in &query.select {
            if let Some(position) = self.resolve(plan.row_type(), field, "select")? {
                fields.push(position);
            }
        }

        // Selecting nothing resolvable leaves the row as is
        if !fields.is_empty() {
            plan = plan.project(fields);
        }

        let mut keys = vec![];
        for order_by in &query.order_by {
            if let Some(position) = self.resolve(plan.row_type(), &order_by.field, "orderBy")? {
                keys.push(SortKey::new(position, order_by.direction()));
            }
        }

        if !keys.is_empty() {
            plan = plan.sort(keys);
        }

        if let Some(count) = query.limit.filter(|count| *count > 0) {
            let offset = query.offset.filter(|offset| *offset > 0).unwrap_or(0);
            plan = plan.limit(count as u64, offset as u64);
        }

        Ok(plan)
    }

    fn resolve(&self, row: &RowType, field: &str, clause: &str) -> Result<Option<usize>> {
        if let Some(position) = row.position(field) {
            return Ok(Some(position));
        }

        match self.unknown_fields {
            UnknownFieldPolicy::Skip => {
                debug!(field, clause, "ignoring unknown field");
                Ok(None)
            }
            UnknownFieldPolicy::Reject => Err(Error::invalid_query(format!(
                "unknown field `{field}` in {clause}"
            ))),
        }
    }
}
