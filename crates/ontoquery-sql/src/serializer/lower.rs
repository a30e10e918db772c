use super::Serializer;

use crate::stmt::{self, Column, Ident, Limit, OrderByExpr, Select};

use ontoquery_core::{
    bail,
    plan::{Expr, Plan, RowType, Stage},
    schema::{DataSourceMapping, IdentCase, ObjectType, ID_FIELD},
    Error, Result,
};

/// Which names end up in the lowered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Naming {
    /// Physical table and column names, case-normalized
    Physical,

    /// Object type and field names
    Logical,
}

struct Lower<'a> {
    object_type: &'a ObjectType,
    mapping: &'a DataSourceMapping,
    naming: Naming,
    ident_case: IdentCase,
}

impl Serializer<'_> {
    /// Lowers a plan to a `SELECT` over the physical table backing the
    /// scanned object type.
    ///
    /// Only fields with a column mapping are selected. Filtering or sorting
    /// on an unmapped field is an error, as is a projection where no field
    /// is mapped.
    pub fn lower(&self, plan: &Plan) -> Result<Select> {
        self.lower_with(plan, Naming::Physical)
    }

    pub(super) fn lower_logical(&self, plan: &Plan) -> Result<Select> {
        self.lower_with(plan, Naming::Logical)
    }

    fn lower_with(&self, plan: &Plan, naming: Naming) -> Result<Select> {
        let stages = plan.stages();
        verify_pipeline(&stages)?;

        let scan = plan.scan();
        let object_type = self
            .resolver
            .object_type(&scan.object_type)
            .ok_or_else(|| Error::not_found(&scan.object_type))?;
        let mapping = self
            .resolver
            .resolve_mapping(&scan.object_type)
            .ok_or_else(|| Error::unresolved_mapping(&scan.object_type, None))?;

        let lower = Lower {
            object_type,
            mapping,
            naming,
            ident_case: self.ident_case,
        };

        let mut select = Select {
            columns: lower.scan_columns(),
            from: lower.table(),
            filter: None,
            order_by: vec![],
            limit: None,
        };

        for node in &stages[1..] {
            match node {
                Plan::Filter(filter) => {
                    select.filter = Some(lower.expr(&filter.condition, filter.input.row_type())?);
                }
                Plan::Project(project) => {
                    select.columns = lower.project(&project.row_type)?;
                }
                Plan::Sort(sort) => {
                    let row = sort.input.row_type();
                    select.order_by = sort
                        .keys
                        .iter()
                        .map(|key| {
                            Ok(OrderByExpr {
                                column: lower.field_column(row, key.position)?.name,
                                direction: key.direction,
                            })
                        })
                        .collect::<Result<_>>()?;
                }
                Plan::Limit(limit) => {
                    select.limit = Some(Limit {
                        count: limit.count,
                        offset: limit.offset,
                    });
                }
                Plan::Scan(_) => bail!("plan contains more than one scan"),
            }
        }

        Ok(select)
    }
}

fn verify_pipeline(stages: &[&Plan]) -> Result<()> {
    for pair in stages.windows(2) {
        let (input, node) = (pair[0].stage(), pair[1].stage());

        if input >= node {
            bail!("plan operators out of pipeline order: {node:?} reads from {input:?}");
        }
    }

    match stages.first() {
        Some(node) if node.stage() == Stage::Scan => Ok(()),
        _ => bail!("plan does not start with a scan"),
    }
}

impl Lower<'_> {
    fn table(&self) -> Ident {
        match self.naming {
            Naming::Physical => Ident(self.ident_case.apply(&self.mapping.table)),
            Naming::Logical => Ident::from(&self.object_type.name[..]),
        }
    }

    /// Column backing the field at `source` in the canonical row layout, if
    /// the field is mapped.
    fn column(&self, source: usize) -> Option<Column> {
        if source == 0 {
            let name = match self.naming {
                Naming::Physical => self.ident_case.apply(&self.mapping.id_column),
                Naming::Logical => ID_FIELD.to_string(),
            };
            return Some(Column {
                name: Ident(name),
                field: ID_FIELD.to_string(),
            });
        }

        let property = self.object_type.properties.get(source - 1)?;
        let column = self.mapping.column_name(&property.name)?;

        let name = match self.naming {
            Naming::Physical => self.ident_case.apply(column),
            Naming::Logical => property.name.clone(),
        };

        Some(Column {
            name: Ident(name),
            field: property.name.clone(),
        })
    }

    /// The id column followed by every mapped property, in declaration order.
    fn scan_columns(&self) -> Vec<Column> {
        (0..self.object_type.width())
            .filter_map(|source| self.column(source))
            .collect()
    }

    fn project(&self, row: &RowType) -> Result<Vec<Column>> {
        let columns: Vec<_> = row
            .fields
            .iter()
            .filter_map(|field| self.column(field.source))
            .collect();

        if columns.is_empty() {
            let first = row.fields.first().map(|field| field.name.as_str());
            return Err(Error::unresolved_mapping(&self.object_type.name, first));
        }

        Ok(columns)
    }

    /// Column of the field at `position` in `row`, failing when the field
    /// has no column mapping.
    fn field_column(&self, row: &RowType, position: usize) -> Result<Column> {
        let Some(field) = row.field(position) else {
            bail!(
                "field position {position} is out of range for a row of {} fields",
                row.len()
            );
        };

        self.column(field.source)
            .ok_or_else(|| Error::unresolved_mapping(&self.object_type.name, Some(&field.name)))
    }

    fn expr(&self, expr: &Expr, row: &RowType) -> Result<stmt::Expr> {
        Ok(match expr {
            Expr::And(and) => stmt::Expr::And(
                and.operands
                    .iter()
                    .map(|operand| self.expr(operand, row))
                    .collect::<Result<_>>()?,
            ),
            Expr::Eq(eq) => stmt::Expr::Eq(self.field_column(row, eq.field)?.name, eq.value.clone()),
        })
    }
}
