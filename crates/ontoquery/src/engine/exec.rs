use ontoquery_core::schema::{DataSourceMapping, ID_FIELD};
use ontoquery_sql::Select;

/// Translates the column labels of a result back to logical field names.
///
/// The id column becomes `id` and mapped columns their property. Labels the
/// mapping does not know, such as ones rewritten by the database, fall back
/// to the field selected at the same position.
pub(crate) fn logical_columns(
    labels: &[String],
    select: &Select,
    mapping: &DataSourceMapping,
) -> Vec<String> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if label.eq_ignore_ascii_case(&mapping.id_column) {
                return ID_FIELD.to_string();
            }

            mapping
                .property_name_ignore_case(label)
                .or_else(|| select.columns.get(i).map(|column| column.field.as_str()))
                .unwrap_or(label)
                .to_string()
        })
        .collect()
}
