use super::{Formatter, Params, ToSql};

use ontoquery_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(placeholder) = f.params.push(self) {
            return placeholder.to_sql(f);
        }

        match self {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(v) if f.serializer.is_sqlite() => f.dst.push_str(if *v { "1" } else { "0" }),
            Value::Bool(v) => f.dst.push_str(if *v { "TRUE" } else { "FALSE" }),
            Value::I64(v) => f.dst.push_str(&v.to_string()),
            Value::F64(v) => f.dst.push_str(&format!("{v:?}")),
            Value::String(v) => {
                let mysql = f.serializer.is_mysql();

                f.dst.push('\'');
                for ch in v.chars() {
                    match ch {
                        '\'' => f.dst.push_str("''"),
                        '\\' if mysql => f.dst.push_str("\\\\"),
                        ch => f.dst.push(ch),
                    }
                }
                f.dst.push('\'');
            }
        }
    }
}
