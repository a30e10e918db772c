use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use ontoquery_core::{
    err,
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use postgres::{
    types::{private::BytesMut, to_sql_checked, IsNull, ToSql, Type},
    Row,
};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts the cell at `index` of a PostgreSQL row.
    ///
    /// Dates and times come back as their ISO 8601 text.
    pub fn from_sql(row: &Row, index: usize, ty: &Type) -> Result<Self> {
        // The postgres `Type` is not an enum we can match on, so compare
        // against each supported type in turn.
        let value = if *ty == Type::BOOL {
            get::<bool>(row, index)?.map(stmt::Value::Bool)
        } else if *ty == Type::INT2 {
            get::<i16>(row, index)?.map(|v| stmt::Value::I64(v.into()))
        } else if *ty == Type::INT4 {
            get::<i32>(row, index)?.map(|v| stmt::Value::I64(v.into()))
        } else if *ty == Type::INT8 {
            get::<i64>(row, index)?.map(stmt::Value::I64)
        } else if *ty == Type::FLOAT4 {
            get::<f32>(row, index)?.map(|v| stmt::Value::F64(v.into()))
        } else if *ty == Type::FLOAT8 {
            get::<f64>(row, index)?.map(stmt::Value::F64)
        } else if [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(ty) {
            get::<String>(row, index)?.map(stmt::Value::String)
        } else if *ty == Type::DATE {
            get::<NaiveDate>(row, index)?.map(|v| stmt::Value::String(v.to_string()))
        } else if *ty == Type::TIME {
            get::<NaiveTime>(row, index)?.map(|v| stmt::Value::String(v.to_string()))
        } else if *ty == Type::TIMESTAMP {
            get::<NaiveDateTime>(row, index)?.map(|v| stmt::Value::String(v.to_string()))
        } else if *ty == Type::TIMESTAMPTZ {
            get::<DateTime<Utc>>(row, index)?.map(|v| stmt::Value::String(v.to_rfc3339()))
        } else {
            return Err(err!(
                "unsupported PostgreSQL column type `{ty}` for column `{}`",
                row.columns()[index].name()
            ));
        };

        Ok(Value(value.unwrap_or(stmt::Value::Null)))
    }
}

fn get<'a, T: postgres::types::FromSql<'a>>(row: &'a Row, index: usize) -> Result<Option<T>> {
    row.try_get::<usize, Option<T>>(index)
        .map_err(Error::driver_operation_failed)
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) => match *ty {
                Type::BOOL => value.to_sql(ty, out),
                _ if is_text(ty) => value.to_string().to_sql(ty, out),
                _ => Err(mismatch(&self.0, ty)),
            },
            stmt::Value::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                Type::INT8 => value.to_sql(ty, out),
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                _ if is_text(ty) => value.to_string().to_sql(ty, out),
                _ => Err(mismatch(&self.0, ty)),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => value.to_sql(ty, out),
                _ if is_text(ty) => value.to_string().to_sql(ty, out),
                _ => Err(mismatch(&self.0, ty)),
            },
            stmt::Value::String(value) => string_to_sql(value, ty, out),
        }
    }

    fn accepts(_: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Binds text to a parameter of type `ty`, parsing it when the server
/// expects a number, boolean, date or timestamp.
fn string_to_sql(value: &str, ty: &Type, out: &mut BytesMut) -> std::result::Result<IsNull, BoxError> {
    match *ty {
        Type::BOOL => value.parse::<bool>()?.to_sql(ty, out),
        Type::INT2 => value.trim().parse::<i16>()?.to_sql(ty, out),
        Type::INT4 => value.trim().parse::<i32>()?.to_sql(ty, out),
        Type::INT8 => value.trim().parse::<i64>()?.to_sql(ty, out),
        Type::FLOAT4 => value.trim().parse::<f32>()?.to_sql(ty, out),
        Type::FLOAT8 => value.trim().parse::<f64>()?.to_sql(ty, out),
        Type::DATE => NaiveDate::parse_from_str(value, "%Y-%m-%d")?.to_sql(ty, out),
        Type::TIME => value.parse::<NaiveTime>()?.to_sql(ty, out),
        Type::TIMESTAMP => parse_timestamp(value)?.to_sql(ty, out),
        Type::TIMESTAMPTZ => match DateTime::parse_from_rfc3339(value) {
            Ok(timestamp) => timestamp.with_timezone(&Utc).to_sql(ty, out),
            Err(_) => parse_timestamp(value)?.and_utc().to_sql(ty, out),
        },
        _ => value.to_sql(ty, out),
    }
}

fn parse_timestamp(value: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
}

fn is_text(ty: &Type) -> bool {
    [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME, Type::UNKNOWN].contains(ty)
}

fn mismatch(value: &CoreValue, ty: &Type) -> BoxError {
    format!("cannot bind `{value}` to a parameter of type `{ty}`").into()
}
