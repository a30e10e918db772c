use super::{Type, Value};
use crate::{Error, Result};

use serde_json::Value as Json;

impl Value {
    /// Encodes a request value as a literal for a field of type `ty`.
    ///
    /// The declared type of the target field decides the literal's type:
    /// numbers are normalized to integer (truncating) or floating point,
    /// strings holding a number or boolean are parsed into the field's kind
    /// when they can be, and dates/timestamps pass through as opaque text.
    /// Null passes through untouched. Text is never re-encoded, so non-ASCII
    /// strings come out exactly as they went in.
    ///
    /// `ty` is `None` for fields without a declared type (the id field); the
    /// literal then follows the runtime type of the value.
    ///
    /// Arrays and objects are rejected: filters compare against scalars only.
    pub fn encode_literal(value: &Json, ty: Option<Type>) -> Result<Value> {
        if matches!(value, Json::Array(_) | Json::Object(_)) {
            return Err(Error::invalid_query(format!(
                "filter values must be scalars; got `{value}`"
            )));
        }

        if value.is_null() {
            return Ok(Value::Null);
        }

        let Some(ty) = ty else {
            return Ok(Value::from_json_scalar(value));
        };

        Ok(match ty {
            Type::String => Value::String(json_text(value)),
            Type::Integer => match value {
                Json::Number(n) => match n.as_i64() {
                    Some(v) => Value::I64(v),
                    // Saturating truncation for fractional or out of range numbers
                    None => Value::I64(n.as_f64().unwrap_or_default() as i64),
                },
                Json::String(s) => match s.trim().parse::<i64>() {
                    Ok(v) => Value::I64(v),
                    Err(_) => Value::String(s.clone()),
                },
                Json::Bool(v) => Value::I64(*v as i64),
                _ => Value::String(json_text(value)),
            },
            Type::Float => match value {
                Json::Number(n) => Value::F64(n.as_f64().unwrap_or_default()),
                Json::String(s) => match s.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() => Value::F64(v),
                    _ => Value::String(s.clone()),
                },
                _ => Value::String(json_text(value)),
            },
            Type::Boolean => match value {
                Json::Bool(v) => Value::Bool(*v),
                Json::String(s) if s.eq_ignore_ascii_case("true") => Value::Bool(true),
                Json::String(s) if s.eq_ignore_ascii_case("false") => Value::Bool(false),
                _ => Value::String(json_text(value)),
            },
            Type::Date | Type::Timestamp => Value::String(json_text(value)),
        })
    }

    fn from_json_scalar(value: &Json) -> Value {
        match value {
            Json::Bool(v) => Value::Bool(*v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Value::I64(v),
                None => Value::F64(n.as_f64().unwrap_or_default()),
            },
            Json::String(s) => Value::String(s.clone()),
            _ => Value::Null,
        }
    }
}

/// Text of a scalar JSON value, without the quotes JSON puts around strings.
fn json_text(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}
