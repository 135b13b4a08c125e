// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query parameters
//!
//! Parameters travel in front of the query text as
//! `CYPHER name=literal name=literal <query>`.

use crate::error::{GraphError, Result};
use crate::model::Value;

/// Prefix `query` with its parameter header
pub fn prepare_query(query: &str, params: &[(&str, Value)]) -> Result<String> {
    if params.is_empty() {
        return Ok(query.to_string());
    }

    let mut prepared = String::from("CYPHER ");
    for (name, value) in params {
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(GraphError::Execution(format!(
                "invalid parameter name '{}'",
                name
            )));
        }
        prepared.push_str(name);
        prepared.push('=');
        prepared.push_str(&to_literal(value)?);
        prepared.push(' ');
    }
    prepared.push_str(query);
    Ok(prepared)
}

/// Render a value as a query literal
pub fn to_literal(value: &Value) -> Result<String> {
    let literal = match value {
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Double(d) => format_double(*d),
        Value::String(s) => quote(s),
        Value::List(items) => format!(
            "[{}]",
            items
                .iter()
                .map(to_literal)
                .collect::<Result<Vec<_>>>()?
                .join(", ")
        ),
        Value::Map(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| Ok(format!("{}: {}", k, to_literal(v)?)))
                .collect::<Result<Vec<_>>>()?
                .join(", ")
        ),
        Value::Point(point) => format!(
            "point({{latitude: {}, longitude: {}}})",
            format_double(point.latitude),
            format_double(point.longitude)
        ),
        other => {
            return Err(GraphError::ShapeMismatch {
                expected: "parameter literal",
                found: other.type_name(),
            })
        }
    };
    Ok(literal)
}

fn quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Doubles keep a decimal point so the server does not read them as integers
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
