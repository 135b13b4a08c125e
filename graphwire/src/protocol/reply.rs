// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Raw reply atoms as handed over by the command executor
//!
//! The executor owns the transport; by the time a reply reaches this crate it
//! has been parsed into a tree of `RawReply` atoms. Nothing here interprets
//! graph semantics, that is the job of the decoder and the result set.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// One atom (or nested array of atoms) of a server reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawReply {
    Nil,
    Integer(i64),
    Double(f64),
    /// Bulk or status string
    Bulk(String),
    Array(Vec<RawReply>),
    /// Error atom; may sit at any depth of a reply
    Error(String),
}

impl RawReply {
    /// Shorthand for a bulk string atom
    pub fn bulk(text: impl Into<String>) -> Self {
        RawReply::Bulk(text.into())
    }

    /// Short name of the atom kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawReply::Nil => "nil",
            RawReply::Integer(_) => "integer",
            RawReply::Double(_) => "double",
            RawReply::Bulk(_) => "bulk string",
            RawReply::Array(_) => "array",
            RawReply::Error(_) => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RawReply::Error(_))
    }

    /// Extract as array if possible
    pub fn as_array(&self) -> Option<&[RawReply]> {
        match self {
            RawReply::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extract as text if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawReply::Bulk(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as integer; integer text is accepted as well
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawReply::Integer(i) => Some(*i),
            RawReply::Bulk(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Extract as double; integers and decimal text are accepted as well
    pub fn as_double(&self) -> Option<f64> {
        match self {
            RawReply::Double(d) => Some(*d),
            RawReply::Integer(i) => Some(*i as f64),
            RawReply::Bulk(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Depth-first search for the first error atom in this reply
    pub fn find_error(&self) -> Option<&str> {
        match self {
            RawReply::Error(message) => Some(message),
            RawReply::Array(items) => items.iter().find_map(|item| item.find_error()),
            _ => None,
        }
    }

    /// Fail with [`GraphError::Server`] if an error atom appears anywhere
    pub fn check_errors(&self) -> Result<()> {
        match self.find_error() {
            Some(message) => Err(GraphError::Server(message.to_string())),
            None => Ok(()),
        }
    }

    /// Build a reply tree from its JSON rendering
    ///
    /// `null` maps to nil, integers and floats to numeric atoms, strings to
    /// bulk strings, booleans to their canonical text and `{"error": "..."}`
    /// to an error atom.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(RawReply::Nil),
            serde_json::Value::Bool(b) => Ok(RawReply::Bulk(b.to_string())),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(RawReply::Integer(i)),
                None => n.as_f64().map(RawReply::Double).ok_or_else(|| {
                    GraphError::malformed(format!("unsupported JSON number {}", n))
                }),
            },
            serde_json::Value::String(s) => Ok(RawReply::Bulk(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(RawReply::from_json)
                .collect::<Result<Vec<_>>>()
                .map(RawReply::Array),
            serde_json::Value::Object(map) => match map.get("error") {
                Some(serde_json::Value::String(message)) => Ok(RawReply::Error(message.clone())),
                _ => Err(GraphError::malformed(
                    "JSON objects are only accepted as {\"error\": \"...\"}",
                )),
            },
        }
    }

    /// Parse a reply tree from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// JSON rendering of the reply, inverse of [`RawReply::from_json`]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            RawReply::Nil => serde_json::Value::Null,
            RawReply::Integer(i) => serde_json::json!(i),
            RawReply::Double(d) => serde_json::json!(d),
            RawReply::Bulk(s) => serde_json::Value::String(s.clone()),
            RawReply::Array(items) => {
                serde_json::Value::Array(items.iter().map(|item| item.to_json()).collect())
            }
            RawReply::Error(message) => serde_json::json!({ "error": message }),
        }
    }
}

impl From<&str> for RawReply {
    fn from(text: &str) -> Self {
        RawReply::Bulk(text.to_string())
    }
}

impl From<String> for RawReply {
    fn from(text: String) -> Self {
        RawReply::Bulk(text)
    }
}

impl From<i64> for RawReply {
    fn from(value: i64) -> Self {
        RawReply::Integer(value)
    }
}

impl From<f64> for RawReply {
    fn from(value: f64) -> Self {
        RawReply::Double(value)
    }
}

impl From<Vec<RawReply>> for RawReply {
    fn from(items: Vec<RawReply>) -> Self {
        RawReply::Array(items)
    }
}
