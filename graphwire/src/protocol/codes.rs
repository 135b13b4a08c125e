// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Numeric codes of the compact reply encoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a tagged value `[code, payload]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Unknown,
    Null,
    String,
    Integer,
    Boolean,
    Double,
    Array,
    Edge,
    Node,
    Path,
    Map,
    Point,
}

impl ValueType {
    /// Map a wire code to its value type. Codes this client does not know
    /// (including ones added by newer servers) map to `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ValueType::Null,
            2 => ValueType::String,
            3 => ValueType::Integer,
            4 => ValueType::Boolean,
            5 => ValueType::Double,
            6 => ValueType::Array,
            7 => ValueType::Edge,
            8 => ValueType::Node,
            9 => ValueType::Path,
            10 => ValueType::Map,
            11 => ValueType::Point,
            _ => ValueType::Unknown,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ValueType::Unknown => 0,
            ValueType::Null => 1,
            ValueType::String => 2,
            ValueType::Integer => 3,
            ValueType::Boolean => 4,
            ValueType::Double => 5,
            ValueType::Array => 6,
            ValueType::Edge => 7,
            ValueType::Node => 8,
            ValueType::Path => 9,
            ValueType::Map => 10,
            ValueType::Point => 11,
        }
    }
}

/// Column kind announced by the reply header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Unknown,
    Scalar,
    Node,
    Relation,
}

impl ColumnKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ColumnKind::Scalar,
            2 => ColumnKind::Node,
            3 => ColumnKind::Relation,
            _ => ColumnKind::Unknown,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ColumnKind::Unknown => 0,
            ColumnKind::Scalar => 1,
            ColumnKind::Node => 2,
            ColumnKind::Relation => 3,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Unknown => "unknown",
            ColumnKind::Scalar => "scalar",
            ColumnKind::Node => "node",
            ColumnKind::Relation => "relation",
        };
        write!(f, "{}", name)
    }
}
