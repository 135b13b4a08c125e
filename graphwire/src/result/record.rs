// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Single decoded row

use crate::error::{GraphError, Result};
use crate::model::{Edge, Node, Path, Point, Value};
use serde::de::DeserializeOwned;
use indexmap::IndexMap;
use std::sync::Arc;

/// Column address: a position or a column name
pub trait ColumnRef {
    fn position(&self, names: &[String]) -> Result<usize>;
}

impl ColumnRef for usize {
    fn position(&self, names: &[String]) -> Result<usize> {
        if *self < names.len() {
            Ok(*self)
        } else {
            Err(GraphError::ColumnOutOfRange {
                index: *self,
                size: names.len(),
            })
        }
    }
}

impl ColumnRef for &str {
    fn position(&self, names: &[String]) -> Result<usize> {
        names
            .iter()
            .position(|n| n == self)
            .ok_or_else(|| GraphError::ColumnNotFound(self.to_string()))
    }
}

impl ColumnRef for String {
    fn position(&self, names: &[String]) -> Result<usize> {
        self.as_str().position(names)
    }
}

/// Decoded row: column names paired with values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    names: Arc<[String]>,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(names: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Number of columns
    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn keys(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Value at a column position or name
    pub fn get<C: ColumnRef>(&self, column: C) -> Result<&Value> {
        let position = column.position(&self.names)?;
        Ok(&self.values[position])
    }

    /// Text form of a value: strings as-is, everything else via `Display`
    pub fn get_string<C: ColumnRef>(&self, column: C) -> Result<String> {
        Ok(match self.get(column)? {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn get_str<C: ColumnRef>(&self, column: C) -> Result<&str> {
        typed(self.get(column)?, "String", Value::as_str)
    }

    pub fn get_i64<C: ColumnRef>(&self, column: C) -> Result<i64> {
        typed(self.get(column)?, "Integer", Value::as_i64)
    }

    pub fn get_f64<C: ColumnRef>(&self, column: C) -> Result<f64> {
        typed(self.get(column)?, "Double", Value::as_f64)
    }

    pub fn get_bool<C: ColumnRef>(&self, column: C) -> Result<bool> {
        typed(self.get(column)?, "Boolean", Value::as_bool)
    }

    pub fn get_list<C: ColumnRef>(&self, column: C) -> Result<&[Value]> {
        typed(self.get(column)?, "List", Value::as_list)
    }

    pub fn get_map<C: ColumnRef>(&self, column: C) -> Result<&IndexMap<String, Value>> {
        typed(self.get(column)?, "Map", Value::as_map)
    }

    pub fn get_node<C: ColumnRef>(&self, column: C) -> Result<&Node> {
        typed(self.get(column)?, "Node", Value::as_node)
    }

    pub fn get_edge<C: ColumnRef>(&self, column: C) -> Result<&Edge> {
        typed(self.get(column)?, "Edge", Value::as_edge)
    }

    pub fn get_path<C: ColumnRef>(&self, column: C) -> Result<&Path> {
        typed(self.get(column)?, "Path", Value::as_path)
    }

    pub fn get_point<C: ColumnRef>(&self, column: C) -> Result<&Point> {
        typed(self.get(column)?, "Point", Value::as_point)
    }

    /// Column name / value pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// JSON object keyed by column name
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(name, value)| (name.to_string(), value.to_json()))
                .collect(),
        )
    }

    /// Deserialize the row into `T`, matching fields to column names
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

fn typed<'v, T>(
    value: &'v Value,
    expected: &'static str,
    pick: impl FnOnce(&'v Value) -> Option<T>,
) -> Result<T> {
    pick(value).ok_or(GraphError::ShapeMismatch {
        expected,
        found: value.type_name(),
    })
}
