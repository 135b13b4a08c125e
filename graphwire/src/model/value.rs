// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Decoded value type
//!
//! Every cell of a decoded row is one of these variants:
//! - Scalars: Null, Boolean, Integer, Double, String
//! - Collections: List, Map
//! - Graph entities: Node, Edge, Path
//! - Spatial: Point
//! - Raw: payload of a tag this client does not understand, passed through

use crate::model::types::{Edge, Node, Path, Point};
use crate::protocol::RawReply;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded reply value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    List(Vec<Value>),
    /// Keys in the order the server sent them
    Map(IndexMap<String, Value>),
    Node(Node),
    Edge(Edge),
    Path(Path),
    Point(Point),
    Raw(RawReply),
}

impl Value {
    /// Extract as string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as integer if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract as float; integers widen
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extract as boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Extract as node if possible
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Extract as edge if possible
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Value::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Extract as path if possible
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Value::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&RawReply> {
        match self {
            Value::Raw(raw) => Some(raw),
            _ => None,
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Double(_) => "Double",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Node(_) => "Node",
            Value::Edge(_) => "Edge",
            Value::Path(_) => "Path",
            Value::Point(_) => "Point",
            Value::Raw(_) => "Raw",
        }
    }

    /// Plain JSON rendering, used for typed row deserialization and output
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::json!(i),
            Value::Double(d) => serde_json::json!(d),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(|v| v.to_json()).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Node(node) => serde_json::json!({
                "type": "node",
                "id": node.id,
                "labels": node.labels,
                "properties": properties_to_json(&node.properties),
            }),
            Value::Edge(edge) => serde_json::json!({
                "type": "edge",
                "id": edge.id,
                "relationship_type": edge.relationship_type,
                "source": edge.source,
                "destination": edge.destination,
                "properties": properties_to_json(&edge.properties),
            }),
            Value::Path(path) => serde_json::json!({
                "type": "path",
                "nodes": path.nodes().iter().map(|n| Value::Node(n.clone()).to_json()).collect::<Vec<_>>(),
                "edges": path.edges().iter().map(|e| Value::Edge(e.clone()).to_json()).collect::<Vec<_>>(),
            }),
            Value::Point(point) => serde_json::json!({
                "latitude": point.latitude,
                "longitude": point.longitude,
            }),
            Value::Raw(raw) => raw.to_json(),
        }
    }
}

fn properties_to_json(
    properties: &std::collections::HashMap<String, Value>,
) -> serde_json::Value {
    serde_json::Value::Object(
        properties
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Node(node) => write!(f, "{}", node),
            Value::Edge(edge) => write!(f, "{}", edge),
            Value::Path(path) => write!(f, "{}", path),
            Value::Point(point) => write!(f, "{}", point),
            Value::Raw(raw) => write!(f, "RAW({})", raw.to_json()),
        }
    }
}

/// Convert from Rust primitive types to Value
impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::List(vec.into_iter().map(Into::into).collect())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<Edge> for Value {
    fn from(edge: Edge) -> Self {
        Value::Edge(edge)
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        Value::Path(path)
    }
}

impl From<Point> for Value {
    fn from(point: Point) -> Self {
        Value::Point(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(3i64).as_f64(), Some(3.0));
        assert_eq!(Value::from(3.5).as_i64(), None);
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(vec![1i64, 2]).as_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_json_rendering() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), Value::from(vec!["x", "y"]));
        map.insert("a".to_string(), Value::from(1i64));
        let json = Value::Map(map.clone()).to_json();
        assert_eq!(json, serde_json::json!({"a": 1, "b": ["x", "y"]}));
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(Value::Map(map).to_string(), "{b: [\"x\", \"y\"], a: 1}");
    }

    #[test]
    fn test_display() {
        let list = Value::List(vec![Value::Null, Value::from(true), Value::from("s")]);
        assert_eq!(list.to_string(), "[null, true, \"s\"]");
    }
}
