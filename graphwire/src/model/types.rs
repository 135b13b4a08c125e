// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph entity shapes produced by the decoder
//!
//! Defines Node, Edge and Path as they arrive in query replies, plus the
//! Property and Point helpers. Entity ids are decode-time handles assigned by
//! the server; they are not guaranteed to survive later mutations.

use crate::model::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Absolute per-coordinate tolerance used by [`Point`] equality
pub const POINT_TOLERANCE: f64 = 1e-5;

/// Named property value of a node or edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Graph node with id, labels, and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    /// Labels in the order the server listed them
    pub labels: Vec<String>,
    pub properties: HashMap<String, Value>,
}

impl Node {
    /// Create a new node with the given id
    pub fn new(id: i64) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: HashMap::new(),
        }
    }

    /// Create a new node with id and labels
    pub fn with_labels(id: i64, labels: Vec<String>) -> Self {
        Self {
            id,
            labels,
            properties: HashMap::new(),
        }
    }

    pub fn add_label(&mut self, label: String) {
        self.labels.push(label);
    }

    /// Check if node has a specific label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Set a property; a later property with the same name replaces it
    pub fn set_property(&mut self, property: Property) {
        self.properties.insert(property.name, property.value);
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.id)?;
        for label in &self.labels {
            write!(f, ":{}", label)?;
        }
        write_properties(f, &self.properties)?;
        write!(f, ")")
    }
}

/// Graph edge with id, endpoints, relationship type, and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: i64,
    pub relationship_type: String,
    pub source: i64,
    pub destination: i64,
    pub properties: HashMap<String, Value>,
}

impl Edge {
    /// Create a new edge
    pub fn new(id: i64, relationship_type: String, source: i64, destination: i64) -> Self {
        Self {
            id,
            relationship_type,
            source,
            destination,
            properties: HashMap::new(),
        }
    }

    /// Set a property; a later property with the same name replaces it
    pub fn set_property(&mut self, property: Property) {
        self.properties.insert(property.name, property.value);
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Check if this edge connects the given nodes (in either direction)
    pub fn connects(&self, node1: i64, node2: i64) -> bool {
        (self.source == node1 && self.destination == node2)
            || (self.source == node2 && self.destination == node1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})-[{}:{}",
            self.source, self.id, self.relationship_type
        )?;
        write_properties(f, &self.properties)?;
        write!(f, "]->({})", self.destination)
    }
}

/// Ordered nodes and edges of a path
///
/// A non-empty path always holds exactly one more node than edges. The edge
/// at position `i` is expected to join nodes `i` and `i + 1`, but that is the
/// server's guarantee; [`Path::is_connected`] checks it on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathParts")]
pub struct Path {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// Unchecked serialized form; deserialization goes through [`Path::new`]
#[derive(Deserialize)]
struct PathParts {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<PathParts> for Path {
    type Error = String;

    fn try_from(parts: PathParts) -> Result<Self, Self::Error> {
        Path::new(parts.nodes, parts.edges)
    }
}

impl Path {
    /// Assemble a path, rejecting node/edge counts that cannot form one
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, String> {
        let valid = if nodes.is_empty() {
            edges.is_empty()
        } else {
            nodes.len() == edges.len() + 1
        };
        if !valid {
            return Err(format!(
                "path with {} edges must hold {} nodes, got {}",
                edges.len(),
                edges.len() + 1,
                nodes.len()
            ));
        }
        Ok(Self { nodes, edges })
    }

    /// The empty path
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn first_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Get the length of the path (number of edges)
    pub fn length(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that every edge joins its neighbouring nodes, in either direction
    pub fn is_connected(&self) -> bool {
        self.edges
            .iter()
            .enumerate()
            .all(|(i, edge)| match (self.nodes.get(i), self.nodes.get(i + 1)) {
                (Some(from), Some(to)) => edge.connects(from.id, to.id),
                _ => false,
            })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PATH[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                if let Some(edge) = self.edges.get(i - 1) {
                    write!(f, "-[{}:{}]-", edge.id, edge.relationship_type)?;
                }
            }
            write!(f, "({})", node.id)?;
        }
        write!(f, "]")
    }
}

/// Geographic point
///
/// Coordinates reach the client as decimal text, so equality tolerates an
/// absolute difference of [`POINT_TOLERANCE`] per coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < POINT_TOLERANCE
            && (self.longitude - other.longitude).abs() < POINT_TOLERANCE
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "POINT(latitude: {}, longitude: {})",
            self.latitude, self.longitude
        )
    }
}

/// Render ` {a: 1, b: 2}` with keys sorted, or nothing for an empty map
fn write_properties(f: &mut fmt::Formatter<'_>, properties: &HashMap<String, Value>) -> fmt::Result {
    if properties.is_empty() {
        return Ok(());
    }
    let mut keys: Vec<&String> = properties.keys().collect();
    keys.sort();
    write!(f, " {{")?;
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: {}", key, properties[*key])?;
    }
    write!(f, "}}")
}
