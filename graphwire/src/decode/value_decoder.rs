// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Tagged value decoder
//!
//! A tagged value is a two element array `[code, payload]`. The decoder
//! matches on the code and builds the corresponding [`Value`], recursing into
//! arrays, maps, paths and entity properties. Schema codes inside nodes and
//! edges are resolved through a [`SchemaResolver`].
//!
//! Callers must have scanned the reply for error atoms before decoding.

use crate::error::{GraphError, Result};
use crate::model::{Edge, Node, Path, Point, Property, Value};
use crate::protocol::{RawReply, ValueType};
use crate::schema::{SchemaCategory, SchemaResolver};
use indexmap::IndexMap;

/// Stateless decoder bound to one graph's schema
pub struct ValueDecoder<'a> {
    schema: &'a dyn SchemaResolver,
}

impl<'a> ValueDecoder<'a> {
    pub fn new(schema: &'a dyn SchemaResolver) -> Self {
        Self { schema }
    }

    /// Decode a tagged value `[code, payload]`
    pub fn decode(&self, tagged: &RawReply) -> Result<Value> {
        let (code, payload) = split_tagged(tagged)?;
        self.decode_payload(ValueType::from_code(code), payload)
    }

    /// Decode a payload whose type is already known
    pub fn decode_payload(&self, value_type: ValueType, payload: &RawReply) -> Result<Value> {
        match value_type {
            ValueType::Null => Ok(Value::Null),
            ValueType::String => payload
                .as_text()
                .map(|s| Value::String(s.to_string()))
                .ok_or_else(|| unexpected("string", payload)),
            ValueType::Integer => payload
                .as_integer()
                .map(Value::Integer)
                .ok_or_else(|| unexpected("integer", payload)),
            ValueType::Boolean => match payload.as_text() {
                Some("true") => Ok(Value::Boolean(true)),
                Some("false") => Ok(Value::Boolean(false)),
                _ => Err(unexpected("boolean text", payload)),
            },
            ValueType::Double => payload
                .as_double()
                .map(Value::Double)
                .ok_or_else(|| unexpected("double", payload)),
            ValueType::Array => self.decode_array(payload).map(Value::List),
            ValueType::Node => self.decode_node(payload).map(Value::Node),
            ValueType::Edge => self.decode_edge(payload).map(Value::Edge),
            ValueType::Path => self.decode_path(payload).map(Value::Path),
            ValueType::Map => self.decode_map(payload).map(Value::Map),
            ValueType::Point => decode_point(payload).map(Value::Point),
            ValueType::Unknown => {
                log::trace!("Passing through payload of unknown value type");
                Ok(Value::Raw(payload.clone()))
            }
        }
    }

    fn decode_array(&self, payload: &RawReply) -> Result<Vec<Value>> {
        expect_array(payload, "array payload")?
            .iter()
            .map(|item| self.decode(item))
            .collect()
    }

    /// Decode an untagged node payload `[id, [labelIdx...], [property...]]`
    pub fn decode_node(&self, payload: &RawReply) -> Result<Node> {
        let parts = expect_len(payload, 3, "node")?;
        let id = expect_integer(&parts[0], "node id")?;

        let mut node = Node::new(id);
        for label in expect_array(&parts[1], "node labels")? {
            let index = expect_integer(label, "label index")?;
            node.add_label(self.schema.resolve(SchemaCategory::Labels, index)?);
        }
        for property in self.decode_properties(&parts[2])? {
            node.set_property(property);
        }
        Ok(node)
    }

    /// Decode an untagged edge payload
    /// `[id, typeIdx, sourceId, destinationId, [property...]]`
    pub fn decode_edge(&self, payload: &RawReply) -> Result<Edge> {
        let parts = expect_len(payload, 5, "edge")?;
        let id = expect_integer(&parts[0], "edge id")?;
        let type_index = expect_integer(&parts[1], "relationship type index")?;
        let relationship_type = self
            .schema
            .resolve(SchemaCategory::RelationshipTypes, type_index)?;
        let source = expect_integer(&parts[2], "edge source id")?;
        let destination = expect_integer(&parts[3], "edge destination id")?;

        let mut edge = Edge::new(id, relationship_type, source, destination);
        for property in self.decode_properties(&parts[4])? {
            edge.set_property(property);
        }
        Ok(edge)
    }

    /// Property entries come flat `[keyIdx, code, payload]` or nested
    /// `[keyIdx, [code, payload]]`
    fn decode_properties(&self, payload: &RawReply) -> Result<Vec<Property>> {
        expect_array(payload, "properties")?
            .iter()
            .map(|entry| {
                let parts = expect_array(entry, "property")?;
                let (key, value) = match parts {
                    [key, code, value] => {
                        let code = expect_integer(code, "property value type")?;
                        (key, self.decode_payload(ValueType::from_code(code), value)?)
                    }
                    [key, tagged] => (key, self.decode(tagged)?),
                    _ => {
                        return Err(GraphError::malformed(format!(
                            "property entry with {} elements",
                            parts.len()
                        )))
                    }
                };
                let key_index = expect_integer(key, "property key index")?;
                let name = self
                    .schema
                    .resolve(SchemaCategory::PropertyKeys, key_index)?;
                Ok(Property { name, value })
            })
            .collect()
    }

    /// Path payload `[taggedNodeArray, taggedEdgeArray]`. Node/edge adjacency
    /// is taken as given by the server.
    fn decode_path(&self, payload: &RawReply) -> Result<Path> {
        let parts = expect_len(payload, 2, "path")?;

        let nodes = match self.decode(&parts[0])? {
            Value::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Node(node) => Ok(node),
                    other => Err(GraphError::malformed(format!(
                        "path node slot holds {}",
                        other.type_name()
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(GraphError::malformed(format!(
                    "path nodes decoded to {}",
                    other.type_name()
                )))
            }
        };
        let edges = match self.decode(&parts[1])? {
            Value::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Edge(edge) => Ok(edge),
                    other => Err(GraphError::malformed(format!(
                        "path edge slot holds {}",
                        other.type_name()
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(GraphError::malformed(format!(
                    "path edges decoded to {}",
                    other.type_name()
                )))
            }
        };

        Path::new(nodes, edges).map_err(GraphError::MalformedReply)
    }

    /// Map payload `[key, taggedValue, key, taggedValue, ...]`. Keys keep
    /// wire order; a repeated key keeps its first position and the last value.
    fn decode_map(&self, payload: &RawReply) -> Result<IndexMap<String, Value>> {
        let items = expect_array(payload, "map payload")?;
        if items.len() % 2 != 0 {
            return Err(GraphError::malformed(format!(
                "map payload has odd length {}",
                items.len()
            )));
        }

        let mut map = IndexMap::with_capacity(items.len() / 2);
        for pair in items.chunks_exact(2) {
            let key = pair[0]
                .as_text()
                .ok_or_else(|| unexpected("map key string", &pair[0]))?;
            map.insert(key.to_string(), self.decode(&pair[1])?);
        }
        Ok(map)
    }
}

/// Point payload `[latitude, longitude]`, numbers or decimal text
fn decode_point(payload: &RawReply) -> Result<Point> {
    let parts = expect_len(payload, 2, "point")?;
    let latitude = parts[0]
        .as_double()
        .ok_or_else(|| unexpected("latitude", &parts[0]))?;
    let longitude = parts[1]
        .as_double()
        .ok_or_else(|| unexpected("longitude", &parts[1]))?;
    Ok(Point::new(latitude, longitude))
}

fn split_tagged(tagged: &RawReply) -> Result<(i64, &RawReply)> {
    let parts = expect_len(tagged, 2, "tagged value")?;
    let code = expect_integer(&parts[0], "value type code")?;
    Ok((code, &parts[1]))
}

fn expect_array<'r>(raw: &'r RawReply, what: &str) -> Result<&'r [RawReply]> {
    raw.as_array().ok_or_else(|| unexpected(what, raw))
}

fn expect_len<'r>(raw: &'r RawReply, len: usize, what: &str) -> Result<&'r [RawReply]> {
    let items = expect_array(raw, what)?;
    if items.len() != len {
        return Err(GraphError::malformed(format!(
            "{} must have {} elements, got {}",
            what,
            len,
            items.len()
        )));
    }
    Ok(items)
}

fn expect_integer(raw: &RawReply, what: &str) -> Result<i64> {
    match raw {
        RawReply::Integer(i) => Ok(*i),
        other => Err(unexpected(what, other)),
    }
}

fn unexpected(what: &str, found: &RawReply) -> GraphError {
    GraphError::malformed(format!("expected {}, found {}", what, found.kind_name()))
}
