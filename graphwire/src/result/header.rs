// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Column descriptors of a result set

use crate::error::{GraphError, Result};
use crate::protocol::{ColumnKind, RawReply};
use std::sync::Arc;

/// Parallel column kinds and names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    column_kinds: Vec<ColumnKind>,
    /// Shared with every record built from this header
    column_names: Arc<[String]>,
}

impl Header {
    /// Parse the descriptor section `[[kindCode, name], ...]`
    pub fn parse(raw: &RawReply) -> Result<Self> {
        let descriptors = raw
            .as_array()
            .ok_or_else(|| GraphError::malformed("header is not an array"))?;

        let mut column_kinds = Vec::with_capacity(descriptors.len());
        let mut column_names = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match descriptor.as_array() {
                Some([RawReply::Integer(code), RawReply::Bulk(name)]) => {
                    column_kinds.push(ColumnKind::from_code(*code));
                    column_names.push(name.clone());
                }
                _ => {
                    return Err(GraphError::malformed(format!(
                        "column descriptor must be [kind, name], found {}",
                        descriptor.kind_name()
                    )))
                }
            }
        }

        Ok(Self {
            column_kinds,
            column_names: column_names.into(),
        })
    }

    /// Build a header from (kind, name) pairs
    pub fn from_columns(columns: Vec<(ColumnKind, String)>) -> Self {
        let (column_kinds, column_names): (Vec<_>, Vec<_>) = columns.into_iter().unzip();
        Self {
            column_kinds,
            column_names: column_names.into(),
        }
    }

    pub fn column_kinds(&self) -> &[ColumnKind] {
        &self.column_kinds
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub(crate) fn shared_names(&self) -> Arc<[String]> {
        self.column_names.clone()
    }

    /// Position of the first column called `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.column_kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(code: i64, name: &str) -> RawReply {
        RawReply::Array(vec![RawReply::Integer(code), RawReply::bulk(name)])
    }

    #[test]
    fn test_parse_header() {
        let raw = RawReply::Array(vec![descriptor(1, "n.name"), descriptor(2, "n"), descriptor(3, "r")]);
        let header = Header::parse(&raw).unwrap();
        assert_eq!(
            header.column_kinds(),
            &[ColumnKind::Scalar, ColumnKind::Node, ColumnKind::Relation]
        );
        assert_eq!(header.column_names(), &["n.name", "n", "r"]);
        assert_eq!(header.column_index("r"), Some(2));
        assert_eq!(header.column_index("missing"), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = Header::parse(&RawReply::Array(vec![descriptor(1, "x")])).unwrap();
        let b = Header::from_columns(vec![(ColumnKind::Scalar, "x".to_string())]);
        assert_eq!(a, b);
        let c = Header::from_columns(vec![(ColumnKind::Node, "x".to_string())]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rejects_bad_descriptor() {
        let raw = RawReply::Array(vec![RawReply::Array(vec![RawReply::bulk("x")])]);
        assert!(matches!(Header::parse(&raw), Err(GraphError::MalformedReply(_))));
    }
}
