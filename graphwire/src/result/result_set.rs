// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result set: classification of a raw reply and lazy row decoding
//!
//! Three reply shapes are recognised:
//! - an error atom: the query failed, no result set is built
//! - `[header, rows, statistics]`: a query returning rows
//! - `[statistics]`: a write-only or administrative command
//!
//! Error atoms nested anywhere in the reply are found before anything is
//! parsed. Rows stay raw until they are iterated, and iteration can be
//! repeated.

use crate::decode::ValueDecoder;
use crate::error::{GraphError, Result};
use crate::model::Value;
use crate::protocol::{ColumnKind, RawReply};
use crate::result::header::Header;
use crate::result::record::Record;
use crate::result::statistics::Statistics;
use crate::schema::SchemaResolver;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Decoded view over one query reply
pub struct ResultSet {
    header: Option<Header>,
    statistics: Statistics,
    rows: Vec<RawReply>,
    schema: Arc<dyn SchemaResolver + Send + Sync>,
}

impl ResultSet {
    /// Classify `reply` and prepare it for decoding against `schema`
    pub fn from_reply(
        reply: RawReply,
        schema: Arc<dyn SchemaResolver + Send + Sync>,
    ) -> Result<Self> {
        reply.check_errors()?;

        let parts = match reply {
            RawReply::Array(parts) => parts,
            other => {
                return Err(GraphError::malformed(format!(
                    "reply must be an array, found {}",
                    other.kind_name()
                )))
            }
        };

        match <[RawReply; 3]>::try_from(parts) {
            Ok([header, rows, statistics]) => {
                let header = Header::parse(&header)?;
                let rows = match rows {
                    RawReply::Array(rows) => rows,
                    other => {
                        return Err(GraphError::malformed(format!(
                            "rows section must be an array, found {}",
                            other.kind_name()
                        )))
                    }
                };
                for (i, row) in rows.iter().enumerate() {
                    let cells = row.as_array().map(<[RawReply]>::len);
                    if cells != Some(header.len()) {
                        return Err(GraphError::malformed(format!(
                            "row {} must hold {} cells",
                            i,
                            header.len()
                        )));
                    }
                }
                let statistics = Statistics::parse(&statistics)?;
                log::debug!(
                    "Result set with {} columns and {} rows",
                    header.len(),
                    rows.len()
                );
                Ok(Self {
                    header: Some(header),
                    statistics,
                    rows,
                    schema,
                })
            }
            Err(parts) if parts.len() == 1 => {
                let statistics = Statistics::parse(&parts[0])?;
                log::debug!("Statistics-only result set");
                Ok(Self {
                    header: None,
                    statistics,
                    rows: Vec::new(),
                    schema,
                })
            }
            Err(parts) => Err(GraphError::malformed(format!(
                "reply array with {} elements is neither a result set nor statistics",
                parts.len()
            ))),
        }
    }

    /// Column descriptors; `None` for statistics-only replies
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lazily decoding iterator over the rows
    pub fn records(&self) -> Records<'_> {
        Records {
            result_set: self,
            next: 0,
        }
    }

    /// Decode a single row
    pub fn record(&self, index: usize) -> Option<Result<Record>> {
        self.rows.get(index).map(|row| self.decode_row(row))
    }

    /// Decode every row, failing as a whole if any row fails
    pub fn to_records(&self) -> Result<Vec<Record>> {
        self.records().collect()
    }

    fn decode_row(&self, row: &RawReply) -> Result<Record> {
        // Rows only exist when a header was parsed, and their arity was
        // checked against it at construction
        let header = self
            .header
            .as_ref()
            .ok_or_else(|| GraphError::malformed("row without header"))?;
        let cells = row
            .as_array()
            .ok_or_else(|| GraphError::malformed("row is not an array"))?;
        let decoder = ValueDecoder::new(&*self.schema);

        let values = header
            .column_kinds()
            .iter()
            .zip(cells)
            .map(|(kind, cell)| match kind {
                ColumnKind::Node => decoder.decode_node(cell).map(Value::Node),
                ColumnKind::Relation => decoder.decode_edge(cell).map(Value::Edge),
                ColumnKind::Scalar => decoder.decode(cell),
                ColumnKind::Unknown => Ok(Value::Null),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Record::new(header.shared_names(), values))
    }
}

impl fmt::Debug for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSet")
            .field("header", &self.header)
            .field("statistics", &self.statistics)
            .field("rows", &self.rows.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = Result<Record>;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator decoding one row per step
pub struct Records<'a> {
    result_set: &'a ResultSet,
    next: usize,
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.result_set.rows.get(self.next)?;
        self.next += 1;
        Some(self.result_set.decode_row(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result_set.rows.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}
