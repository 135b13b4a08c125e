// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query statistics
//!
//! The statistics section is a list of `"Label: value"` lines, e.g.
//! `"Nodes created: 2"` or `"Query internal execution time: 0.43 milliseconds"`.

use crate::error::{GraphError, Result};
use crate::protocol::RawReply;
use std::collections::HashMap;

/// Known statistic labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    LabelsAdded,
    LabelsRemoved,
    IndicesAdded,
    IndicesCreated,
    IndicesDeleted,
    NodesCreated,
    NodesDeleted,
    PropertiesSet,
    PropertiesRemoved,
    RelationshipsCreated,
    RelationshipsDeleted,
    CachedExecution,
    QueryInternalExecutionTime,
}

impl Statistic {
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::LabelsAdded => "Labels added",
            Statistic::LabelsRemoved => "Labels removed",
            Statistic::IndicesAdded => "Indices added",
            Statistic::IndicesCreated => "Indices created",
            Statistic::IndicesDeleted => "Indices deleted",
            Statistic::NodesCreated => "Nodes created",
            Statistic::NodesDeleted => "Nodes deleted",
            Statistic::PropertiesSet => "Properties set",
            Statistic::PropertiesRemoved => "Properties removed",
            Statistic::RelationshipsCreated => "Relationships created",
            Statistic::RelationshipsDeleted => "Relationships deleted",
            Statistic::CachedExecution => "Cached execution",
            Statistic::QueryInternalExecutionTime => "Query internal execution time",
        }
    }
}

/// Raw statistic values keyed by label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    values: HashMap<String, String>,
}

impl Statistics {
    /// Parse the statistics section of a reply
    pub fn parse(raw: &RawReply) -> Result<Self> {
        let lines = raw
            .as_array()
            .ok_or_else(|| GraphError::malformed("statistics section is not an array"))?;

        let mut values = HashMap::new();
        for line in lines {
            let text = line.as_text().ok_or_else(|| {
                GraphError::malformed(format!(
                    "statistics line must be a string, found {}",
                    line.kind_name()
                ))
            })?;
            match text.split_once(':') {
                Some((label, value)) => {
                    values.insert(label.trim().to_string(), value.trim().to_string());
                }
                None => log::debug!("Ignoring statistics line without a label: {}", text),
            }
        }
        Ok(Self { values })
    }

    /// Raw text of a statistic, if the server reported it
    pub fn get(&self, statistic: Statistic) -> Option<&str> {
        self.get_by_label(statistic.label())
    }

    pub fn get_by_label(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    /// Integer value of a statistic; absent or non-numeric reads as 0
    pub fn get_int(&self, statistic: Statistic) -> i64 {
        self.get(statistic)
            .and_then(|v| v.split_whitespace().next())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn labels_added(&self) -> i64 {
        self.get_int(Statistic::LabelsAdded)
    }

    pub fn labels_removed(&self) -> i64 {
        self.get_int(Statistic::LabelsRemoved)
    }

    pub fn indices_added(&self) -> i64 {
        self.get_int(Statistic::IndicesAdded)
    }

    pub fn indices_created(&self) -> i64 {
        self.get_int(Statistic::IndicesCreated)
    }

    pub fn indices_deleted(&self) -> i64 {
        self.get_int(Statistic::IndicesDeleted)
    }

    pub fn nodes_created(&self) -> i64 {
        self.get_int(Statistic::NodesCreated)
    }

    pub fn nodes_deleted(&self) -> i64 {
        self.get_int(Statistic::NodesDeleted)
    }

    pub fn properties_set(&self) -> i64 {
        self.get_int(Statistic::PropertiesSet)
    }

    pub fn properties_removed(&self) -> i64 {
        self.get_int(Statistic::PropertiesRemoved)
    }

    pub fn relationships_created(&self) -> i64 {
        self.get_int(Statistic::RelationshipsCreated)
    }

    pub fn relationships_deleted(&self) -> i64 {
        self.get_int(Statistic::RelationshipsDeleted)
    }

    /// True only when the server reported "Cached execution: 1"
    pub fn cached_execution(&self) -> bool {
        self.get_int(Statistic::CachedExecution) == 1
    }

    /// Server-side execution time in milliseconds, 0.0 if absent
    pub fn query_internal_execution_time(&self) -> f64 {
        self.get(Statistic::QueryInternalExecutionTime)
            .and_then(|v| v.split_whitespace().next())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    }

    /// All reported statistics, sorted by label
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
