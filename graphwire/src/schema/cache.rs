// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Lazily refreshed name list for one schema category of one graph
//!
//! Readers load the current snapshot `Arc` atomically and index into it; they
//! never take a lock and never wait on a refresh. A miss takes the category's refresh mutex, re-checks the
//! (possibly already replaced) snapshot and only then asks the server for the
//! full list. The new list is published by swapping the `Arc`, so a reader
//! holding an older snapshot keeps a complete, if stale, list.

use crate::error::{GraphError, Result};
use crate::protocol::RawReply;
use crate::schema::SchemaCategory;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Name cache for one category of one graph
#[derive(Debug)]
pub struct SchemaCache {
    graph: String,
    category: SchemaCategory,
    /// Current snapshot; only ever replaced, never mutated
    names: ArcSwap<Vec<String>>,
    /// Serialises refreshes of this category
    refresh_lock: Mutex<()>,
    refreshes: AtomicU64,
}

impl SchemaCache {
    pub fn new(graph: impl Into<String>, category: SchemaCategory) -> Self {
        Self {
            graph: graph.into(),
            category,
            names: ArcSwap::from_pointee(Vec::new()),
            refresh_lock: Mutex::new(()),
            refreshes: AtomicU64::new(0),
        }
    }

    pub fn graph(&self) -> &str {
        &self.graph
    }

    pub fn category(&self) -> SchemaCategory {
        self.category
    }

    /// Current snapshot of known names
    pub fn snapshot(&self) -> Arc<Vec<String>> {
        self.names.load_full()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of refreshes issued so far
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }

    /// Resolve `index` to a name, refreshing through `fetch` on a miss
    ///
    /// `fetch` receives the graph name and the category's procedure and must
    /// return the procedure's raw reply.
    pub fn name<F>(&self, index: i64, fetch: F) -> Result<String>
    where
        F: FnOnce(&str, &str) -> Result<RawReply>,
    {
        let position = usize::try_from(index).map_err(|_| {
            GraphError::malformed(format!("negative {} index {}", self.category, index))
        })?;

        if let Some(name) = self.snapshot().get(position) {
            return Ok(name.clone());
        }

        let _guard = self.refresh_lock.lock();

        // Another caller may have refreshed while we waited
        if let Some(name) = self.snapshot().get(position) {
            return Ok(name.clone());
        }

        log::debug!(
            "Refreshing {} cache of graph '{}' for index {}",
            self.category,
            self.graph,
            index
        );
        let reply = fetch(&self.graph, self.category.procedure())?;
        let fetched = names_from_reply(&reply)?;
        self.refreshes.fetch_add(1, Ordering::Relaxed);

        let merged = Arc::new(self.merge(fetched));
        self.names.store(merged.clone());

        match merged.get(position) {
            Some(name) => Ok(name.clone()),
            None => {
                log::warn!(
                    "{} index {} of graph '{}' unknown after refresh ({} names)",
                    self.category,
                    index,
                    self.graph,
                    merged.len()
                );
                Err(GraphError::ProtocolMismatch {
                    category: self.category,
                    index,
                    known: merged.len(),
                })
            }
        }
    }

    /// Build the next snapshot. Names already handed out keep their index;
    /// only the tail of the fetched list is appended.
    fn merge(&self, fetched: Vec<String>) -> Vec<String> {
        let current = self.snapshot();
        let mut next: Vec<String> = current.as_ref().clone();
        for (i, (known, incoming)) in current.iter().zip(fetched.iter()).enumerate() {
            if known != incoming {
                log::warn!(
                    "{} {} of graph '{}' changed on the server ('{}' -> '{}'), keeping cached name",
                    self.category,
                    i,
                    self.graph,
                    known,
                    incoming
                );
            }
        }
        next.extend(fetched.into_iter().skip(current.len()));
        next
    }
}

/// Extract the names from a schema procedure reply
///
/// The reply is a regular compact result set; each row's first cell is the
/// name, either as a tagged string `[2, "name"]` or as a bare string.
pub fn names_from_reply(reply: &RawReply) -> Result<Vec<String>> {
    reply.check_errors()?;

    let parts = reply
        .as_array()
        .filter(|parts| parts.len() == 3)
        .ok_or_else(|| GraphError::malformed("schema procedure reply is not a result set"))?;
    let rows = parts[1]
        .as_array()
        .ok_or_else(|| GraphError::malformed("schema procedure rows are not an array"))?;

    rows.iter()
        .map(|row| {
            let cell = row
                .as_array()
                .and_then(|cells| cells.first())
                .ok_or_else(|| GraphError::malformed("empty schema procedure row"))?;
            match cell {
                RawReply::Bulk(name) => Ok(name.clone()),
                RawReply::Array(tagged) if tagged.len() == 2 => tagged[1]
                    .as_text()
                    .map(str::to_string)
                    .ok_or_else(|| GraphError::malformed("schema name is not a string")),
                other => Err(GraphError::malformed(format!(
                    "unexpected schema name cell of type {}",
                    other.kind_name()
                ))),
            }
        })
        .collect()
}
