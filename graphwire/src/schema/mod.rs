// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Per-graph schema caches
//!
//! Compact replies carry labels, property keys and relationship types as
//! small integer codes. This module resolves those codes to names:
//! - `SchemaCache`: one category of one graph, refreshed lazily
//! - `GraphSchema`: the three caches of one graph plus the executor that
//!   refreshes them
//! - `SchemaRegistry`: graph name -> `GraphSchema`, owned by a client

pub mod cache;
pub mod registry;

pub use cache::SchemaCache;
pub use registry::{GraphSchema, SchemaRegistry};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of name a schema code refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaCategory {
    Labels,
    PropertyKeys,
    RelationshipTypes,
}

impl SchemaCategory {
    pub const ALL: [SchemaCategory; 3] = [
        SchemaCategory::Labels,
        SchemaCategory::PropertyKeys,
        SchemaCategory::RelationshipTypes,
    ];

    /// Procedure returning the full name list of this category
    pub fn procedure(&self) -> &'static str {
        match self {
            SchemaCategory::Labels => "db.labels()",
            SchemaCategory::PropertyKeys => "db.propertyKeys()",
            SchemaCategory::RelationshipTypes => "db.relationshipTypes()",
        }
    }
}

impl fmt::Display for SchemaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaCategory::Labels => "label",
            SchemaCategory::PropertyKeys => "property key",
            SchemaCategory::RelationshipTypes => "relationship type",
        };
        write!(f, "{}", name)
    }
}

/// Resolves schema codes to names while decoding
pub trait SchemaResolver {
    fn resolve(&self, category: SchemaCategory, index: i64) -> Result<String>;
}
