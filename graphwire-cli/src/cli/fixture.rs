// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Offline executor backed by fixture files

use graphwire::{
    CommandExecutor, GraphCommand, GraphError, RawReply, Result, SchemaCategory, ValueType,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name lists a server would return from its schema procedures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaFixture {
    pub labels: Vec<String>,
    pub property_keys: Vec<String>,
    pub relationship_types: Vec<String>,
}

impl SchemaFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let text = read(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn names(&self, category: SchemaCategory) -> &[String] {
        match category {
            SchemaCategory::Labels => &self.labels,
            SchemaCategory::PropertyKeys => &self.property_keys,
            SchemaCategory::RelationshipTypes => &self.relationship_types,
        }
    }

    /// Procedure reply in the compact format: one tagged string per row
    fn procedure_reply(&self, category: SchemaCategory) -> RawReply {
        let rows = self
            .names(category)
            .iter()
            .map(|name| {
                RawReply::Array(vec![RawReply::Array(vec![
                    RawReply::Integer(ValueType::String.code()),
                    RawReply::bulk(name.as_str()),
                ])])
            })
            .collect();
        RawReply::Array(vec![
            RawReply::Array(vec![RawReply::Array(vec![
                RawReply::Integer(graphwire::ColumnKind::Scalar.code()),
                RawReply::bulk("name"),
            ])]),
            RawReply::Array(rows),
            RawReply::Array(vec![]),
        ])
    }
}

/// Replays one captured reply; schema procedures are answered from a
/// [`SchemaFixture`]
pub struct FixtureExecutor {
    reply: RawReply,
    schema: SchemaFixture,
}

impl FixtureExecutor {
    pub fn new(reply: RawReply, schema: SchemaFixture) -> Self {
        Self { reply, schema }
    }

    pub fn load(path: &Path, schema: SchemaFixture) -> Result<Self> {
        let reply = RawReply::from_json_str(&read(path)?)?;
        Ok(Self::new(reply, schema))
    }
}

impl CommandExecutor for FixtureExecutor {
    fn execute(&self, command: &GraphCommand) -> Result<RawReply> {
        let procedure = SchemaCategory::ALL.iter().copied().find(|category| {
            command.query.as_deref() == Some(format!("CALL {}", category.procedure()).as_str())
        });
        match procedure {
            Some(category) => {
                log::debug!("Answering {} from schema fixture", category.procedure());
                Ok(self.schema.procedure_reply(category))
            }
            None => Ok(self.reply.clone()),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| GraphError::Execution(format!("cannot read {}: {}", path.display(), e)))
}
