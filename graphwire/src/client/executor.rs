// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Seam to the transport layer
//!
//! Connections, retries and timeouts belong to whoever implements
//! `CommandExecutor`. This crate only hands it commands and decodes what
//! comes back.

use crate::client::command::GraphCommand;
use crate::error::Result;
use crate::protocol::RawReply;

/// Runs graph commands against a server
///
/// Failures of the transport itself (I/O, timeouts) should be reported as
/// [`crate::GraphError::Execution`]. Error replies from the server may be
/// returned either as `Err(GraphError::Server)` or as an `Ok` reply holding
/// an error atom; the decoder handles both.
pub trait CommandExecutor: Send + Sync {
    /// Execute a command and return its raw reply
    fn execute(&self, command: &GraphCommand) -> Result<RawReply>;

    /// Call a procedure on a graph through the regular query path
    fn execute_procedure(&self, graph: &str, procedure: &str) -> Result<RawReply> {
        self.execute(&GraphCommand::query(graph, format!("CALL {}", procedure)))
    }

    /// Call a procedure through the read-only path, which may be served by a
    /// replica
    fn execute_procedure_read_only(&self, graph: &str, procedure: &str) -> Result<RawReply> {
        self.execute(&GraphCommand::read_only_query(
            graph,
            format!("CALL {}", procedure),
        ))
    }
}
