// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph module commands handed to the executor

use std::fmt;

/// Graph module command names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Query,
    ReadOnlyQuery,
    Delete,
    List,
    Explain,
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Query => "GRAPH.QUERY",
            CommandKind::ReadOnlyQuery => "GRAPH.RO_QUERY",
            CommandKind::Delete => "GRAPH.DELETE",
            CommandKind::List => "GRAPH.LIST",
            CommandKind::Explain => "GRAPH.EXPLAIN",
        }
    }

    /// Whether the command may be served by a replica
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            CommandKind::ReadOnlyQuery | CommandKind::List | CommandKind::Explain
        )
    }

    fn takes_reply_flags(&self) -> bool {
        matches!(self, CommandKind::Query | CommandKind::ReadOnlyQuery)
    }
}

/// A fully described graph command
///
/// The executor decides how to put it on the wire; [`GraphCommand::args`]
/// gives the conventional argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCommand {
    pub kind: CommandKind,
    pub graph: Option<String>,
    pub query: Option<String>,
    pub compact: bool,
    pub timeout_ms: Option<u64>,
}

impl GraphCommand {
    fn new(kind: CommandKind, graph: Option<String>, query: Option<String>) -> Self {
        Self {
            kind,
            graph,
            query,
            compact: true,
            timeout_ms: None,
        }
    }

    pub fn query(graph: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(CommandKind::Query, Some(graph.into()), Some(query.into()))
    }

    pub fn read_only_query(graph: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(
            CommandKind::ReadOnlyQuery,
            Some(graph.into()),
            Some(query.into()),
        )
    }

    pub fn delete(graph: impl Into<String>) -> Self {
        Self::new(CommandKind::Delete, Some(graph.into()), None)
    }

    pub fn list() -> Self {
        Self::new(CommandKind::List, None, None)
    }

    pub fn explain(graph: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(CommandKind::Explain, Some(graph.into()), Some(query.into()))
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.kind.is_read_only()
    }

    /// Argument vector, command name first
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.kind.name().to_string()];
        args.extend(self.graph.iter().cloned());
        args.extend(self.query.iter().cloned());

        if self.kind.takes_reply_flags() {
            if self.compact {
                args.push("--compact".to_string());
            }
            if let Some(timeout) = self.timeout_ms {
                args.push("TIMEOUT".to_string());
                args.push(timeout.to_string());
            }
        }
        args
    }
}

impl fmt::Display for GraphCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args().join(" "))
    }
}
