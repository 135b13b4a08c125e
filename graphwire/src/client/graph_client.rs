// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client context: commands in, decoded result sets out
//!
//! A `GraphClient` owns the schema caches of every graph it talks to. Two
//! clients never share caches, even when they point at the same server.

use crate::client::command::GraphCommand;
use crate::client::executor::CommandExecutor;
use crate::client::params::{prepare_query, to_literal};
use crate::config::ClientConfig;
use crate::error::{GraphError, Result};
use crate::model::Value;
use crate::protocol::RawReply;
use crate::result::ResultSet;
use crate::schema::registry::{GraphSchema, SchemaRegistry};
use std::sync::Arc;

/// Entry point for running graph queries
///
/// # Examples
///
/// ```no_run
/// # use std::sync::Arc;
/// # use graphwire::{GraphClient, CommandExecutor};
/// # fn run(executor: Arc<dyn CommandExecutor>) -> graphwire::Result<()> {
/// let client = GraphClient::new(executor);
/// let result = client.query("social", "MATCH (p:person) RETURN p.name")?;
/// for record in &result {
///     println!("{}", record?.get_str("p.name")?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GraphClient {
    executor: Arc<dyn CommandExecutor>,
    config: ClientConfig,
    schemas: SchemaRegistry,
}

impl GraphClient {
    /// Create a client with the default configuration
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self::with_config(executor, ClientConfig::default())
    }

    pub fn with_config(executor: Arc<dyn CommandExecutor>, config: ClientConfig) -> Self {
        let schemas = SchemaRegistry::new(executor.clone(), config.schema_refresh);
        Self {
            executor,
            config,
            schemas,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Schema caches of every graph queried so far
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Schema caches of `graph`, created empty if the graph is new
    pub fn schema(&self, graph: &str) -> Arc<GraphSchema> {
        self.schemas.get_or_create(graph)
    }

    /// Run a query through `GRAPH.QUERY`
    pub fn query(&self, graph: &str, query: &str) -> Result<ResultSet> {
        self.run(graph, GraphCommand::query(graph, query))
    }

    /// Run a query with `CYPHER name=value` parameters
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use graphwire::{GraphClient, Value};
    /// # fn run(client: &GraphClient) -> graphwire::Result<()> {
    /// let result = client.query_with_params(
    ///     "social",
    ///     "MATCH (p:person {name: $name}) RETURN p",
    ///     &[("name", Value::from("alice"))],
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn query_with_params(
        &self,
        graph: &str,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<ResultSet> {
        let query = prepare_query(query, params)?;
        self.query(graph, &query)
    }

    /// Run a query through `GRAPH.RO_QUERY`
    pub fn read_only_query(&self, graph: &str, query: &str) -> Result<ResultSet> {
        self.run(graph, GraphCommand::read_only_query(graph, query))
    }

    pub fn read_only_query_with_params(
        &self,
        graph: &str,
        query: &str,
        params: &[(&str, Value)],
    ) -> Result<ResultSet> {
        let query = prepare_query(query, params)?;
        self.read_only_query(graph, &query)
    }

    /// Call a procedure with string arguments, e.g.
    /// `CALL db.idx.fulltext.queryNodes("person", "alice")`
    pub fn call_procedure(&self, graph: &str, procedure: &str, args: &[&str]) -> Result<ResultSet> {
        let args = args
            .iter()
            .map(|arg| to_literal(&Value::from(*arg)))
            .collect::<Result<Vec<_>>>()?;
        self.query(graph, &format!("CALL {}({})", procedure, args.join(",")))
    }

    /// Delete `graph` on the server and drop its schema caches
    pub fn delete(&self, graph: &str) -> Result<String> {
        let reply = self.executor.execute(&GraphCommand::delete(graph))?;
        reply.check_errors()?;
        self.schemas.discard(graph);
        log::debug!("Deleted graph '{}'", graph);
        Ok(reply.as_text().unwrap_or_default().to_string())
    }

    /// Names of all graphs on the server
    pub fn list(&self) -> Result<Vec<String>> {
        let reply = self.executor.execute(&GraphCommand::list())?;
        text_lines(&reply)
    }

    /// Execution plan of a query, one operation per line
    pub fn explain(&self, graph: &str, query: &str) -> Result<Vec<String>> {
        let reply = self.executor.execute(&GraphCommand::explain(graph, query))?;
        text_lines(&reply)
    }

    fn run(&self, graph: &str, command: GraphCommand) -> Result<ResultSet> {
        let command = command
            .with_compact(self.config.compact)
            .with_timeout_ms(self.config.timeout_ms);
        log::debug!("Executing {} on graph '{}'", command.kind.name(), graph);

        let reply = self.executor.execute(&command)?;
        ResultSet::from_reply(reply, self.schema(graph))
    }
}

fn text_lines(reply: &RawReply) -> Result<Vec<String>> {
    reply.check_errors()?;
    let items = reply.as_array().ok_or_else(|| {
        GraphError::malformed(format!("expected an array of strings, found {}", reply.kind_name()))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_text().map(str::to_string).ok_or_else(|| {
                GraphError::malformed(format!("expected a string, found {}", item.kind_name()))
            })
        })
        .collect()
}
