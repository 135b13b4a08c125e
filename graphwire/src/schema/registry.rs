// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema caches of every graph a client has queried

use crate::client::executor::CommandExecutor;
use crate::config::RefreshRoute;
use crate::error::Result;
use crate::schema::cache::SchemaCache;
use crate::schema::{SchemaCategory, SchemaResolver};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The three schema caches of one graph
pub struct GraphSchema {
    graph: String,
    labels: SchemaCache,
    property_keys: SchemaCache,
    relationship_types: SchemaCache,
    executor: Arc<dyn CommandExecutor>,
    route: RefreshRoute,
}

impl GraphSchema {
    pub fn new(
        graph: impl Into<String>,
        executor: Arc<dyn CommandExecutor>,
        route: RefreshRoute,
    ) -> Self {
        let graph = graph.into();
        Self {
            labels: SchemaCache::new(graph.clone(), SchemaCategory::Labels),
            property_keys: SchemaCache::new(graph.clone(), SchemaCategory::PropertyKeys),
            relationship_types: SchemaCache::new(graph.clone(), SchemaCategory::RelationshipTypes),
            graph,
            executor,
            route,
        }
    }

    pub fn graph(&self) -> &str {
        &self.graph
    }

    pub fn route(&self) -> RefreshRoute {
        self.route
    }

    pub fn cache(&self, category: SchemaCategory) -> &SchemaCache {
        match category {
            SchemaCategory::Labels => &self.labels,
            SchemaCategory::PropertyKeys => &self.property_keys,
            SchemaCategory::RelationshipTypes => &self.relationship_types,
        }
    }

    pub fn label(&self, index: i64) -> Result<String> {
        self.resolve(SchemaCategory::Labels, index)
    }

    pub fn property_key(&self, index: i64) -> Result<String> {
        self.resolve(SchemaCategory::PropertyKeys, index)
    }

    pub fn relationship_type(&self, index: i64) -> Result<String> {
        self.resolve(SchemaCategory::RelationshipTypes, index)
    }
}

impl SchemaResolver for GraphSchema {
    fn resolve(&self, category: SchemaCategory, index: i64) -> Result<String> {
        let executor = &self.executor;
        let route = self.route;
        self.cache(category)
            .name(index, |graph, procedure| match route {
                RefreshRoute::Primary => executor.execute_procedure(graph, procedure),
                RefreshRoute::Replica => executor.execute_procedure_read_only(graph, procedure),
            })
    }
}

impl fmt::Debug for GraphSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSchema")
            .field("graph", &self.graph)
            .field("labels", &self.labels.len())
            .field("property_keys", &self.property_keys.len())
            .field("relationship_types", &self.relationship_types.len())
            .field("route", &self.route)
            .finish()
    }
}

/// Graph name -> schema caches, scoped to one client
pub struct SchemaRegistry {
    executor: Arc<dyn CommandExecutor>,
    route: RefreshRoute,
    graphs: RwLock<HashMap<String, Arc<GraphSchema>>>,
}

impl SchemaRegistry {
    pub fn new(executor: Arc<dyn CommandExecutor>, route: RefreshRoute) -> Self {
        Self {
            executor,
            route,
            graphs: RwLock::new(HashMap::new()),
        }
    }

    /// Schema of `graph`, created empty on first use
    pub fn get_or_create(&self, graph: &str) -> Arc<GraphSchema> {
        if let Some(schema) = self.graphs.read().get(graph) {
            return schema.clone();
        }

        self.graphs
            .write()
            .entry(graph.to_string())
            .or_insert_with(|| {
                log::debug!("Creating schema cache for graph '{}'", graph);
                Arc::new(GraphSchema::new(graph, self.executor.clone(), self.route))
            })
            .clone()
    }

    pub fn get(&self, graph: &str) -> Option<Arc<GraphSchema>> {
        self.graphs.read().get(graph).cloned()
    }

    /// Drop the caches of `graph`. Result sets already holding the old schema
    /// keep it alive until they are dropped.
    pub fn discard(&self, graph: &str) -> bool {
        let removed = self.graphs.write().remove(graph).is_some();
        if removed {
            log::debug!("Discarded schema cache for graph '{}'", graph);
        }
        removed
    }

    pub fn graph_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.graphs.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.graphs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.read().is_empty()
    }
}
