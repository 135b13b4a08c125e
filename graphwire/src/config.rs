// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Execution path used to refresh schema caches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RefreshRoute {
    /// Regular query path
    #[default]
    Primary,
    /// Read-only query path, which the executor may route to a replica
    Replica,
}

/// Global client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server-side query timeout in milliseconds, sent with every query
    pub timeout_ms: Option<u64>,

    /// Path used for schema refreshes
    pub schema_refresh: RefreshRoute,

    /// Request the compact reply encoding. The decoder only understands
    /// compact replies; turning this off is for executors that translate
    /// verbose replies themselves.
    pub compact: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            schema_refresh: RefreshRoute::Primary,
            compact: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from JSON text; missing fields take their defaults
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_schema_refresh(mut self, route: RefreshRoute) -> Self {
        self.schema_refresh = route;
        self
    }
}
