// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! graphwire - decoder for compact graph query replies
//!
//! Graph servers speaking the compact reply format send labels, property
//! keys and relationship types as integer codes, and every scalar as a
//! `[typeCode, payload]` pair. This crate turns such replies into typed
//! values and keeps a per-graph cache of the code -> name tables, refreshing
//! it from the server when an unknown code shows up.
//!
//! # Features
//!
//! - **Result sets**: header, lazily decoded records and statistics
//! - **Graph entities**: nodes, edges, paths and points with structural equality
//! - **Schema caches**: lock-free reads, one refresh per miss under contention
//! - **Transport agnostic**: commands are handed to a [`CommandExecutor`]
//!
//! # Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use graphwire::{GraphClient, CommandExecutor};
//! # fn run(executor: Arc<dyn CommandExecutor>) -> graphwire::Result<()> {
//! let client = GraphClient::new(executor);
//! let result = client.query("social", "MATCH (a)-[r]->(b) RETURN a, r, b")?;
//! for record in result.to_records()? {
//!     let a = record.get_node("a")?;
//!     println!("{} has {} properties", a, a.property_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod protocol;
pub mod result;
pub mod schema;

pub use client::{CommandExecutor, CommandKind, GraphClient, GraphCommand};
pub use config::{ClientConfig, RefreshRoute};
pub use decode::ValueDecoder;
pub use error::{GraphError, Result};
pub use model::{Edge, Node, Path, Point, Property, Value};
pub use protocol::{ColumnKind, RawReply, ValueType};
pub use result::{ColumnRef, Header, Record, Records, ResultSet, Statistic, Statistics};
pub use schema::{GraphSchema, SchemaCache, SchemaCategory, SchemaRegistry, SchemaResolver};

/// graphwire version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// graphwire crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
