// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for graphwire
//!
//! Decodes a captured compact reply offline, resolving schema codes from a
//! fixture file instead of a live server.

pub mod commands;
pub mod fixture;
pub mod output;

pub use commands::{Cli, Commands};

use colored::Colorize;
use commands::OutputFormat;
use fixture::{FixtureExecutor, SchemaFixture};
use graphwire::GraphClient;
use output::ResultFormatter;
use std::path::PathBuf;
use std::sync::Arc;

/// Decode `reply_path` against the schema in `schema_path` and print it
pub fn handle_decode(
    reply_path: PathBuf,
    schema_path: Option<PathBuf>,
    graph: String,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = match schema_path {
        Some(path) => SchemaFixture::load(&path)?,
        None => SchemaFixture::default(),
    };
    let executor = FixtureExecutor::load(&reply_path, schema)?;
    let client = GraphClient::new(Arc::new(executor));

    match client.query(&graph, &format!("-- replay {}", reply_path.display())) {
        Ok(result) => {
            print!("{}", ResultFormatter::format(&result, format)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".bold().red(), e);
            Err(e.into())
        }
    }
}
