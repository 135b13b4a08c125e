// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "graphwire")]
#[command(version, about = "Decode compact graph query replies", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information
    Version,

    /// Decode a JSON-encoded compact reply
    Decode {
        /// File holding the reply as JSON (arrays, strings, numbers,
        /// null, and {"error": "..."} for error atoms)
        reply: PathBuf,

        /// Schema fixture with "labels", "property_keys" and
        /// "relationship_types" name lists
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Graph name used for schema lookups
        #[arg(short, long, default_value = "graph")]
        graph: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
