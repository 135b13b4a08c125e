// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client side: command assembly, the executor seam and the client context

pub mod command;
pub mod executor;
pub mod graph_client;
pub mod params;

pub use command::{CommandKind, GraphCommand};
pub use executor::CommandExecutor;
pub use graph_client::GraphClient;
pub use params::{prepare_query, to_literal};
