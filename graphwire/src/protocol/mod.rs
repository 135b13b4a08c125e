// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Wire-level pieces of the compact reply format

pub mod codes;
pub mod reply;

pub use codes::{ColumnKind, ValueType};
pub use reply::RawReply;
