// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query results: header, statistics, records and the result set root

pub mod header;
pub mod record;
pub mod result_set;
pub mod statistics;

pub use header::Header;
pub use record::{ColumnRef, Record};
pub use result_set::{Records, ResultSet};
pub use statistics::{Statistic, Statistics};
