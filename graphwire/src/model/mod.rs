// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Decoded value and graph entity model

pub mod types;
pub mod value;

pub use types::{Edge, Node, Path, Point, Property, POINT_TOLERANCE};
pub use value::Value;
