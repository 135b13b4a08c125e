// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for reply decoding and schema resolution

use crate::schema::SchemaCategory;
use thiserror::Error;

/// Errors raised while classifying, decoding or resolving a graph reply
#[derive(Error, Debug)]
pub enum GraphError {
    /// The server returned an error atom somewhere in the reply
    #[error("Server error: {0}")]
    Server(String),

    /// A schema code is still unknown after the cache was refreshed.
    /// Points at client/server version skew.
    #[error(
        "Protocol mismatch: {category} index {index} not found after refresh ({known} names known)"
    )]
    ProtocolMismatch {
        category: SchemaCategory,
        index: i64,
        known: usize,
    },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    /// A typed accessor was used on a value of another shape
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column index {index} out of range ({size} columns)")]
    ColumnOutOfRange { index: usize, size: usize },

    /// The command executor failed (transport error, timeout, ...)
    #[error("Execution error: {0}")]
    Execution(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Shorthand for [`GraphError::MalformedReply`]
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        GraphError::MalformedReply(message.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GraphError>;
