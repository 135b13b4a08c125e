// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Decoding of compact tagged values

pub mod value_decoder;

pub use value_decoder::ValueDecoder;
