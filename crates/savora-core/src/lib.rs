// ABOUTME: Core types and derivation rules for the Savora recipe client
// ABOUTME: Foundation crate with recipe models, filter state, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

#![deny(unsafe_code)]

//! # Savora Core
//!
//! Foundation crate providing the shared domain types for the Savora recipe
//! client. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: `Recipe`, `Ingredient`, `Difficulty`, filter and sort state
//! - **nutrition**: clearly-labeled placeholder nutrition generator
//! - **errors**: structured error types for providers and the favorites store

/// Structured error types for providers and local persistence
pub mod errors;

/// Core data models (`Recipe`, `Ingredient`, `FilterState`, `SortKey`, etc.)
pub mod models;

/// Placeholder nutrition and display-value generator
pub mod nutrition;
