// ABOUTME: Core data models for the Savora recipe client
// ABOUTME: Re-exports Recipe, Ingredient, Difficulty, filter and sort state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

//! # Data Models
//!
//! Core data structures shared across the workspace.
//!
//! ## Design Principles
//!
//! - **API Agnostic**: `Recipe` abstracts away the wire shape of the external
//!   recipe API; only the provider crate knows raw field names
//! - **Serializable**: all models support JSON serialization for the
//!   favorites file
//! - **Derived, not stored**: preparation time, difficulty, and the one-line
//!   description are deterministic functions of the raw record, computed at
//!   normalization time

mod filters;
mod recipe;

pub use filters::{FilterState, SortKey, ViewKind};
pub use recipe::{
    estimate_difficulty, estimate_time_minutes, short_description, Difficulty, FavoriteEntry,
    Ingredient, Recipe,
};
