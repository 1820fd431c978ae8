// ABOUTME: TheMealDB provider crate for the Savora recipe client
// ABOUTME: Wire types, response normalization, and the RecipeSource trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

#![deny(unsafe_code)]

//! # Savora MealDB Provider
//!
//! Client for the four read-only TheMealDB endpoints the application
//! consumes: search-by-name, fetch-random, filter-by-origin, and
//! lookup-by-identifier. All raw field names live in [`wire`]; everything
//! leaving this crate is the normalized [`savora_core::models::Recipe`].
//!
//! Fan-out (the random batch and filtered-listing detail hydration) joins
//! all-or-nothing: a single failed request fails the whole batch.

/// Wire record → `Recipe` normalization rules
pub mod normalize;

/// `RecipeSource` trait and the `MealDbProvider` implementation
pub mod provider;

/// Raw response shapes as the API serves them
pub mod wire;

pub use provider::{MealDbConfig, MealDbProvider, RecipeSource};
