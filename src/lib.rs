// ABOUTME: Main library entry point for the Savora recipe client
// ABOUTME: Unidirectional state/update/view architecture over the MealDB provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

#![deny(unsafe_code)]

//! # Savora
//!
//! A recipe discovery client: it queries a TheMealDB-shaped public recipe
//! API, normalizes results into a uniform `Recipe` model, supports
//! filtering and sorting with reveal-window pagination, and persists a
//! favorites list to a local JSON file.
//!
//! ## Architecture
//!
//! State flows one way:
//!
//! ```text
//! action -> update(state) -> effects -> dispatcher -> completion action
//!                 |
//!                 v
//!          view(state) -> ViewTree -> renderer
//! ```
//!
//! - **state**: one [`state::AppState`] value owned by the [`app::App`]
//!   controller
//! - **update**: pure transition functions; all I/O is described as effects
//! - **dispatcher**: executes fetch effects against a
//!   [`savora_mealdb::RecipeSource`]
//! - **view**: read-only projection to a display-free render tree
//!
//! Fetches carry a generation tag, so a slow response that was superseded by
//! a newer action can never overwrite the current results.

/// Actions entering the update loop and effects leaving it
pub mod actions;

/// Controller owning the state value and running the action loop
pub mod app;

/// Environment-based configuration
pub mod config;

/// Fetch-effect execution against a recipe source
pub mod dispatcher;

/// JSON-file favorites persistence
pub mod favorites;

/// Logging initialization
pub mod logging;

/// Terminal projection of the view tree
pub mod render;

/// Application state value and session constants
pub mod state;

/// Pure state transition functions
pub mod update;

/// Declarative view projection
pub mod view;
