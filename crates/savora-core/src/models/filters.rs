// ABOUTME: Filter, sort, and view-selection state shared by update logic and CLI
// ABOUTME: FilterState chips (single-select groups), SortKey, ViewKind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use serde::{Deserialize, Serialize};

/// Which top-level view is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Search/browse view with the query results
    #[default]
    Search,
    /// Locally persisted favorites view
    Favorites,
}

impl ViewKind {
    /// Parse a view name, falling back to the search view.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "favorites" | "favourites" => Self::Favorites,
            _ => Self::Search,
        }
    }
}

/// Sort order applied to the current result list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep the order results arrived in
    #[default]
    Relevance,
    /// Ascending by estimated preparation time
    Time,
    /// Ascending by placeholder calorie value
    Calories,
    /// No rating data exists; this shuffles as a placeholder
    Rating,
}

impl SortKey {
    /// Parse a sort key name; `None` for anything unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relevance" => Some(Self::Relevance),
            "time" => Some(Self::Time),
            "calories" => Some(Self::Calories),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Active filters. Each field is independently nullable; `diet` and
/// `cuisine` behave as single-select chip groups (setting a value replaces
/// any previous one, setting the same value again clears it).
///
/// Only `cuisine` affects what is fetched. `diet`, `time`, `meal`, and
/// `difficulty` are recorded but currently have no effect on the query or
/// the displayed list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Diet chip (e.g. "vegetarian"); recorded, not applied
    pub diet: Option<String>,
    /// Cuisine/origin chip (e.g. "Italian"); drives the filtered fetch
    pub cuisine: Option<String>,
    /// Advanced filter: max preparation time; recorded, not applied
    pub time: Option<String>,
    /// Advanced filter: meal type; recorded, not applied
    pub meal: Option<String>,
    /// Advanced filter: difficulty; recorded, not applied
    pub difficulty: Option<String>,
}

impl FilterState {
    /// True when no filter of any kind is set.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.diet.is_none()
            && self.cuisine.is_none()
            && self.time.is_none()
            && self.meal.is_none()
            && self.difficulty.is_none()
    }

    /// Toggle a chip value within a single-select group, returning the new
    /// active value for that group.
    ///
    /// Selecting the currently active value clears it; selecting a different
    /// value replaces it (deactivating the sibling chip).
    pub fn toggle_chip(slot: &mut Option<String>, value: &str) -> Option<String> {
        if slot.as_deref() == Some(value) {
            *slot = None;
        } else {
            *slot = Some(value.to_owned());
        }
        slot.clone()
    }
}
