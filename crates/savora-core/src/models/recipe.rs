// ABOUTME: Recipe model and the derivation rules applied at normalization time
// ABOUTME: Ingredient pairs, difficulty/time estimation, favorite snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instruction-length thresholds (chars) for the preparation-time estimate.
/// Below each threshold the corresponding minute value applies; 60 otherwise.
const TIME_THRESHOLDS: [(usize, u32); 3] = [(500, 15), (1000, 30), (1500, 45)];

/// Fallback estimate for very long instruction texts.
const TIME_MAX_MINUTES: u32 = 60;

/// Estimated difficulty of a recipe, derived from its ingredient count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Fewer than 5 ingredients
    Easy,
    /// 5 to 9 ingredients
    Medium,
    /// 10 or more ingredients
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// One ingredient line: name plus free-form quantity/measure text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    /// Ingredient name (non-empty; empty slots are dropped at normalization)
    pub name: String,
    /// Quantity or measure text; may be empty
    pub measure: String,
}

/// Normalized recipe record derived from one external API meal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// API identifier, kept as the opaque string the API returns
    pub id: String,
    /// Display title
    pub title: String,
    /// Thumbnail image URL
    pub image_url: String,
    /// Category (e.g. "Dessert"), when the API provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cuisine/origin (e.g. "Italian"), when the API provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// First sentence of the instructions, used as a card description
    pub description: String,
    /// Full instruction text
    pub instructions: String,
    /// Ordered, sparse ingredient list (empty slots already dropped)
    pub ingredients: Vec<Ingredient>,
    /// Tags: category, origin, plus any comma-separated extras
    pub tags: Vec<String>,
    /// Optional video tutorial URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Estimated preparation time in minutes (derived, one of 15/30/45/60)
    pub time_minutes: u32,
    /// Estimated difficulty (derived from ingredient count)
    pub difficulty: Difficulty,
    /// Placeholder calorie display value, see [`crate::nutrition`]
    pub calories: u32,
    /// Placeholder serving display value, see [`crate::nutrition`]
    pub servings: u32,
}

/// A favorited recipe snapshot as persisted in the favorites file.
///
/// Identity is the recipe id; the payload is whatever snapshot was current
/// when the favorite was added, so re-adding after a different fetch may
/// store different derived display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    /// Snapshot of the recipe at add-time
    pub recipe: Recipe,
    /// When the favorite was added
    pub saved_at: DateTime<Utc>,
}

impl FavoriteEntry {
    /// Snapshot a recipe now.
    #[must_use]
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            saved_at: Utc::now(),
        }
    }
}

/// Estimate preparation time from instruction-text length.
///
/// Deterministic monotonic step function: <500 chars → 15 minutes,
/// <1000 → 30, <1500 → 45, otherwise 60.
#[must_use]
pub fn estimate_time_minutes(instructions: &str) -> u32 {
    // Character count, not byte length: non-ASCII instructions must not
    // land in a later bucket just because they encode wider.
    let len = instructions.chars().count();
    for (threshold, minutes) in TIME_THRESHOLDS {
        if len < threshold {
            return minutes;
        }
    }
    TIME_MAX_MINUTES
}

/// Estimate difficulty from the number of non-empty ingredient slots.
///
/// Deterministic step function: <5 → easy, <10 → medium, otherwise hard.
#[must_use]
pub fn estimate_difficulty(ingredient_count: usize) -> Difficulty {
    if ingredient_count < 5 {
        Difficulty::Easy
    } else if ingredient_count < 10 {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// First sentence of the instruction text, with the trailing period restored.
///
/// Mirrors the card description the original listing shows: everything up to
/// the first `.`, then a `.`. An empty instruction text yields just `"."`.
#[must_use]
pub fn short_description(instructions: &str) -> String {
    let first = instructions.split('.').next().unwrap_or_default();
    format!("{first}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_estimate_steps_at_thresholds() {
        assert_eq!(estimate_time_minutes(""), 15);
        assert_eq!(estimate_time_minutes(&"x".repeat(499)), 15);
        assert_eq!(estimate_time_minutes(&"x".repeat(500)), 30);
        assert_eq!(estimate_time_minutes(&"x".repeat(999)), 30);
        assert_eq!(estimate_time_minutes(&"x".repeat(1000)), 45);
        assert_eq!(estimate_time_minutes(&"x".repeat(1499)), 45);
        assert_eq!(estimate_time_minutes(&"x".repeat(1500)), 60);
        assert_eq!(estimate_time_minutes(&"x".repeat(10_000)), 60);
    }

    #[test]
    fn time_estimate_counts_characters_not_bytes() {
        // 499 two-byte characters: 998 bytes but still below the 500-char step.
        assert_eq!(estimate_time_minutes(&"é".repeat(499)), 15);
        assert_eq!(estimate_time_minutes(&"é".repeat(500)), 30);
    }

    #[test]
    fn difficulty_steps_at_ingredient_counts() {
        assert_eq!(estimate_difficulty(0), Difficulty::Easy);
        assert_eq!(estimate_difficulty(4), Difficulty::Easy);
        assert_eq!(estimate_difficulty(5), Difficulty::Medium);
        assert_eq!(estimate_difficulty(9), Difficulty::Medium);
        assert_eq!(estimate_difficulty(10), Difficulty::Hard);
        assert_eq!(estimate_difficulty(20), Difficulty::Hard);
    }

    #[test]
    fn short_description_takes_first_sentence() {
        assert_eq!(
            short_description("Chop the onions. Fry until golden."),
            "Chop the onions."
        );
        assert_eq!(short_description("No period at all"), "No period at all.");
        assert_eq!(short_description(""), ".");
    }
}
