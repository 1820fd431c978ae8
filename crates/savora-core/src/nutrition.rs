// ABOUTME: Placeholder nutrition and display-value generator with documented ranges
// ABOUTME: Values are decorative only; nothing may depend on their exact magnitude
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

//! # Placeholder Nutrition Generator
//!
//! The external recipe API carries no nutrition data. These values exist
//! purely so cards and the detail view have something to display; they are
//! drawn uniformly from the documented ranges, are not reproducible across
//! runs, and carry no semantic meaning. Tests assert ranges, never exact
//! values.
//!
//! All ranges are half-open (`lo..hi`):
//!
//! | Value      | Range    | Unit     |
//! |------------|----------|----------|
//! | calories   | 200..500 | kcal     |
//! | servings   | 2..6     | servings |
//! | protein    | 10..40   | g        |
//! | carbs      | 20..60   | g        |
//! | fat        | 5..25    | g        |

use rand::Rng;
use std::ops::Range;

/// Calorie display range (kcal).
pub const CALORIES_RANGE: Range<u32> = 200..500;
/// Serving-count display range.
pub const SERVINGS_RANGE: Range<u32> = 2..6;
/// Protein display range (grams).
pub const PROTEIN_RANGE: Range<u32> = 10..40;
/// Carbohydrate display range (grams).
pub const CARBS_RANGE: Range<u32> = 20..60;
/// Fat display range (grams).
pub const FAT_RANGE: Range<u32> = 5..25;

/// Display-only values attached to a recipe at normalization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEstimates {
    /// Placeholder calorie count (kcal)
    pub calories: u32,
    /// Placeholder serving count
    pub servings: u32,
}

/// Placeholder nutrition block shown in the detail view.
///
/// Regenerated on every detail open, so repeated opens of the same recipe
/// show different numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionFacts {
    /// Calories (kcal); the recipe's own display value is reused here
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fat (grams)
    pub fat_g: u32,
}

/// Draw the per-recipe display estimates.
pub fn display_estimates<R: Rng + ?Sized>(rng: &mut R) -> DisplayEstimates {
    DisplayEstimates {
        calories: rng.gen_range(CALORIES_RANGE),
        servings: rng.gen_range(SERVINGS_RANGE),
    }
}

/// Draw a nutrition block for the detail view, reusing the recipe's
/// calorie display value so the card and the overlay agree.
pub fn nutrition_facts<R: Rng + ?Sized>(calories: u32, rng: &mut R) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein_g: rng.gen_range(PROTEIN_RANGE),
        carbs_g: rng.gen_range(CARBS_RANGE),
        fat_g: rng.gen_range(FAT_RANGE),
    }
}
