// ABOUTME: Normalization of raw meal records into the uniform Recipe model
// ABOUTME: Sparse ingredient extraction, tag splitting, and the derivation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use crate::wire::{MealRecord, INGREDIENT_SLOTS};
use rand::Rng;
use savora_core::models::{
    estimate_difficulty, estimate_time_minutes, short_description, Ingredient, Recipe,
};
use savora_core::nutrition;

/// Shown when a record carries no thumbnail URL.
const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// Normalize one raw record into a [`Recipe`].
///
/// The RNG backs only the placeholder calorie/serving display values; every
/// other field is a deterministic function of the record.
pub fn normalize<R: Rng + ?Sized>(record: &MealRecord, rng: &mut R) -> Recipe {
    let instructions = record.instructions.clone().unwrap_or_default();
    let ingredients = extract_ingredients(record);
    let estimates = nutrition::display_estimates(rng);

    Recipe {
        id: record.id.clone(),
        title: record.name.clone(),
        image_url: record
            .thumbnail
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned()),
        category: record.category.clone(),
        cuisine: record.area.clone(),
        description: short_description(&instructions),
        time_minutes: estimate_time_minutes(&instructions),
        difficulty: estimate_difficulty(ingredients.len()),
        instructions,
        tags: extract_tags(record),
        video_url: record.youtube.clone().filter(|url| !url.is_empty()),
        ingredients,
        calories: estimates.calories,
        servings: estimates.servings,
    }
}

/// Normalize a batch in arrival order.
pub fn normalize_all<R: Rng + ?Sized>(records: &[MealRecord], rng: &mut R) -> Vec<Recipe> {
    records.iter().map(|record| normalize(record, rng)).collect()
}

/// Collect the non-empty numbered ingredient slots, preserving order.
///
/// A slot counts only when its ingredient name is non-blank after trimming;
/// a missing measure becomes the empty string.
fn extract_ingredients(record: &MealRecord) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|n| {
            let (ingredient, measure) = record.ingredient_slot(n);
            let name = ingredient.map(str::trim).filter(|name| !name.is_empty())?;
            Some(Ingredient {
                name: name.to_owned(),
                measure: measure.map(str::trim).unwrap_or_default().to_owned(),
            })
        })
        .collect()
}

/// Category, origin, then any comma-separated extra tags.
fn extract_tags(record: &MealRecord) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(category) = record.category.clone().filter(|t| !t.is_empty()) {
        tags.push(category);
    }
    if let Some(area) = record.area.clone().filter(|t| !t.is_empty()) {
        tags.push(area);
    }
    if let Some(extra) = &record.tags {
        tags.extend(
            extra
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_owned),
        );
    }
    tags
}
