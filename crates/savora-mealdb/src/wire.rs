// ABOUTME: Raw TheMealDB response shapes exactly as the API serves them
// ABOUTME: Envelope with nullable meals array plus the numbered ingredient slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use serde::Deserialize;
use std::collections::BTreeMap;

/// Number of numbered ingredient/measure slot pairs a meal record carries.
pub const INGREDIENT_SLOTS: usize = 20;

/// Top-level response envelope shared by all four endpoints.
///
/// The API signals "no matches" with `{"meals": null}` rather than an empty
/// array, so absence decodes to `None` and is treated as zero results, never
/// as an error.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    /// Matched meal records, or `None` when the query had no results
    pub meals: Option<Vec<MealRecord>>,
}

impl MealsEnvelope {
    /// Flatten the nullable array into a plain (possibly empty) list.
    #[must_use]
    pub fn into_records(self) -> Vec<MealRecord> {
        self.meals.unwrap_or_default()
    }
}

/// One raw meal record.
///
/// The listing endpoint (`filter.php`) returns abbreviated records carrying
/// only `idMeal`, `strMeal`, and `strMealThumb`; everything else is optional
/// here for that reason. The twenty `strIngredientN`/`strMeasureN` pairs are
/// captured through the flattened map and read via [`Self::ingredient_slot`].
#[derive(Debug, Deserialize)]
pub struct MealRecord {
    /// Meal identifier, an opaque numeric string
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Meal name
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    /// Category, e.g. "Seafood"
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    /// Cuisine/origin, e.g. "Japanese"
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    /// Full instruction text
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// Comma-separated extra tags
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    /// Video tutorial URL
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Remaining fields, notably the numbered ingredient/measure slots
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl MealRecord {
    /// Read numbered slot `n` (1-based) as `(ingredient, measure)` strings.
    ///
    /// Null, missing, and non-string values all read as `None`.
    #[must_use]
    pub fn ingredient_slot(&self, n: usize) -> (Option<&str>, Option<&str>) {
        let field = |key: String| self.extra.get(&key).and_then(serde_json::Value::as_str);
        (
            field(format!("strIngredient{n}")),
            field(format!("strMeasure{n}")),
        )
    }
}
