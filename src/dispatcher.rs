// ABOUTME: Executes fetch effects against a RecipeSource and reports outcomes
// ABOUTME: Collapses all failure causes into the per-shape generic message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use crate::actions::{FetchOutcome, FetchRequest};
use savora_mealdb::RecipeSource;
use tracing::error;

/// Generic message for a failed search.
pub const SEARCH_FAILED: &str = "Failed to search recipes. Please try again.";

/// Generic message for a failed unfiltered listing.
pub const LISTING_FAILED: &str = "Failed to load recipes. Please try again.";

/// Generic message for a failed cuisine filter.
pub const FILTER_FAILED: &str = "Failed to apply filters. Please try again.";

/// Run one fetch request to completion.
///
/// Network failure, malformed responses, and partial batch failure all
/// collapse into the same generic message for the error panel; the cause is
/// only distinguished in the log.
pub async fn dispatch<S: RecipeSource + ?Sized>(
    source: &S,
    request: FetchRequest,
) -> FetchOutcome {
    let (result, failure_message) = match &request {
        FetchRequest::Search(query) => (source.search(query).await, SEARCH_FAILED),
        FetchRequest::RandomBatch(count) => (source.random_batch(*count).await, LISTING_FAILED),
        FetchRequest::CuisineListing(cuisine) => (source.by_cuisine(cuisine).await, FILTER_FAILED),
    };

    match result {
        Ok(recipes) => FetchOutcome::Loaded(recipes),
        Err(cause) => {
            error!(?request, %cause, "fetch failed");
            FetchOutcome::Failed {
                message: failure_message.to_owned(),
            }
        }
    }
}
