// ABOUTME: Pure update functions: one action in, mutated state and effects out
// ABOUTME: Search, filters, sorting, pagination, favorites, stale-fetch discard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

//! # Update Logic
//!
//! All state transitions live here. `update` takes the state, one
//! [`Action`], and an RNG (backing the rating shuffle and the detail-view
//! nutrition placeholders) and returns the effects the controller must run.
//! Nothing here performs I/O, so every transition is testable with a seeded
//! RNG and hand-built actions.

use crate::actions::{Action, Effect, FetchOutcome, FetchRequest};
use crate::state::{AppState, DetailState, FetchPhase, Toast, RANDOM_BATCH_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use savora_core::models::{FavoriteEntry, FilterState, Recipe, SortKey};
use savora_core::nutrition;
use tracing::debug;

/// Heading for the unfiltered random listing.
const POPULAR_TITLE: &str = "Popular Recipes";

/// Apply one action.
pub fn update<R: Rng + ?Sized>(state: &mut AppState, action: Action, rng: &mut R) -> Vec<Effect> {
    match action {
        Action::SwitchView(view) => {
            state.view = view;
            Vec::new()
        }
        Action::SubmitSearch(query) => submit_search(state, query),
        Action::LoadPopular => {
            state.search_query.clear();
            begin_fetch(
                state,
                FetchRequest::RandomBatch(RANDOM_BATCH_SIZE),
                POPULAR_TITLE.to_owned(),
            )
        }
        Action::ToggleDiet(value) => {
            // Recorded only: diet does not reach the query, and the displayed
            // list is deliberately left untouched.
            let active = FilterState::toggle_chip(&mut state.filters.diet, &value);
            debug!(?active, "diet chip toggled (not applied to query)");
            Vec::new()
        }
        Action::ToggleCuisine(value) => toggle_cuisine(state, &value),
        Action::SetTimeFilter(value) => set_advanced(state, AdvancedField::Time, value),
        Action::SetMealFilter(value) => set_advanced(state, AdvancedField::Meal, value),
        Action::SetDifficultyFilter(value) => set_advanced(state, AdvancedField::Difficulty, value),
        Action::ClearFilters => {
            state.filters = FilterState::default();
            replay_listing(state)
        }
        Action::SetSort(sort) => {
            state.sort = sort;
            sort_recipes(state, rng);
            Vec::new()
        }
        Action::LoadMore => {
            // Reveal-only: the full set is already fetched.
            if state.revealed() < state.recipes.len() {
                state.page += 1;
            }
            Vec::new()
        }
        Action::OpenDetail(id) => open_detail(state, &id, rng),
        Action::CloseDetail => {
            state.detail = None;
            Vec::new()
        }
        Action::ToggleFavorite { id, snapshot } => toggle_favorite(state, &id, snapshot),
        Action::Retry => replay_listing(state),
        Action::DismissToast => {
            state.toast = None;
            Vec::new()
        }
        Action::FetchCompleted {
            generation,
            outcome,
        } => fetch_completed(state, generation, outcome),
    }
}

fn submit_search(state: &mut AppState, query: String) -> Vec<Effect> {
    let query = query.trim().to_owned();
    if query.is_empty() {
        return Vec::new();
    }
    let title = format!("Results for \"{query}\"");
    state.search_query.clone_from(&query);
    begin_fetch(state, FetchRequest::Search(query), title)
}

/// Bump the generation, flip to loading, and emit the fetch effect.
fn begin_fetch(state: &mut AppState, request: FetchRequest, title: String) -> Vec<Effect> {
    state.generation += 1;
    state.phase = FetchPhase::Loading;
    state.results_title = title;
    state.recipes.clear();
    state.page = 1;
    vec![Effect::Fetch {
        generation: state.generation,
        request,
    }]
}

fn toggle_cuisine(state: &mut AppState, value: &str) -> Vec<Effect> {
    match FilterState::toggle_chip(&mut state.filters.cuisine, value) {
        Some(cuisine) => {
            let title = format!("{cuisine} Recipes");
            begin_fetch(state, FetchRequest::CuisineListing(cuisine), title)
        }
        // Chip cleared: fall back to the last search or the listing.
        None => replay_listing(state),
    }
}

enum AdvancedField {
    Time,
    Meal,
    Difficulty,
}

// TODO: apply these to the loaded results post-fetch; time and difficulty are
// derived fields we already have, meal maps onto the category tag.
fn set_advanced(state: &mut AppState, field: AdvancedField, value: Option<String>) -> Vec<Effect> {
    let slot = match field {
        AdvancedField::Time => &mut state.filters.time,
        AdvancedField::Meal => &mut state.filters.meal,
        AdvancedField::Difficulty => &mut state.filters.difficulty,
    };
    *slot = value.filter(|v| !v.is_empty());
    debug!("advanced filter recorded (not applied to query)");
    Vec::new()
}

/// Replay the last search, or fall back to the unfiltered listing.
fn replay_listing(state: &mut AppState) -> Vec<Effect> {
    if state.search_query.is_empty() {
        begin_fetch(
            state,
            FetchRequest::RandomBatch(RANDOM_BATCH_SIZE),
            POPULAR_TITLE.to_owned(),
        )
    } else {
        let query = state.search_query.clone();
        let title = format!("Results for \"{query}\"");
        begin_fetch(state, FetchRequest::Search(query), title)
    }
}

fn sort_recipes<R: Rng + ?Sized>(state: &mut AppState, rng: &mut R) {
    match state.sort {
        // Relevance keeps whatever order the results arrived in.
        SortKey::Relevance => {}
        SortKey::Time => state.recipes.sort_by_key(|recipe| recipe.time_minutes),
        SortKey::Calories => state.recipes.sort_by_key(|recipe| recipe.calories),
        // The API carries no rating data; shuffle as a placeholder.
        SortKey::Rating => state.recipes.shuffle(rng),
    }
}

fn open_detail<R: Rng + ?Sized>(state: &mut AppState, id: &str, rng: &mut R) -> Vec<Effect> {
    let recipe = displayed_recipe(state, id);
    match recipe {
        Some(recipe) => {
            // Nutrition placeholders are drawn fresh on every open.
            let nutrition = nutrition::nutrition_facts(recipe.calories, rng);
            state.detail = Some(DetailState { recipe, nutrition });
        }
        None => debug!(id, "detail requested for a recipe not in view"),
    }
    Vec::new()
}

/// Find a recipe snapshot by id in the current results, favorites, or the
/// open overlay.
fn displayed_recipe(state: &AppState, id: &str) -> Option<Recipe> {
    state
        .recipes
        .iter()
        .find(|recipe| recipe.id == id)
        .or_else(|| {
            state
                .favorites
                .iter()
                .map(|entry| &entry.recipe)
                .find(|recipe| recipe.id == id)
        })
        .or_else(|| {
            state
                .detail
                .as_ref()
                .map(|detail| &detail.recipe)
                .filter(|recipe| recipe.id == id)
        })
        .cloned()
}

fn toggle_favorite(state: &mut AppState, id: &str, snapshot: Option<Box<Recipe>>) -> Vec<Effect> {
    if let Some(index) = state
        .favorites
        .iter()
        .position(|entry| entry.recipe.id == id)
    {
        state.favorites.remove(index);
        state.toast = Some(Toast::new("Recipe removed from favorites."));
        return vec![Effect::PersistFavorites];
    }

    let recipe = snapshot
        .map(|boxed| *boxed)
        .or_else(|| displayed_recipe(state, id));
    match recipe {
        Some(recipe) => {
            state.favorites.push(FavoriteEntry::new(recipe));
            state.toast = Some(Toast::new("Recipe added to favorites!"));
            vec![Effect::PersistFavorites]
        }
        None => {
            debug!(id, "favorite toggle for an unknown recipe ignored");
            Vec::new()
        }
    }
}

fn fetch_completed(state: &mut AppState, generation: u64, outcome: FetchOutcome) -> Vec<Effect> {
    if generation != state.generation {
        // A newer fetch superseded this one; its results must not clobber
        // the current list.
        debug!(
            stale = generation,
            current = state.generation,
            "discarding stale fetch completion"
        );
        return Vec::new();
    }

    match outcome {
        FetchOutcome::Loaded(recipes) => {
            state.recipes = recipes;
            state.page = 1;
            state.phase = FetchPhase::Loaded;
        }
        FetchOutcome::Failed { message } => {
            state.phase = FetchPhase::Failed { message };
        }
    }
    Vec::new()
}
