// ABOUTME: Declarative view projection: state in, display-free render tree out
// ABOUTME: Four exclusive panels, recipe cards, detail overlay, toast, badge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

//! # View Projection
//!
//! `view` maps the current [`AppState`] to a [`ViewTree`] describing
//! everything a display surface would show, without touching one. The CLI
//! renderer in [`crate::render`] projects the tree to text; tests assert on
//! the tree directly.

use crate::state::{AppState, FetchPhase, Toast};
use savora_core::models::{Recipe, ViewKind};
use savora_core::nutrition::NutritionFacts;

/// How many tags a card shows.
const CARD_TAG_LIMIT: usize = 3;

/// Empty-state message for the search view.
const NO_RESULTS: &str = "No recipes found. Try a different search.";

/// Empty-state message for the favorites view.
const NO_FAVORITES: &str = "No favorites yet. Browse recipes and tap the heart to save them.";

/// Complete description of what the display surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    /// Active top-level view
    pub view: ViewKind,
    /// Heading above the result grid
    pub title: String,
    /// Favorites badge count; `None` hides the badge
    pub favorites_badge: Option<usize>,
    /// Exactly one of the four mutually exclusive panels
    pub panel: Panel,
    /// Detail overlay, when open
    pub overlay: Option<DetailOverlay>,
    /// Transient notification, when visible
    pub toast: Option<Toast>,
}

/// The four mutually exclusive content-area panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// A fetch is in flight
    Loading,
    /// The last fetch failed
    Error {
        /// Generic failure message
        message: String,
        /// Whether a retry affordance is offered (always true today)
        retryable: bool,
    },
    /// The fetch succeeded with nothing to show
    Empty {
        /// Context-dependent empty-state message
        message: String,
    },
    /// Results to display
    Content {
        /// Cards inside the reveal window
        cards: Vec<RecipeCard>,
        /// Whether a load-more affordance is offered
        has_more: bool,
    },
}

/// One recipe card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// Recipe identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Estimated preparation time (minutes)
    pub time_minutes: u32,
    /// Placeholder serving count
    pub servings: u32,
    /// Placeholder calorie count
    pub calories: u32,
    /// One-line description
    pub description: String,
    /// Up to three tags
    pub tags: Vec<String>,
    /// Whether the favorite affordance is marked active
    pub is_favorite: bool,
}

/// The detail overlay for one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    /// Recipe identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Image URL
    pub image_url: String,
    /// Estimated preparation time (minutes)
    pub time_minutes: u32,
    /// Placeholder serving count
    pub servings: u32,
    /// Derived difficulty label
    pub difficulty: String,
    /// All tags
    pub tags: Vec<String>,
    /// Ingredient lines as "measure name"
    pub ingredients: Vec<String>,
    /// Numbered instruction steps
    pub steps: Vec<String>,
    /// Placeholder nutrition block for this open
    pub nutrition: NutritionFacts,
    /// Video tutorial URL, when present
    pub video_url: Option<String>,
}

/// Project the state into a render tree.
#[must_use]
pub fn view(state: &AppState) -> ViewTree {
    let panel = match state.view {
        ViewKind::Search => search_panel(state),
        ViewKind::Favorites => favorites_panel(state),
    };

    ViewTree {
        view: state.view,
        title: match state.view {
            ViewKind::Search => state.results_title.clone(),
            ViewKind::Favorites => "My Favorites".to_owned(),
        },
        favorites_badge: Some(state.favorites.len()).filter(|count| *count > 0),
        panel,
        overlay: state.detail.as_ref().map(|detail| DetailOverlay {
            id: detail.recipe.id.clone(),
            title: detail.recipe.title.clone(),
            image_url: detail.recipe.image_url.clone(),
            time_minutes: detail.recipe.time_minutes,
            servings: detail.recipe.servings,
            difficulty: detail.recipe.difficulty.to_string(),
            tags: detail.recipe.tags.clone(),
            ingredients: ingredient_lines(&detail.recipe),
            steps: instruction_steps(&detail.recipe.instructions),
            nutrition: detail.nutrition,
            video_url: detail.recipe.video_url.clone(),
        }),
        toast: state.toast.clone(),
    }
}

fn search_panel(state: &AppState) -> Panel {
    match &state.phase {
        FetchPhase::Loading => Panel::Loading,
        FetchPhase::Failed { message } => Panel::Error {
            message: message.clone(),
            retryable: true,
        },
        FetchPhase::Loaded if state.recipes.is_empty() => Panel::Empty {
            message: NO_RESULTS.to_owned(),
        },
        FetchPhase::Loaded => {
            let revealed = state.revealed();
            Panel::Content {
                cards: state.recipes[..revealed]
                    .iter()
                    .map(|recipe| card(recipe, state))
                    .collect(),
                has_more: state.recipes.len() > revealed,
            }
        }
    }
}

/// Favorites come from local state, so loading/error never apply here.
fn favorites_panel(state: &AppState) -> Panel {
    if state.favorites.is_empty() {
        Panel::Empty {
            message: NO_FAVORITES.to_owned(),
        }
    } else {
        Panel::Content {
            cards: state
                .favorites
                .iter()
                .map(|entry| card(&entry.recipe, state))
                .collect(),
            has_more: false,
        }
    }
}

fn card(recipe: &Recipe, state: &AppState) -> RecipeCard {
    RecipeCard {
        id: recipe.id.clone(),
        title: recipe.title.clone(),
        time_minutes: recipe.time_minutes,
        servings: recipe.servings,
        calories: recipe.calories,
        description: recipe.description.clone(),
        tags: recipe.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
        is_favorite: state.is_favorite(&recipe.id),
    }
}

fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .map(|ing| {
            if ing.measure.is_empty() {
                ing.name.clone()
            } else {
                format!("{} {}", ing.measure, ing.name)
            }
        })
        .collect()
}

fn instruction_steps(instructions: &str) -> Vec<String> {
    instructions
        .split("\r\n")
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_owned)
        .collect()
}
