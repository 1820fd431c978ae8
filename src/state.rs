// ABOUTME: Application state value owned by the controller
// ABOUTME: View selection, results, filters, pagination, favorites, fetch phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use savora_core::models::{FavoriteEntry, FilterState, Recipe, SortKey, ViewKind};
use savora_core::nutrition::NutritionFacts;
use std::time::Duration;

/// Number of cards revealed per page step, and the size of the initial
/// random listing.
pub const PAGE_SIZE: usize = 9;

/// How many parallel random fetches back the unfiltered listing.
pub const RANDOM_BATCH_SIZE: usize = 9;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Where the current result list stands relative to its fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    /// A fetch is in flight
    Loading,
    /// The last fetch failed; `message` is the user-visible generic text
    Failed {
        /// Generic failure message for the error panel
        message: String,
    },
    /// The last fetch completed (possibly with zero results)
    Loaded,
}

/// Transient notification with a fixed visible duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message text
    pub message: String,
    /// Visible duration (always [`TOAST_DURATION`])
    pub duration: Duration,
}

impl Toast {
    /// Build a toast with the standard duration.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: TOAST_DURATION,
        }
    }
}

/// Open detail overlay: a snapshot of the recipe plus nutrition placeholders
/// drawn fresh for this open.
#[derive(Debug, Clone)]
pub struct DetailState {
    /// Recipe snapshot at open-time
    pub recipe: Recipe,
    /// Placeholder nutrition block for this open
    pub nutrition: NutritionFacts,
}

/// The whole application state. One value, owned by the controller, mutated
/// only through [`crate::update::update`]; the view layer is a read-only
/// projection of it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active top-level view
    pub view: ViewKind,
    /// Last submitted search text; empty means the unfiltered listing
    pub search_query: String,
    /// Heading for the current result list
    pub results_title: String,
    /// Accumulated result list (fetched once, revealed by page)
    pub recipes: Vec<Recipe>,
    /// Locally persisted favorites, id-keyed membership
    pub favorites: Vec<FavoriteEntry>,
    /// 1-based page index controlling the reveal window
    pub page: usize,
    /// Fetch phase backing the loading/error/empty/content panels
    pub phase: FetchPhase,
    /// Active filters (diet/cuisine chips plus the inert advanced fields)
    pub filters: FilterState,
    /// Current sort order
    pub sort: SortKey,
    /// Fetch generation; completions for older generations are discarded
    pub generation: u64,
    /// Transient notification, if any
    pub toast: Option<Toast>,
    /// Open detail overlay, if any
    pub detail: Option<DetailState>,
}

impl AppState {
    /// Fresh session state seeded with the favorites loaded at startup.
    #[must_use]
    pub fn new(favorites: Vec<FavoriteEntry>) -> Self {
        Self {
            view: ViewKind::Search,
            search_query: String::new(),
            results_title: String::new(),
            recipes: Vec::new(),
            favorites,
            page: 1,
            phase: FetchPhase::Loaded,
            filters: FilterState::default(),
            sort: SortKey::Relevance,
            generation: 0,
            toast: None,
            detail: None,
        }
    }

    /// How many results the reveal window currently exposes.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.recipes.len().min(self.page * PAGE_SIZE)
    }

    /// Whether the given recipe id is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|entry| entry.recipe.id == id)
    }
}
