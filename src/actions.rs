// ABOUTME: Actions entering the update loop and effects leaving it
// ABOUTME: User intents, fetch completions, fetch request shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use savora_core::models::{Recipe, SortKey, ViewKind};

/// Everything that can happen to the application: user intents plus fetch
/// completions fed back by the dispatcher.
#[derive(Debug, Clone)]
pub enum Action {
    /// Switch between the search and favorites views
    SwitchView(ViewKind),
    /// Submit a free-text search (blank input is ignored)
    SubmitSearch(String),
    /// Load the unfiltered random listing (startup, clear, retry fallback)
    LoadPopular,
    /// Toggle the diet chip (single-select; recorded, not applied)
    ToggleDiet(String),
    /// Toggle the cuisine chip (single-select; drives the filtered fetch)
    ToggleCuisine(String),
    /// Set or clear the advanced time filter (recorded, not applied)
    SetTimeFilter(Option<String>),
    /// Set or clear the advanced meal filter (recorded, not applied)
    SetMealFilter(Option<String>),
    /// Set or clear the advanced difficulty filter (recorded, not applied)
    SetDifficultyFilter(Option<String>),
    /// Clear every filter and replay the last search or the listing
    ClearFilters,
    /// Change the sort order and re-sort the current results
    SetSort(SortKey),
    /// Advance the reveal window by one page
    LoadMore,
    /// Open the detail overlay for a displayed recipe
    OpenDetail(String),
    /// Dismiss the detail overlay
    CloseDetail,
    /// Toggle favorite membership by id. `snapshot` supplies the recipe
    /// payload when it is not already displayed (one-shot CLI lookups);
    /// otherwise the current results or favorites provide it.
    ToggleFavorite {
        /// Recipe identifier
        id: String,
        /// Out-of-band snapshot for ids not in the current state
        snapshot: Option<Box<Recipe>>,
    },
    /// Manually retry after a failure: replay the last search, or fall back
    /// to the unfiltered listing
    Retry,
    /// Dismiss the current toast
    DismissToast,
    /// A dispatched fetch finished
    FetchCompleted {
        /// Generation the fetch was dispatched under
        generation: u64,
        /// What came back
        outcome: FetchOutcome,
    },
}

/// Result of a dispatched fetch.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The fetch succeeded; zero recipes means the empty-results case
    Loaded(Vec<Recipe>),
    /// The fetch failed; `message` is the generic user-visible text
    Failed {
        /// Generic failure message
        message: String,
    },
}

/// One of the four request shapes against the external API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Free-text search by name
    Search(String),
    /// N parallel random fetches for the unfiltered listing
    RandomBatch(usize),
    /// Filter-by-origin listing with capped detail hydration
    CuisineListing(String),
}

/// Side effects requested by the update function, executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch a fetch; its completion re-enters as
    /// [`Action::FetchCompleted`] tagged with `generation`
    Fetch {
        /// Generation tag for stale-completion discard
        generation: u64,
        /// Request shape to dispatch
        request: FetchRequest,
    },
    /// Rewrite the persisted favorites blob from current state
    PersistFavorites,
}
