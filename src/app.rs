// ABOUTME: Controller owning the state value and running the action loop
// ABOUTME: Applies updates, executes effects, persists favorites, projects views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use crate::actions::{Action, Effect};
use crate::dispatcher;
use crate::favorites::FavoritesStore;
use crate::state::AppState;
use crate::update;
use crate::view::{self, ViewTree};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use savora_mealdb::RecipeSource;
use std::collections::VecDeque;
use tracing::info;

/// Top-level controller: the single owner of [`AppState`].
///
/// Every mutation flows `action -> update -> effects`; fetch effects run to
/// completion and their outcomes re-enter the loop as actions, so after
/// [`App::handle`] returns the state is settled and ready to project.
pub struct App<S: RecipeSource> {
    state: AppState,
    source: S,
    store: FavoritesStore,
    rng: StdRng,
}

impl<S: RecipeSource> App<S> {
    /// Build the controller, loading favorites once from the store.
    pub fn new(source: S, store: FavoritesStore) -> Self {
        let favorites = store.load();
        Self {
            state: AppState::new(favorites),
            source,
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Dispatch the initial unfiltered listing.
    ///
    /// # Errors
    ///
    /// Propagates effect-execution failures, see [`App::handle`].
    pub async fn start(&mut self) -> Result<()> {
        info!("starting session");
        self.handle(Action::LoadPopular).await
    }

    /// Run one action (and any follow-up actions its effects produce) to
    /// completion.
    ///
    /// # Errors
    ///
    /// Returns an error when the favorites file cannot be rewritten. Fetch
    /// failures are not errors here; they settle into the error panel.
    pub async fn handle(&mut self, action: Action) -> Result<()> {
        let mut pending = VecDeque::from([action]);
        while let Some(action) = pending.pop_front() {
            let effects = update::update(&mut self.state, action, &mut self.rng);
            for effect in effects {
                match effect {
                    Effect::PersistFavorites => self
                        .store
                        .save(&self.state.favorites)
                        .context("failed to persist favorites")?,
                    Effect::Fetch {
                        generation,
                        request,
                    } => {
                        let outcome = dispatcher::dispatch(&self.source, request).await;
                        pending.push_back(Action::FetchCompleted {
                            generation,
                            outcome,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Read-only access to the settled state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Project the current state into a render tree.
    #[must_use]
    pub fn view(&self) -> ViewTree {
        view::view(&self.state)
    }

    /// Fetch a recipe by id directly (one-shot `show`/favorite hydration).
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup request fails.
    pub async fn lookup(&self, id: &str) -> Result<Option<savora_core::models::Recipe>> {
        self.source
            .lookup(id)
            .await
            .with_context(|| format!("lookup for recipe {id} failed"))
    }
}
