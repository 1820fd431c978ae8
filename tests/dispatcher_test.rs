// ABOUTME: Tests for fetch-effect dispatch against a stub recipe source
// ABOUTME: Validates per-shape failure messages and the controller action loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use async_trait::async_trait;
use savora::actions::{Action, FetchOutcome, FetchRequest};
use savora::app::App;
use savora::dispatcher::{dispatch, FILTER_FAILED, LISTING_FAILED, SEARCH_FAILED};
use savora::favorites::FavoritesStore;
use savora::state::FetchPhase;
use savora_core::errors::ProviderError;
use savora_core::models::{Difficulty, Recipe};
use savora_mealdb::RecipeSource;

fn recipe(id: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        title: format!("Recipe {id}"),
        image_url: "https://example.test/img.jpg".to_owned(),
        category: None,
        cuisine: None,
        description: "Mix.".to_owned(),
        instructions: "Mix.".to_owned(),
        ingredients: Vec::new(),
        tags: Vec::new(),
        video_url: None,
        time_minutes: 15,
        difficulty: Difficulty::Easy,
        calories: 250,
        servings: 2,
    }
}

/// Stub source: succeeds or fails wholesale.
struct StubSource {
    fail: bool,
}

#[async_trait]
impl RecipeSource for StubSource {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Malformed("stub failure".to_owned()));
        }
        Ok(vec![recipe(query)])
    }

    async fn random_batch(&self, count: usize) -> Result<Vec<Recipe>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Malformed("stub failure".to_owned()));
        }
        Ok((0..count).map(|n| recipe(&n.to_string())).collect())
    }

    async fn by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Malformed("stub failure".to_owned()));
        }
        Ok(vec![recipe(cuisine)])
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        if self.fail {
            return Err(ProviderError::Malformed("stub failure".to_owned()));
        }
        Ok(Some(recipe(id)))
    }
}

#[tokio::test]
async fn each_request_shape_fails_with_its_own_generic_message() {
    let source = StubSource { fail: true };

    let cases = [
        (FetchRequest::Search("a".to_owned()), SEARCH_FAILED),
        (FetchRequest::RandomBatch(9), LISTING_FAILED),
        (FetchRequest::CuisineListing("Italian".to_owned()), FILTER_FAILED),
    ];
    for (request, expected) in cases {
        match dispatch(&source, request).await {
            FetchOutcome::Failed { message } => assert_eq!(message, expected),
            FetchOutcome::Loaded(_) => panic!("stub should fail"),
        }
    }
}

#[tokio::test]
async fn successful_dispatch_passes_recipes_through() {
    let source = StubSource { fail: false };
    match dispatch(&source, FetchRequest::RandomBatch(3)).await {
        FetchOutcome::Loaded(recipes) => assert_eq!(recipes.len(), 3),
        FetchOutcome::Failed { message } => panic!("unexpected failure: {message}"),
    }
}

#[tokio::test]
async fn controller_settles_a_search_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FavoritesStore::new(dir.path().join("favorites.json"));
    let mut app = App::new(StubSource { fail: false }, store);

    app.handle(Action::SubmitSearch("carbonara".to_owned()))
        .await
        .expect("handle succeeds");

    assert_eq!(app.state().phase, FetchPhase::Loaded);
    assert_eq!(app.state().recipes.len(), 1);
    assert_eq!(app.state().recipes[0].id, "carbonara");
}

#[tokio::test]
async fn controller_settles_a_failure_into_the_error_phase() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FavoritesStore::new(dir.path().join("favorites.json"));
    let mut app = App::new(StubSource { fail: true }, store);

    app.handle(Action::SubmitSearch("carbonara".to_owned()))
        .await
        .expect("handle succeeds even when the fetch fails");

    assert_eq!(
        app.state().phase,
        FetchPhase::Failed {
            message: SEARCH_FAILED.to_owned()
        }
    );
}

#[tokio::test]
async fn controller_persists_favorites_on_toggle() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("favorites.json");
    let mut app = App::new(StubSource { fail: false }, FavoritesStore::new(path.clone()));

    app.handle(Action::SubmitSearch("carbonara".to_owned()))
        .await
        .expect("search settles");
    app.handle(Action::ToggleFavorite {
        id: "carbonara".to_owned(),
        snapshot: None,
    })
    .await
    .expect("toggle persists");

    let reloaded = FavoritesStore::new(path).load();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].recipe.id, "carbonara");
}
