// ABOUTME: RecipeSource trait and the TheMealDB provider implementation
// ABOUTME: Four endpoints: search, random fan-out, filter-by-origin, lookup-by-id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use crate::normalize;
use crate::wire::{MealRecord, MealsEnvelope};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::{Client, ClientBuilder};
use savora_core::errors::ProviderError;
use savora_core::models::Recipe;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Default public TheMealDB base URL (free tier, no key required).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// A filtered listing returns abbreviated records; only this many are
/// hydrated with a per-identifier detail lookup.
pub const DETAIL_HYDRATION_CAP: usize = 9;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Abstraction over the recipe API, so the dispatcher can be exercised
/// against a stub source in tests.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Free-text search by recipe name.
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ProviderError>;

    /// Fetch `count` random recipes in parallel (all-or-nothing join).
    async fn random_batch(&self, count: usize) -> Result<Vec<Recipe>, ProviderError>;

    /// Filter by cuisine/origin, hydrating up to [`DETAIL_HYDRATION_CAP`]
    /// abbreviated listing entries with full detail lookups.
    async fn by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>, ProviderError>;

    /// Look up one recipe by identifier.
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, ProviderError>;
}

/// Configuration for the TheMealDB provider.
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// API base URL, e.g. `https://www.themealdb.com/api/json/v1/1`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// TheMealDB provider. Owns a pooled HTTP client built from the
/// configured timeouts; all four endpoints share it.
pub struct MealDbProvider {
    client: Client,
    config: MealDbConfig,
}

impl MealDbProvider {
    /// Create a provider against the given base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the HTTP client cannot be built.
    pub fn new(config: MealDbConfig) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Build an endpoint URL with one optional query parameter.
    fn endpoint(&self, path: &str, query: Option<(&str, &str)>) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&format!(
            "{}/{path}",
            self.config.base_url.trim_end_matches('/')
        ))?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    /// GET one endpoint and decode the meals envelope.
    async fn fetch_envelope(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Vec<MealRecord>, ProviderError> {
        let url = self.endpoint(path, query)?;
        debug!(%url, "fetching recipe API endpoint");
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(decode_envelope(&body)?.into_records())
    }
}

/// Decode a response body into the meals envelope.
fn decode_envelope(body: &str) -> Result<MealsEnvelope, ProviderError> {
    serde_json::from_str(body).map_err(|err| ProviderError::Malformed(err.to_string()))
}

/// Hydrate an abbreviated listing: issue one detail lookup per record,
/// capped at [`DETAIL_HYDRATION_CAP`], all-or-nothing. Lookups that come
/// back with an empty envelope are dropped from the result.
async fn hydrate_listing<F, Fut>(
    listing: Vec<MealRecord>,
    lookup: F,
) -> Result<Vec<MealRecord>, ProviderError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<MealRecord>, ProviderError>>,
{
    let hydrations = listing
        .into_iter()
        .take(DETAIL_HYDRATION_CAP)
        .map(|summary| lookup(summary.id));
    let details = try_join_all(hydrations).await?;
    Ok(details
        .into_iter()
        .filter_map(|records| records.into_iter().next())
        .collect())
}

#[async_trait]
impl RecipeSource for MealDbProvider {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ProviderError> {
        let records = self.fetch_envelope("search.php", Some(("s", query))).await?;
        info!(query, results = records.len(), "search completed");
        let mut rng = StdRng::from_entropy();
        Ok(normalize::normalize_all(&records, &mut rng))
    }

    async fn random_batch(&self, count: usize) -> Result<Vec<Recipe>, ProviderError> {
        let fetches = (0..count).map(|_| self.fetch_envelope("random.php", None));
        let batches = try_join_all(fetches).await?;

        // Each response carries one record; empty envelopes are skipped.
        let records: Vec<MealRecord> = batches
            .into_iter()
            .filter_map(|records| records.into_iter().next())
            .collect();
        info!(requested = count, received = records.len(), "random batch completed");

        let mut rng = StdRng::from_entropy();
        Ok(normalize::normalize_all(&records, &mut rng))
    }

    async fn by_cuisine(&self, cuisine: &str) -> Result<Vec<Recipe>, ProviderError> {
        // The listing endpoint returns abbreviated records without
        // ingredients or instructions; hydrate a capped prefix via lookup.
        let listing = self.fetch_envelope("filter.php", Some(("a", cuisine))).await?;
        let listed = listing.len();
        let records = hydrate_listing(listing, |id| async move {
            self.fetch_envelope("lookup.php", Some(("i", id.as_str()))).await
        })
        .await?;
        info!(
            cuisine,
            listed,
            hydrated = records.len(),
            "cuisine filter completed"
        );

        let mut rng = StdRng::from_entropy();
        Ok(normalize::normalize_all(&records, &mut rng))
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, ProviderError> {
        let records = self.fetch_envelope("lookup.php", Some(("i", id))).await?;
        let mut rng = StdRng::from_entropy();
        Ok(records
            .first()
            .map(|record| normalize::normalize(record, &mut rng)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn summary_record(id: &str) -> MealRecord {
        serde_json::from_str(&format!(
            r#"{{"idMeal": "{id}", "strMeal": "Recipe {id}"}}"#
        ))
        .expect("record decodes")
    }

    #[test]
    fn endpoint_builds_query_and_tolerates_trailing_slash() {
        let provider = MealDbProvider::new(MealDbConfig {
            base_url: "https://example.test/api/json/v1/1/".to_owned(),
            ..MealDbConfig::default()
        })
        .expect("provider builds");
        let url = provider
            .endpoint("search.php", Some(("s", "chicken soup")))
            .expect("url builds");
        assert_eq!(
            url.as_str(),
            "https://example.test/api/json/v1/1/search.php?s=chicken+soup"
        );
    }

    #[test]
    fn malformed_body_decodes_to_malformed_error() {
        let err = decode_envelope(r#"{"meals": "#).expect_err("truncated body");
        assert!(matches!(err, ProviderError::Malformed(_)));

        let envelope = decode_envelope(r#"{"meals": null}"#).expect("valid body");
        assert!(envelope.into_records().is_empty());
    }

    #[tokio::test]
    async fn hydration_issues_at_most_the_capped_number_of_lookups() {
        let listing: Vec<MealRecord> = (0..12)
            .map(|n| summary_record(&format!("{}", 52_700 + n)))
            .collect();
        let lookups = AtomicUsize::new(0);

        let hydrated = hydrate_listing(listing, |id| {
            lookups.fetch_add(1, Ordering::SeqCst);
            async move { Ok(vec![summary_record(&id)]) }
        })
        .await
        .expect("hydration succeeds");

        assert_eq!(lookups.load(Ordering::SeqCst), DETAIL_HYDRATION_CAP);
        assert_eq!(hydrated.len(), DETAIL_HYDRATION_CAP);
    }

    #[tokio::test]
    async fn hydration_drops_empty_lookup_envelopes() {
        let listing: Vec<MealRecord> =
            (0..3).map(|n| summary_record(&format!("{}", 52_700 + n))).collect();

        let hydrated = hydrate_listing(listing, |id| async move {
            if id == "52701" {
                Ok(Vec::new())
            } else {
                Ok(vec![summary_record(&id)])
            }
        })
        .await
        .expect("hydration succeeds");

        let ids: Vec<&str> = hydrated.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, ["52700", "52702"]);
    }

    #[tokio::test]
    async fn hydration_is_all_or_nothing_on_lookup_failure() {
        let listing: Vec<MealRecord> =
            (0..3).map(|n| summary_record(&format!("{}", 52_700 + n))).collect();

        let result = hydrate_listing(listing, |id| async move {
            if id == "52702" {
                Err(ProviderError::Malformed("truncated".to_owned()))
            } else {
                Ok(vec![summary_record(&id)])
            }
        })
        .await;

        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }
}
