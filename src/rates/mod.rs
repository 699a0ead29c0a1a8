//! Conversion rate provider
//!
//! Resolves a rate between two currency codes from an
//! exchangerate-api-style upstream (`GET {api_url}/{from}` returning a
//! `rates` map) and caches each pair for a bounded time (3600 s by
//! default). Concurrent misses for the same pair may both hit the
//! upstream; the lookup is read-only so the stampede is harmless.

use crate::config::RatesConfig;
use crate::error::WalletError;
use cached::{Cached, TimedCache};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;

/// Upstream response shape: `{"rates": {"USD": 0.27, ...}}`
#[derive(Debug, Deserialize)]
struct RatesDocument {
    rates: HashMap<String, Decimal>,
}

/// Process-wide rate source with a per-pair TTL cache
pub struct RateProvider {
    http: reqwest::Client,
    api_url: String,
    cache: Mutex<TimedCache<String, Decimal>>,
}

impl RateProvider {
    pub fn new(config: &RatesConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            cache: Mutex::new(TimedCache::with_lifespan(config.ttl_secs)),
        }
    }

    /// Seed the cache with a known rate.
    ///
    /// Explicit initialization hook; also what tests use to pin rates
    /// without an upstream.
    pub fn prime(&self, from: &str, to: &str, rate: Decimal) {
        self.cache
            .lock()
            .expect("rate cache poisoned")
            .cache_set(pair_key(from, to), rate);
    }

    /// Resolve the conversion rate from `from` to `to`.
    ///
    /// Cache-first; a miss fetches the upstream document for `from` and
    /// caches only the requested pair. Any upstream failure, a missing
    /// pair, or a non-positive value surfaces as `RateUnavailable`.
    pub async fn rate(&self, from: &str, to: &str) -> Result<Decimal, WalletError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let key = pair_key(from, to);
        if let Some(rate) = self
            .cache
            .lock()
            .expect("rate cache poisoned")
            .cache_get(&key)
        {
            return Ok(*rate);
        }

        let url = format!("{}/{}", self.api_url, from);
        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, from, to, "rate upstream request failed");
            rate_unavailable(from, to)
        })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), from, to, "rate upstream returned error");
            return Err(rate_unavailable(from, to));
        }

        let document: RatesDocument = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, from, to, "rate upstream returned malformed document");
            rate_unavailable(from, to)
        })?;

        let rate = lookup_rate(&document, to).ok_or_else(|| rate_unavailable(from, to))?;

        self.cache
            .lock()
            .expect("rate cache poisoned")
            .cache_set(key, rate);
        tracing::debug!(from, to, %rate, "conversion rate cached");

        Ok(rate)
    }
}

fn pair_key(from: &str, to: &str) -> String {
    format!("{}:{}", from, to)
}

fn rate_unavailable(from: &str, to: &str) -> WalletError {
    WalletError::RateUnavailable {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// Pull a usable (strictly positive) rate out of an upstream document
fn lookup_rate(document: &RatesDocument, to: &str) -> Option<Decimal> {
    document
        .rates
        .get(to)
        .copied()
        .filter(|rate| rate.is_sign_positive() && !rate.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_provider() -> RateProvider {
        // Unroutable base URL: any cache miss fails fast instead of
        // silently hitting a live upstream from unit tests.
        RateProvider::new(&RatesConfig {
            api_url: "http://127.0.0.1:1/latest".to_string(),
            ttl_secs: 3600,
        })
    }

    #[test]
    fn test_document_parsing_and_lookup() {
        let document: RatesDocument =
            serde_json::from_str(r#"{"rates": {"USD": 0.27, "EUR": 0.24, "XXX": 0}}"#).unwrap();

        assert_eq!(lookup_rate(&document, "USD"), Some(Decimal::new(27, 2)));
        assert_eq!(lookup_rate(&document, "XXX"), None, "zero rate is unusable");
        assert_eq!(lookup_rate(&document, "GBP"), None, "missing pair");
    }

    #[tokio::test]
    async fn test_same_currency_is_identity() {
        let provider = offline_provider();
        assert_eq!(provider.rate("USD", "USD").await.unwrap(), Decimal::ONE);
    }

    #[tokio::test]
    async fn test_primed_cache_hit_skips_upstream() {
        let provider = offline_provider();
        provider.prime("SAR", "USD", Decimal::new(27, 2));

        let rate = provider.rate("SAR", "USD").await.unwrap();
        assert_eq!(rate, Decimal::new(27, 2));
    }

    #[tokio::test]
    async fn test_pair_key_is_directional() {
        let provider = offline_provider();
        provider.prime("SAR", "USD", Decimal::new(27, 2));

        // The reverse pair is a different key and must miss (and fail,
        // since the upstream is unreachable).
        let reverse = provider.rate("USD", "SAR").await;
        assert!(matches!(
            reverse,
            Err(WalletError::RateUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_rate_unavailable() {
        let provider = offline_provider();
        let result = provider.rate("SAR", "USD").await;
        assert!(matches!(result, Err(WalletError::RateUnavailable { .. })));
    }
}
