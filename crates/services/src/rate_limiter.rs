use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use interview_core::time::{from_millis, to_millis};
use storage::repository::KeyValueStore;
use tracing::{debug, error, info, warn};

use crate::Clock;

const LOG_KEY_PREFIX: &str = "rate_limit_";

/// Sliding-window limit: at most `max_requests` within any `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window: Duration,
}

impl RateLimitConfig {
    /// 10 assistant requests per minute.
    pub const AI_ASSISTANT: Self = Self::per_minutes(10, 1);
    /// 20 generic API calls per minute.
    pub const API_CALLS: Self = Self::per_minutes(20, 1);
    /// 5 login attempts per 5 minutes.
    pub const LOGIN_ATTEMPTS: Self = Self::per_minutes(5, 5);
    /// 3 resume generations per minute.
    pub const RESUME_GENERATION: Self = Self::per_minutes(3, 1);

    const fn per_minutes(max_requests: u32, minutes: i64) -> Self {
        Self {
            max_requests,
            window: Duration::minutes(minutes),
        }
    }
}

/// Snapshot of a limiter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub remaining: u32,
    /// When the oldest request in the window expires (or `now + window` if none).
    pub reset_at: DateTime<Utc>,
}

/// Client-side request limiter over persisted request timestamps.
///
/// Each key keeps a JSON array of epoch-millisecond timestamps. Storage
/// failures are absorbed: an unreadable log counts as empty and a failed
/// write is logged.
#[derive(Clone)]
pub struct RateLimiter {
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn KeyValueStore>) -> Self {
        Self { clock, store }
    }

    /// Record a request for `key` if the window has room.
    ///
    /// Returns `false` (and records nothing) when the limit is reached.
    pub async fn check(&self, key: &str, config: RateLimitConfig) -> bool {
        let now = self.clock.now();
        let mut recent = self.recent_requests(key, config, now).await;

        if recent.len() >= config.max_requests as usize {
            warn!(key, max = config.max_requests, "rate limit exceeded");
            return false;
        }

        recent.push(now);
        self.write_log(key, &recent).await;
        true
    }

    /// Requests still allowed in the current window.
    pub async fn remaining(&self, key: &str, config: RateLimitConfig) -> u32 {
        let now = self.clock.now();
        let recent = self.recent_requests(key, config, now).await;
        remaining_for(config, recent.len())
    }

    pub async fn info(&self, key: &str, config: RateLimitConfig) -> RateLimitInfo {
        let now = self.clock.now();
        let recent = self.recent_requests(key, config, now).await;
        let oldest = recent.iter().min().copied().unwrap_or(now);

        RateLimitInfo {
            remaining: remaining_for(config, recent.len()),
            reset_at: oldest + config.window,
        }
    }

    /// Time until the oldest request leaves the window, never negative.
    pub async fn time_until_reset(&self, key: &str, config: RateLimitConfig) -> Duration {
        let info = self.info(key, config).await;
        (info.reset_at - self.clock.now()).max(Duration::zero())
    }

    /// Forget every recorded request for `key`.
    pub async fn reset(&self, key: &str) {
        match self.store.remove(&log_key(key)).await {
            Ok(()) => info!(key, "rate limit reset"),
            Err(err) => error!(key, error = %err, "failed to reset rate limit"),
        }
    }

    /// Forget every limiter key.
    pub async fn clear_all(&self) {
        let keys = match self.store.keys_with_prefix(LOG_KEY_PREFIX).await {
            Ok(keys) => keys,
            Err(err) => {
                error!(error = %err, "failed to list rate limit keys");
                return;
            }
        };

        for key in &keys {
            if let Err(err) = self.store.remove(key).await {
                error!(key = %key, error = %err, "failed to clear rate limit");
            }
        }
        info!(cleared = keys.len(), "all rate limits cleared");
    }

    async fn recent_requests(
        &self,
        key: &str,
        config: RateLimitConfig,
        now: DateTime<Utc>,
    ) -> Vec<DateTime<Utc>> {
        self.read_log(key)
            .await
            .into_iter()
            .filter(|at| now - *at < config.window)
            .collect()
    }

    async fn read_log(&self, key: &str) -> Vec<DateTime<Utc>> {
        let raw = match self.store.get(&log_key(key)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, error = %err, "failed to read rate limit log");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(millis) => millis.into_iter().filter_map(from_millis).collect(),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable rate limit log");
                Vec::new()
            }
        }
    }

    async fn write_log(&self, key: &str, requests: &[DateTime<Utc>]) {
        let millis: Vec<i64> = requests.iter().copied().map(to_millis).collect();
        let encoded = match serde_json::to_string(&millis) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(key, error = %err, "failed to encode rate limit log");
                return;
            }
        };

        if let Err(err) = self.store.set(&log_key(key), &encoded).await {
            error!(key, error = %err, "failed to write rate limit log");
        } else {
            debug!(key, count = requests.len(), "rate limit log updated");
        }
    }
}

fn log_key(key: &str) -> String {
    format!("{LOG_KEY_PREFIX}{key}")
}

fn remaining_for(config: RateLimitConfig, used: usize) -> u32 {
    let used = u32::try_from(used).unwrap_or(u32::MAX);
    config.max_requests.saturating_sub(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    const TWO_PER_MINUTE: RateLimitConfig = RateLimitConfig {
        max_requests: 2,
        window: Duration::minutes(1),
    };

    fn limiter(clock: Clock, store: &Arc<InMemoryStore>) -> RateLimiter {
        RateLimiter::new(clock, store.clone())
    }

    #[tokio::test]
    async fn denies_once_window_is_full() {
        let store = Arc::new(InMemoryStore::new());
        let limiter = limiter(Clock::fixed(fixed_now()), &store);

        assert!(limiter.check("chat", TWO_PER_MINUTE).await);
        assert!(limiter.check("chat", TWO_PER_MINUTE).await);
        assert!(!limiter.check("chat", TWO_PER_MINUTE).await);
        assert_eq!(limiter.remaining("chat", TWO_PER_MINUTE).await, 0);

        let stored = store.get("rate_limit_chat").await.unwrap().unwrap();
        let millis: Vec<i64> = serde_json::from_str(&stored).unwrap();
        assert_eq!(millis.len(), 2);
    }

    #[tokio::test]
    async fn requests_expire_at_window_edge() {
        let store = Arc::new(InMemoryStore::new());
        let mut clock = Clock::fixed(fixed_now());
        assert!(limiter(clock, &store).check("chat", TWO_PER_MINUTE).await);
        clock.advance(Duration::seconds(30));
        assert!(limiter(clock, &store).check("chat", TWO_PER_MINUTE).await);

        clock.advance(Duration::seconds(29));
        assert!(!limiter(clock, &store).check("chat", TWO_PER_MINUTE).await);

        // first request is now exactly one window old, which no longer counts
        clock.advance(Duration::seconds(1));
        assert_eq!(limiter(clock, &store).remaining("chat", TWO_PER_MINUTE).await, 1);
        assert!(limiter(clock, &store).check("chat", TWO_PER_MINUTE).await);
    }

    #[tokio::test]
    async fn info_reports_reset_from_oldest_request() {
        let store = Arc::new(InMemoryStore::new());
        let mut clock = Clock::fixed(fixed_now());
        limiter(clock, &store).check("chat", TWO_PER_MINUTE).await;
        clock.advance(Duration::seconds(20));

        let limiter = limiter(clock, &store);
        let info = limiter.info("chat", TWO_PER_MINUTE).await;
        assert_eq!(info.remaining, 1);
        assert_eq!(info.reset_at, fixed_now() + Duration::minutes(1));
        assert_eq!(
            limiter.time_until_reset("chat", TWO_PER_MINUTE).await,
            Duration::seconds(40)
        );
    }

    #[tokio::test]
    async fn empty_log_resets_a_full_window_from_now() {
        let store = Arc::new(InMemoryStore::new());
        let limiter = limiter(Clock::fixed(fixed_now()), &store);
        let info = limiter.info("idle", TWO_PER_MINUTE).await;
        assert_eq!(info.remaining, 2);
        assert_eq!(info.reset_at, fixed_now() + Duration::minutes(1));
    }

    #[tokio::test]
    async fn reset_and_clear_all_remove_logs() {
        let store = Arc::new(InMemoryStore::new());
        store.set("interview_user_id", "user_keep").await.unwrap();
        let limiter = limiter(Clock::fixed(fixed_now()), &store);
        limiter.check("a", TWO_PER_MINUTE).await;
        limiter.check("b", TWO_PER_MINUTE).await;

        limiter.reset("a").await;
        assert_eq!(limiter.remaining("a", TWO_PER_MINUTE).await, 2);
        assert_eq!(limiter.remaining("b", TWO_PER_MINUTE).await, 1);

        limiter.clear_all().await;
        assert!(store.keys_with_prefix("rate_limit_").await.unwrap().is_empty());
        assert!(store.get("interview_user_id").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unreadable_log_counts_as_empty() {
        let store = Arc::new(InMemoryStore::new());
        store.set("rate_limit_chat", "oops").await.unwrap();
        let limiter = limiter(Clock::fixed(fixed_now()), &store);
        assert_eq!(limiter.remaining("chat", TWO_PER_MINUTE).await, 2);
    }

    #[test]
    fn presets_match_documented_limits() {
        assert_eq!(RateLimitConfig::AI_ASSISTANT.max_requests, 10);
        assert_eq!(RateLimitConfig::LOGIN_ATTEMPTS.window, Duration::minutes(5));
        assert_eq!(RateLimitConfig::RESUME_GENERATION.max_requests, 3);
        assert_eq!(RateLimitConfig::API_CALLS.max_requests, 20);
    }
}
