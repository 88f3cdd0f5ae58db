//! Application state shared across handlers.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{Quota, RateLimiter};

use memos_core::{ActivityLogger, SessionRepository, Store};
use memos_db::Database;

use crate::config::RateLimitConfig;
use crate::services::TagService;

pub type GlobalRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

#[derive(Clone)]
pub struct AppState {
    pub tags: TagService,
    pub sessions: Arc<dyn SessionRepository>,
    /// Global rate limiter (None if rate limiting is disabled).
    pub rate_limiter: Option<Arc<GlobalRateLimiter>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        activities: Arc<dyn ActivityLogger>,
        sessions: Arc<dyn SessionRepository>,
    ) -> Self {
        Self {
            tags: TagService::new(store, activities),
            sessions,
            rate_limiter: None,
        }
    }

    /// State backed by the PostgreSQL repositories of `db`.
    pub fn from_database(db: &Database) -> Self {
        Self::new(
            Arc::new(db.clone()),
            Arc::new(db.activities.clone()),
            Arc::new(db.sessions.clone()),
        )
    }

    /// State backed by one object implementing every store trait.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: Store + ActivityLogger + SessionRepository + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    pub fn with_rate_limit(mut self, config: Option<RateLimitConfig>) -> Self {
        self.rate_limiter = config.and_then(build_rate_limiter).map(Arc::new);
        self
    }
}

/// `requests` may be spent at once; one slot is replenished every
/// `period / requests`.
fn build_rate_limiter(config: RateLimitConfig) -> Option<GlobalRateLimiter> {
    let burst = NonZeroU32::new(config.requests)?;
    let interval = (config.period / burst.get()).max(Duration::from_nanos(1));
    let quota = Quota::with_period(interval)?.allow_burst(burst);
    Some(RateLimiter::direct(quota))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(requests: u32, period: Duration) -> GlobalRateLimiter {
        build_rate_limiter(RateLimitConfig { requests, period }).unwrap()
    }

    #[test]
    fn test_burst_is_capped_at_requests() {
        let limiter = limiter(3, Duration::from_secs(3600));
        for _ in 0..3 {
            assert!(limiter.check().is_ok());
        }
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_slot_frees_after_period_over_requests() {
        let limiter = limiter(2, Duration::from_secs(2));
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());

        std::thread::sleep(Duration::from_millis(1100));
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_zero_requests_disables_limiter() {
        assert!(build_rate_limiter(RateLimitConfig {
            requests: 0,
            period: Duration::from_secs(60),
        })
        .is_none());
    }
}
