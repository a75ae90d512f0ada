//! Request pacing against the price source's rate limit.
//!
//! The limit is a named policy (calls per window plus a fixed inter-event
//! pause), not an inline delay buried in the valuation loop. Lookups are
//! paced individually through a rate limiter; the pause between buy events
//! is an additional suspension point independent of lookup latency.

use std::future::Future;
use std::num::NonZeroU32;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Named request-rate policy for a price source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingPolicy {
    /// Maximum price lookups per quota window.
    pub quota_limit: u32,
    /// Window the limit applies to.
    pub quota_window: Duration,
    /// Fixed pause between consecutive buy events, independent of lookup
    /// latency.
    pub event_pause: Duration,
}

impl PacingPolicy {
    /// CoinGecko's free tier tolerates roughly 10 calls per minute.
    pub const fn coingecko_default() -> Self {
        Self {
            quota_limit: 10,
            quota_window: Duration::from_secs(60),
            event_pause: Duration::from_millis(1400),
        }
    }
}

/// Suspension points the valuator awaits while walking the schedule.
pub trait Pacer: Send + Sync {
    /// Awaits rate budget for one price lookup.
    fn before_lookup<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

    /// Fixed pause after a snapshot is emitted.
    fn between_events<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Production pacer: a direct rate limiter sized from the policy's quota,
/// plus the policy's fixed inter-event pause.
pub struct QuotaPacer {
    limiter: Arc<DirectRateLimiter>,
    event_pause: Duration,
}

impl QuotaPacer {
    pub fn new(policy: &PacingPolicy) -> Self {
        let quota = quota_from_window(policy.quota_window, policy.quota_limit);
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            event_pause: policy.event_pause,
        }
    }
}

impl Pacer for QuotaPacer {
    fn before_lookup<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move { self.limiter.until_ready().await })
    }

    fn between_events<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        let pause = self.event_pause;
        Box::pin(async move { tokio::time::sleep(pause).await })
    }
}

/// Immediate pacer for deterministic tests.
#[derive(Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn before_lookup<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async {})
    }

    fn between_events<'a>(&'a self) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async {})
    }
}

fn quota_from_window(quota_window: Duration, quota_limit: u32) -> Quota {
    let safe_limit = quota_limit.max(1);
    let burst = NonZeroU32::new(safe_limit).expect("safe limit must be non-zero");

    let seconds_per_cell = (quota_window.as_secs_f64() / f64::from(safe_limit)).max(0.001);
    let period = Duration::from_secs_f64(seconds_per_cell);

    Quota::with_period(period)
        .expect("period is always greater than zero")
        .allow_burst(burst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_the_polite_public_api_limit() {
        let policy = PacingPolicy::coingecko_default();
        assert_eq!(policy.quota_limit, 10);
        assert_eq!(policy.quota_window, Duration::from_secs(60));
        assert_eq!(policy.event_pause, Duration::from_millis(1400));
    }

    #[tokio::test]
    async fn quota_pacer_grants_initial_burst_without_waiting() {
        let pacer = QuotaPacer::new(&PacingPolicy {
            quota_limit: 3,
            quota_window: Duration::from_secs(60),
            event_pause: Duration::from_millis(1),
        });

        let started = std::time::Instant::now();
        for _ in 0..3 {
            pacer.before_lookup().await;
        }
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn noop_pacer_never_suspends() {
        let pacer = NoopPacer;
        pacer.before_lookup().await;
        pacer.between_events().await;
    }
}
