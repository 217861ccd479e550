//! Per-address request throttling for the public routes.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

/// Requests per second a single address sustains once its burst is spent.
const RATE_PER_SECOND: f64 = 30.0;
/// Requests a single address may fire back to back.
const BURST: f64 = 30.0;
/// Buckets idle at least this long are dropped on the next sweep.
const IDLE_EXPIRY: Duration = Duration::from_secs(60);
/// Tracked addresses before a sweep runs.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn full(now: Instant) -> Self {
        Self {
            tokens: BURST,
            last_refill: now,
        }
    }

    fn try_take(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_refill);
        self.tokens = (self.tokens + elapsed.as_secs_f64() * RATE_PER_SECOND).min(BURST);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Token-bucket limiter keyed by client address, shared across all routes.
#[derive(Debug, Clone, Default)]
pub struct RateLimiter {
    buckets: Arc<Mutex<HashMap<IpAddr, TokenBucket>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    async fn try_acquire(&self, addr: IpAddr, now: Instant) -> bool {
        let mut buckets = self.buckets.lock().await;

        if buckets.len() >= SWEEP_THRESHOLD {
            buckets.retain(|_, bucket| {
                now.saturating_duration_since(bucket.last_refill) < IDLE_EXPIRY
            });
        }

        buckets
            .entry(addr)
            .or_insert_with(|| TokenBucket::full(now))
            .try_take(now)
    }

    #[cfg(test)]
    async fn tracked_addresses(&self) -> usize {
        self.buckets.lock().await.len()
    }
}

pub async fn throttle(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.try_acquire(addr.ip(), Instant::now()).await {
        next.run(request).await
    } else {
        StatusCode::TOO_MANY_REQUESTS.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn addr(last_octet: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet))
    }

    #[tokio::test]
    async fn a_full_burst_passes_back_to_back() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..30 {
            assert!(limiter.try_acquire(addr(1), now).await);
        }
        assert!(!limiter.try_acquire(addr(1), now).await);
    }

    #[tokio::test]
    async fn tokens_refill_at_the_sustained_rate() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        for _ in 0..30 {
            assert!(limiter.try_acquire(addr(1), start).await);
        }

        // 100ms at 30 rps buys three more requests.
        let later = start + Duration::from_millis(100);
        for _ in 0..3 {
            assert!(limiter.try_acquire(addr(1), later).await);
        }
        assert!(!limiter.try_acquire(addr(1), later).await);
    }

    #[tokio::test]
    async fn a_second_of_idle_restores_the_full_burst() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        for _ in 0..30 {
            assert!(limiter.try_acquire(addr(1), start).await);
        }
        assert!(!limiter.try_acquire(addr(1), start).await);

        let later = start + Duration::from_secs(1);
        for _ in 0..30 {
            assert!(limiter.try_acquire(addr(1), later).await);
        }
        assert!(!limiter.try_acquire(addr(1), later).await);
    }

    #[tokio::test]
    async fn addresses_are_limited_independently() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..30 {
            assert!(limiter.try_acquire(addr(1), now).await);
        }
        assert!(!limiter.try_acquire(addr(1), now).await);

        assert!(limiter.try_acquire(addr(2), now).await);
    }

    #[tokio::test]
    async fn idle_buckets_are_swept_when_the_table_grows() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        for i in 0..SWEEP_THRESHOLD as u32 {
            let filler = IpAddr::V4(Ipv4Addr::from(0x0A00_0000 + i));
            assert!(limiter.try_acquire(filler, start).await);
        }
        assert_eq!(limiter.tracked_addresses().await, SWEEP_THRESHOLD);

        let later = start + IDLE_EXPIRY + Duration::from_secs(1);
        assert!(limiter.try_acquire(addr(1), later).await);
        assert_eq!(limiter.tracked_addresses().await, 1);
    }
}
