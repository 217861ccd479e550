use std::time::{Duration, Instant};

/// Admits at most one submission per window. Submissions arriving inside
/// the window are dropped, not queued; a held return key stays bounded.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self) -> bool {
        self.try_accept_at(Instant::now())
    }

    fn try_accept_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.window {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
