// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use manuscript_core::application::ports::{time::Clock, util::IdGenerator};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use uuid::Uuid;

use super::time::fixed_now;

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Starts at `fixed_now()` and moves one second forward on every read, so
/// ordering by timestamp is deterministic.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
