// tests/support/mocks/mod.rs
pub mod time;
pub mod util;

pub use time::fixed_now;
pub use util::{DummyClock, SequentialIds, SteppingClock};
