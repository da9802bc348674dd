use std::time::Duration;

use rand::Rng;

/// Supplies the pause taken before each event.
///
/// The emitter hands over its own generator so a jittered source draws from
/// the same stream as the random payloads.
pub trait DelaySource {
    fn next_delay<R: Rng>(&mut self, rng: &mut R) -> Duration;
}

/// Uniform delay in `[base, base + spread)` at microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    base: Duration,
    spread_us: u64,
}

impl Jitter {
    pub fn new(base: Duration, spread: Duration) -> Self {
        Self {
            base,
            spread_us: u64::try_from(spread.as_micros()).unwrap_or(u64::MAX),
        }
    }

    pub fn min(&self) -> Duration {
        self.base
    }

    /// Largest delay this source can produce.
    pub fn max(&self) -> Duration {
        self.base + Duration::from_micros(self.spread_us.saturating_sub(1))
    }
}

impl DelaySource for Jitter {
    fn next_delay<R: Rng>(&mut self, rng: &mut R) -> Duration {
        if self.spread_us == 0 {
            return self.base;
        }
        self.base + Duration::from_micros(rng.random_range(0..self.spread_us))
    }
}

/// Replays a fixed list of delays, wrapping around once exhausted.
#[derive(Debug, Clone, Default)]
pub struct FixedDelays {
    delays: Vec<Duration>,
    pos: usize,
}

impl FixedDelays {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self { delays, pos: 0 }
    }

    pub fn from_micros(micros: impl IntoIterator<Item = u64>) -> Self {
        Self::new(micros.into_iter().map(Duration::from_micros).collect())
    }
}

impl DelaySource for FixedDelays {
    fn next_delay<R: Rng>(&mut self, _rng: &mut R) -> Duration {
        if self.delays.is_empty() {
            return Duration::ZERO;
        }
        let d = self.delays[self.pos % self.delays.len()];
        self.pos = (self.pos + 1) % self.delays.len();
        d
    }
}
