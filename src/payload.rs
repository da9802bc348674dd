use std::fmt;

use rand::Rng;

use crate::error::{EmitError, Result};

/// What each emitted line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadPolicy {
    /// Wall-clock milliseconds since the unix epoch.
    Timestamp,
    /// Next raw 64-bit draw from the emitter's generator.
    RandomValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    EpochMillis(u64),
    Random(u64),
}

impl Payload {
    pub fn value(&self) -> u64 {
        match self {
            Payload::EpochMillis(v) | Payload::Random(v) => *v,
        }
    }

    pub(crate) fn produce<R: Rng, C: WallClock>(
        policy: PayloadPolicy,
        rng: &mut R,
        clock: &C,
    ) -> Result<Self> {
        match policy {
            PayloadPolicy::Timestamp => {
                let ms = clock.now_millis();
                let ms = u64::try_from(ms).map_err(|_| EmitError::ClockBeforeEpoch(ms))?;
                Ok(Payload::EpochMillis(ms))
            }
            PayloadPolicy::RandomValue => Ok(Payload::Random(rng.next_u64())),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Source of wall-clock time in milliseconds since the unix epoch.
pub trait WallClock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Wall clock anchored at `origin_ms` that advances with tokio's clock, so it
/// follows virtual time when the runtime is paused.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin_ms: i64,
    start: tokio::time::Instant,
}

impl TokioClock {
    pub fn starting_at(origin_ms: i64) -> Self {
        Self {
            origin_ms,
            start: tokio::time::Instant::now(),
        }
    }
}

impl WallClock for TokioClock {
    fn now_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.start.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.origin_ms.saturating_add(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    struct Fixed(i64);

    impl WallClock for Fixed {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn timestamp_uses_clock() {
        let mut rng = StdRng::seed_from_u64(0);
        let p = Payload::produce(PayloadPolicy::Timestamp, &mut rng, &Fixed(1_700_000_000_123))
            .unwrap();
        assert_eq!(p, Payload::EpochMillis(1_700_000_000_123));
        assert_eq!(p.to_string(), "1700000000123");
    }

    #[test]
    fn pre_epoch_clock_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Payload::produce(PayloadPolicy::Timestamp, &mut rng, &Fixed(-5)).unwrap_err();
        assert!(matches!(err, EmitError::ClockBeforeEpoch(-5)));
    }

    #[test]
    fn random_value_draws_from_generator() {
        let mut rng = StdRng::seed_from_u64(9);
        let expected = StdRng::seed_from_u64(9).next_u64();
        let p = Payload::produce(PayloadPolicy::RandomValue, &mut rng, &SystemClock).unwrap();
        assert_eq!(p, Payload::Random(expected));
        assert_eq!(p.to_string(), expected.to_string());
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_clock_follows_virtual_time() {
        let clock = TokioClock::starting_at(1_000);
        tokio::time::advance(std::time::Duration::from_millis(1_500)).await;
        assert_eq!(clock.now_millis(), 2_500);
    }
}
