use std::time::Duration;

use rand::Rng;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    config::EmitterConfig,
    delay::{DelaySource, Jitter},
    error::Result,
    payload::{Payload, PayloadPolicy, SystemClock, WallClock},
};

/// One emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// 1-based position in the run.
    pub index: u32,
    /// Pause taken before this event was emitted.
    pub delay: Duration,
    pub payload: Payload,
}

/// Writes a fixed number of jittered, newline-terminated payloads.
///
/// The generator is owned by the emitter and shared between the delay draw
/// and [`PayloadPolicy::RandomValue`] payloads.
pub struct Emitter<R, D = Jitter, C = SystemClock> {
    rng: R,
    delays: D,
    clock: C,
    policy: PayloadPolicy,
}

impl<R: Rng> Emitter<R> {
    pub fn new(rng: R, policy: PayloadPolicy) -> Self {
        Self::from_config(rng, policy, &EmitterConfig::default())
    }

    pub fn from_config(rng: R, policy: PayloadPolicy, config: &EmitterConfig) -> Self {
        Self {
            rng,
            delays: config.jitter(),
            clock: SystemClock,
            policy,
        }
    }
}

impl<R, D, C> Emitter<R, D, C> {
    pub fn with_delays<D2: DelaySource>(self, delays: D2) -> Emitter<R, D2, C> {
        Emitter {
            rng: self.rng,
            delays,
            clock: self.clock,
            policy: self.policy,
        }
    }

    pub fn with_clock<C2: WallClock>(self, clock: C2) -> Emitter<R, D, C2> {
        Emitter {
            rng: self.rng,
            delays: self.delays,
            clock,
            policy: self.policy,
        }
    }

    pub fn policy(&self) -> PayloadPolicy {
        self.policy
    }
}

impl<R, D, C> Emitter<R, D, C>
where
    R: Rng,
    D: DelaySource,
    C: WallClock,
{
    /// Emits `count` events to `out`, flushing after every line.
    ///
    /// Stops at the first write failure. Dropping the returned future cancels
    /// the run at the current delay.
    pub async fn run<W>(&mut self, count: u32, out: &mut W) -> Result<Vec<Event>>
    where
        W: AsyncWrite + Unpin,
    {
        info!(count, policy = ?self.policy, "starting emitter");
        let start = tokio::time::Instant::now();
        let mut events = Vec::with_capacity(count as usize);

        for index in 1..=count {
            let delay = self.delays.next_delay(&mut self.rng);
            tokio::time::sleep(delay).await;

            let payload = Payload::produce(self.policy, &mut self.rng, &self.clock)?;
            out.write_all(format!("{payload}\n").as_bytes()).await?;
            out.flush().await?;

            let delay_us = u64::try_from(delay.as_micros()).unwrap_or(u64::MAX);
            debug!(index, delay_us, %payload, "emitted");
            events.push(Event {
                index,
                delay,
                payload,
            });
        }

        info!(elapsed = ?start.elapsed(), "emitter finished");
        Ok(events)
    }
}
