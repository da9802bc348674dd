use std::time::Duration;

use crate::delay::Jitter;

pub const DEFAULT_COUNT: u32 = 100;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_JITTER_SPAN: Duration = Duration::from_secs(1);

/// Compiled-in run parameters shared by both binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterConfig {
    pub count: u32,
    pub base_delay: Duration,
    pub jitter_span: Duration,
}

impl EmitterConfig {
    pub fn jitter(&self) -> Jitter {
        Jitter::new(self.base_delay, self.jitter_span)
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            base_delay: DEFAULT_BASE_DELAY,
            jitter_span: DEFAULT_JITTER_SPAN,
        }
    }
}

#[test]
fn default_jitter_window() {
    let cfg = EmitterConfig::default();
    assert_eq!(cfg.count, 100);
    assert_eq!(cfg.jitter().min(), Duration::from_micros(500_000));
    assert_eq!(cfg.jitter().max(), Duration::from_micros(1_499_999));
}
