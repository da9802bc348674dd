pub mod cli;
pub mod config;
pub mod delay;
pub mod emitter;
pub mod error;
pub mod payload;

pub use config::EmitterConfig;
pub use delay::{DelaySource, FixedDelays, Jitter};
pub use emitter::{Emitter, Event};
pub use error::{EmitError, Result};
pub use payload::{Payload, PayloadPolicy, SystemClock, TokioClock, WallClock};
