use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use crate::{EmitError, Emitter, EmitterConfig, PayloadPolicy};

/// Logs go to stderr so stdout carries nothing but payload lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Shared body of the `timestamps` and `randoms` binaries.
pub async fn run(policy: PayloadPolicy) -> anyhow::Result<()> {
    init_tracing();

    let rng = StdRng::try_from_os_rng()
        .map_err(|e| EmitError::Entropy(e.to_string()))
        .context("Failed to seed generator")?;

    let config = EmitterConfig::default();
    let mut stdout = tokio::io::stdout();
    Emitter::from_config(rng, policy, &config)
        .run(config.count, &mut stdout)
        .await
        .context("Failed to emit events")?;

    Ok(())
}
