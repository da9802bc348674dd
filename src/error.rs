use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("failed to write event output: {0}")]
    Write(#[from] std::io::Error),

    #[error("wall clock is before the unix epoch ({0} ms)")]
    ClockBeforeEpoch(i64),
}

pub type Result<T> = std::result::Result<T, EmitError>;
