//! Error types for acquisition strategies.

use thiserror::Error;

/// Why a single strategy produced no records. The orchestrator logs these
/// and moves on; they never reach the caller.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// Fetch or model call failed, timed out, or had no credential.
    #[error("network error: {0}")]
    Network(String),

    /// HTML structure or JSON shape was not what we expected.
    #[error("parse error: {0}")]
    Parse(String),

    /// A field in an AI reply element was missing or invalid.
    #[error("validation error: {0}")]
    Validation(String),
}

impl StrategyError {
    /// Wraps an error chain, keeping every context layer in the message.
    pub fn network(err: anyhow::Error) -> Self {
        StrategyError::Network(format!("{:#}", err))
    }

    pub fn parse(err: anyhow::Error) -> Self {
        StrategyError::Parse(format!("{:#}", err))
    }
}

/// Fatal acquisition failures.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Even the static catalog produced nothing. Indicates a broken build,
    /// not a transient condition.
    #[error("no strategy produced any records for genre '{genre}' (static catalog is empty)")]
    Exhausted { genre: String },
}
