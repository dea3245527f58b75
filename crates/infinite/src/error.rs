use infinite_core::ProgramError;
use thiserror::Error;
use tokio::task::JoinError;

/// Errors returned by the prompt entry points.
///
/// Cancelling a prompt is not an error; `display` returns `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum InfError {
    /// Options rejected before anything was drawn.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Program(#[from] ProgramError),

    /// The background task of a spinner or progress prompt panicked.
    #[error("background task failed: {0}")]
    Task(#[from] JoinError),
}

pub(crate) fn invalid(msg: impl Into<String>) -> InfError {
    InfError::InvalidConfig(msg.into())
}
