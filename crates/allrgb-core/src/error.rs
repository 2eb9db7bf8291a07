use thiserror::Error;

pub type Result<T> = std::result::Result<T, AllRgbError>;

#[derive(Debug, Error)]
pub enum AllRgbError {
    /// Bad input handed to the core: dimensions, bucket values, cube bits.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A broken internal invariant. Never recoverable.
    #[error("internal consistency violated: {0}")]
    Consistency(String),

    #[error("plan format error: {0}")]
    PlanFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
