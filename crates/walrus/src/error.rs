use crate::algo::Axis;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{axis} gap must be finite and non-negative, got {value}")]
    NegativeGap { axis: Axis, value: f64 },
    #[error("box at index {index} has a negative or non-finite rectangle")]
    InvalidBox { index: usize },
    #[error("a computation is already running on this runner")]
    AlreadyRunning,
    #[error("overlap removal aborted before completion")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, Error>;
