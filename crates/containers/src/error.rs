use thiserror::Error;

/// Failure modes shared by the containers in this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    #[error("container is empty")]
    Empty,
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("container is full")]
    Full,
    #[error("value not found")]
    NotFound,
}
