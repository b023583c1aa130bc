use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AvlError {
    #[error("node allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),
    #[error("node arena is full ({} slots)", u32::MAX)]
    CapacityExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal order: {0:?}")]
pub struct ParseOrderError(pub String);

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid option: {0}")]
    InvalidOption(i64),
    #[error("expected an integer, got {0:?}")]
    InvalidNumber(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error(transparent)]
    Tree(#[from] AvlError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
