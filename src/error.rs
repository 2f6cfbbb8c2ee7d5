use std::collections::TryReserveError;

use thiserror::Error;

/// The error returned when memory for a new tree node could not be allocated
///
/// The tree is left exactly as it was before the failed insertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to allocate memory for a tree node")]
pub struct AllocError {
    #[from]
    source: TryReserveError,
}
