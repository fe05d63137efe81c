use thiserror::Error;

/// Errors that occur when decoding a [`RawSolution`](crate::RawSolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolutionError {
    /// The status code does not name any known solution kind.
    #[error("corrupted solution: unknown status {status}")]
    CorruptedStatus { status: i32 },

    /// A finite solution claims a number of roots outside `0..=2`.
    #[error("corrupted solution: invalid root count {count}")]
    InvalidRootCount { count: i32 },
}
