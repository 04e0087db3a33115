use thiserror::Error;

use crate::state::Board;

/// Error produced when validating a board or running a search.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Board is not a permutation of 0..=8: {0:?}")]
    InvalidBoard(Vec<u8>),

    #[error("Unreadable board, expected nine digits 0-8: {0:?}")]
    ParseBoard(String),

    #[error("Unknown heuristic: {0:?} (expected hamming or manhattan)")]
    UnknownHeuristic(String),

    #[error("No solution found, search space exhausted")]
    NoSolution,

    #[error("Step limit exhausted after {0} expansions")]
    StepLimitExhausted(usize),

    #[error("Came-from table has no entry for {0:?}")]
    UnreconstructablePath(Board),
}

/// Result when solving might fail.
pub type Result<T> = std::result::Result<T, PuzzleError>;
