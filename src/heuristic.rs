//! Distance estimates between a board and the goal.
//!
//! Both estimators are admissible and consistent, which is what makes
//! the first goal pop of the A* loop cost-optimal. The search core
//! accepts any `Fn(&Board, &Board) -> u32` and treats it opaquely;
//! nothing here is special to it.

use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;
use crate::state::{Board, SIDE};

/// Misplaced tiles: the number of non-blank cells whose value differs
/// from the goal's value at the same position.
///
/// The blank is excluded from the count so the estimate stays exact;
/// counting it would overstate boards where only the blank is away
/// from home.
pub fn hamming(board: &Board, goal: &Board) -> u32 {
    let mut misplaced = 0;
    for row in 0..SIDE {
        for col in 0..SIDE {
            let value = board.get(row, col);
            if value != 0 && value != goal.get(row, col) {
                misplaced += 1;
            }
        }
    }
    misplaced
}

/// Total city-block distance each non-blank tile must still travel,
/// with every tile located independently in both boards.
pub fn manhattan(board: &Board, goal: &Board) -> u32 {
    let mut distance = 0;
    for tile in 1..(SIDE * SIDE) as u8 {
        let (row, col) = board.position(tile);
        let (goal_row, goal_col) = goal.position(tile);
        distance += (row as isize - goal_row as isize).abs() as u32;
        distance += (col as isize - goal_col as isize).abs() as u32;
    }
    distance
}

/// A named estimator, as selected on the command line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HeuristicKind {
    Hamming,
    Manhattan,
}

impl HeuristicKind {
    /// The estimator function this selection names.
    pub fn function(self) -> fn(&Board, &Board) -> u32 {
        match self {
            HeuristicKind::Hamming => hamming,
            HeuristicKind::Manhattan => manhattan,
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hamming" => Ok(HeuristicKind::Hamming),
            "manhattan" => Ok(HeuristicKind::Manhattan),
            _ => Err(PuzzleError::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Hamming => write!(f, "hamming"),
            HeuristicKind::Manhattan => write!(f, "manhattan"),
        }
    }
}
