//! A* solver for the 8-puzzle, the 3x3 sliding tile game.
//!
//! A [Board] is an immutable permutation of the values 0 through 8,
//! with 0 standing for the blank. [solve] runs A* from a start board
//! towards a goal board with any injected heuristic and returns the
//! optimal [Path]; [hamming] (misplaced tiles) and [manhattan] are the
//! two classic admissible estimators provided here.

mod errors;
mod heuristic;
mod path;
mod search;
mod state;

pub use errors::PuzzleError;
pub use errors::Result;

pub use heuristic::hamming;
pub use heuristic::manhattan;
pub use heuristic::HeuristicKind;
pub use path::Path;
pub use search::solve;
pub use search::SearchOptions;
pub use search::SearchTables;
pub use search::Searcher;
pub use state::Board;
pub use state::Slide;
