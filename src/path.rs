//! Solution paths, rebuilt from the came-from table.

use std::fmt;

use crate::errors::{PuzzleError, Result};
use crate::search::SearchTables;
use crate::state::{Board, Slide};

/// An ordered sequence of boards from start to goal, both inclusive.
///
/// Paths hold at least one board; a start equal to the goal yields a
/// single-board, zero-move path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    boards: Vec<Board>,
}

impl Path {
    /// Walk the came-from table backwards from `goal`, then reverse
    /// into start-to-goal order.
    ///
    /// The start is recognized by its `None` predecessor. A board with
    /// no table entry at all means the table is inconsistent; that is
    /// reported as an error, never papered over with a truncated path.
    pub fn reconstruct(tables: &SearchTables, goal: Board) -> Result<Path> {
        let mut boards = vec![goal];
        let mut current = goal;

        loop {
            match tables.came_from.get(&current) {
                Some(Some(previous)) => {
                    boards.push(*previous);
                    current = *previous;
                }
                Some(None) => break,
                None => return Err(PuzzleError::UnreconstructablePath(current)),
            }
        }

        boards.reverse();
        Ok(Path { boards })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of boards, start and goal included.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Number of slides taken, one less than the number of boards.
    pub fn moves(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    pub fn start(&self) -> &Board {
        self.boards.first().unwrap()
    }

    pub fn end(&self) -> &Board {
        self.boards.last().unwrap()
    }

    /// The slide taken between each consecutive pair of boards.
    pub fn slides(&self) -> Vec<Slide> {
        self.boards
            .windows(2)
            .filter_map(|pair| Slide::between(&pair[0], &pair[1]))
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, board) in self.boards.iter().enumerate() {
            if step > 0 {
                writeln!(f)?;
            }
            writeln!(f, "step {}", step)?;
            write!(f, "{}", board)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn tables(entries: Vec<(Board, Option<Board>)>) -> SearchTables {
        let mut came_from = HashMap::new();
        let mut cost = HashMap::new();
        for (i, (board, previous)) in entries.into_iter().enumerate() {
            came_from.insert(board, previous);
            cost.insert(board, i as u32);
        }
        SearchTables { cost, came_from }
    }

    #[test]
    fn walks_back_to_the_start() {
        let start = Board::goal().slide(Slide::Up).unwrap();
        let goal = Board::goal();

        let path = Path::reconstruct(
            &tables(vec![(start, None), (goal, Some(start))]),
            goal,
        )
        .unwrap();

        assert_eq!(path.boards(), &[start, goal]);
        assert_eq!(path.moves(), 1);
        assert_eq!(path.slides(), vec![Slide::Down]);
    }

    #[test]
    fn start_is_its_own_path() {
        let goal = Board::goal();
        let path = Path::reconstruct(&tables(vec![(goal, None)]), goal).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), path.end());
    }

    #[test]
    fn missing_entry_is_an_error() {
        let middle = Board::goal().slide(Slide::Up).unwrap();
        let goal = Board::goal();

        // The goal points at a board the table has never heard of.
        let broken = tables(vec![(goal, Some(middle))]);
        assert!(matches!(
            Path::reconstruct(&broken, goal),
            Err(PuzzleError::UnreconstructablePath(b)) if b == middle
        ));
    }

    #[test]
    fn display_numbers_each_step() {
        let start = Board::goal().slide(Slide::Up).unwrap();
        let goal = Board::goal();
        let path = Path::reconstruct(
            &tables(vec![(start, None), (goal, Some(start))]),
            goal,
        )
        .unwrap();

        let text = format!("{}", path);
        assert!(text.starts_with("step 0\n"));
        assert!(text.contains("step 1\n"));
        assert!(text.ends_with("7 8 .\n"));
    }
}
