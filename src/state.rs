//! The board value type and blank movements.

use std::fmt;
use std::str::FromStr;

use crate::errors::{PuzzleError, Result};

pub(crate) const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;

/// A movement of the blank cell.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

const SLIDES: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

impl Slide {
    /// Enumerates all slides in a fixed order.
    ///
    /// Successor generation follows this order, which pins down the
    /// order boards enter the search frontier.
    pub fn all() -> impl Iterator<Item = Self> {
        SLIDES.iter().cloned()
    }

    pub fn reverse(&self) -> Slide {
        match self {
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }

    /// The slide that turns `from` into `to`, when the two boards are
    /// exactly one move apart.
    pub fn between(from: &Board, to: &Board) -> Option<Slide> {
        let (fr, fc) = from.blank();
        let (tr, tc) = to.blank();
        let slide = match (tr as isize - fr as isize, tc as isize - fc as isize) {
            (-1, 0) => Slide::Up,
            (1, 0) => Slide::Down,
            (0, -1) => Slide::Left,
            (0, 1) => Slide::Right,
            _ => return None,
        };
        // The blank displacement alone does not prove a single swap.
        if from.slide(slide).as_ref() == Some(to) {
            Some(slide)
        } else {
            None
        }
    }

    fn offset(&self) -> (isize, isize) {
        match self {
            Slide::Up => (-1, 0),
            Slide::Down => (1, 0),
            Slide::Left => (0, -1),
            Slide::Right => (0, 1),
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slide::Up => write!(f, "up"),
            Slide::Down => write!(f, "down"),
            Slide::Left => write!(f, "left"),
            Slide::Right => write!(f, "right"),
        }
    }
}

/// A 3x3 puzzle position.
///
/// Cells are stored row-major, with 0 standing for the blank. A board
/// is an immutable value with structural equality and hashing, so it
/// serves directly as a map key during the search; every constructor
/// checks that the cells form a permutation of {0..8}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; CELLS],
}

impl Board {
    /// Build a board from rows, validating the permutation invariant.
    pub fn new(rows: [[u8; SIDE]; SIDE]) -> Result<Self> {
        let mut cells = [0u8; CELLS];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                cells[i * SIDE + j] = value;
            }
        }
        Self::from_cells(cells)
    }

    /// Build a board from row-major cells, validating the permutation
    /// invariant.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &value in cells.iter() {
            if (value as usize) >= CELLS || seen[value as usize] {
                return Err(PuzzleError::InvalidBoard(cells.to_vec()));
            }
            seen[value as usize] = true;
        }
        Ok(Self { cells })
    }

    /// The canonical goal: tiles ascending, blank last.
    pub fn goal() -> Self {
        Self {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    /// The cell value at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIDE + col]
    }

    /// Position of a cell value, which must be one of 0..=8.
    pub fn position(&self, value: u8) -> (usize, usize) {
        // Construction guarantees every value is present exactly once.
        let index = self.cells.iter().position(|&v| v == value).unwrap();
        (index / SIDE, index % SIDE)
    }

    /// Position of the blank cell.
    pub fn blank(&self) -> (usize, usize) {
        self.position(0)
    }

    /// Move the blank, returning the new board.
    ///
    /// Returns `None` when the slide would take the blank off the
    /// grid. The receiver is never mutated.
    pub fn slide(&self, slide: Slide) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc) = slide.offset();
        let (nr, nc) = (row as isize + dr, col as isize + dc);
        if nr < 0 || nr >= SIDE as isize || nc < 0 || nc >= SIDE as isize {
            return None;
        }
        let mut cells = self.cells;
        cells.swap(row * SIDE + col, nr as usize * SIDE + nc as usize);
        Some(Board { cells })
    }

    /// The slides which keep the blank on the grid.
    pub fn slides(&self) -> Vec<Slide> {
        Slide::all().filter(|&s| self.slide(s).is_some()).collect()
    }

    /// Neighboring boards, one per legal slide, in slide order.
    pub fn successors(&self) -> Vec<Board> {
        Slide::all().filter_map(|s| self.slide(s)).collect()
    }

    pub fn is_goal(&self, goal: &Board) -> bool {
        self == goal
    }

    /// Whether this board can reach the canonical goal at all.
    ///
    /// On an odd-sided grid a board is solvable exactly when the
    /// inversion count over its non-blank tiles is even. An unsolvable
    /// board still terminates the search, by exhaustion, so this is a
    /// cheap up-front check rather than a requirement.
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().cloned().filter(|&v| v != 0).collect();
        let mut inversions = 0;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses nine digits, either contiguous ("123405678") or
    /// separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let digits: Vec<u8> = if text.len() == CELLS && text.chars().all(|c| c.is_ascii_digit()) {
            text.bytes().map(|b| b - b'0').collect()
        } else {
            text.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(|t| {
                    t.parse::<u8>()
                        .map_err(|_| PuzzleError::ParseBoard(s.to_string()))
                })
                .collect::<Result<_>>()?
        };

        if digits.len() != CELLS {
            return Err(PuzzleError::ParseBoard(s.to_string()));
        }

        let mut cells = [0u8; CELLS];
        cells.copy_from_slice(&digits);
        Self::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    0 => write!(f, ".")?,
                    v => write!(f, "{}", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validation() {
        assert!(Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).is_ok());
        assert!(matches!(
            Board::from_cells([1, 1, 2, 3, 4, 5, 6, 7, 8]),
            Err(PuzzleError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_cells([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(PuzzleError::InvalidBoard(_))
        ));
    }

    #[test]
    fn parse() {
        let board: Board = "1 2 3 4 0 5 6 7 8".parse().unwrap();
        assert_eq!(board, Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap());
        assert_eq!("123405678".parse::<Board>().unwrap(), board);
        assert_eq!("1,2,3,4,0,5,6,7,8".parse::<Board>().unwrap(), board);

        assert!(matches!(
            "1 2 3".parse::<Board>(),
            Err(PuzzleError::ParseBoard(_))
        ));
        assert!(matches!(
            "1 2 3 4 x 5 6 7 8".parse::<Board>(),
            Err(PuzzleError::ParseBoard(_))
        ));
    }

    #[test]
    fn blank_and_positions() {
        let goal = Board::goal();
        assert_eq!(goal.blank(), (2, 2));
        assert_eq!(goal.position(1), (0, 0));
        assert_eq!(goal.position(6), (1, 2));
    }

    #[test]
    fn legal_slides() {
        // Blank in the bottom-right corner: it can only move up or left.
        let goal = Board::goal();
        assert_eq!(goal.slides(), vec![Slide::Up, Slide::Left]);
        assert!(goal.slide(Slide::Down).is_none());
        assert!(goal.slide(Slide::Right).is_none());

        // Blank in the center: every slide is legal.
        let center = Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        assert_eq!(center.slides().len(), 4);
    }

    #[test]
    fn slide_round_trip() {
        let board = Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        for slide in Slide::all() {
            let there = board.slide(slide).unwrap();
            assert_eq!(there.slide(slide.reverse()), Some(board));
        }
    }

    #[test]
    fn slide_between() {
        let board = Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        let there = board.slide(Slide::Right).unwrap();
        assert_eq!(Slide::between(&board, &there), Some(Slide::Right));
        assert_eq!(Slide::between(&there, &board), Some(Slide::Left));
        assert_eq!(Slide::between(&board, &board), None);
        assert_eq!(Slide::between(&board, &Board::goal()), None);
    }

    #[test]
    fn solvability() {
        assert!(Board::goal().is_solvable());
        // Swapping two adjacent tiles of the goal flips the parity.
        assert!(!Board::new([[2, 1, 3], [4, 5, 6], [7, 8, 0]])
            .unwrap()
            .is_solvable());
    }

    #[test]
    fn render() {
        assert_eq!(format!("{}", Board::goal()), "1 2 3\n4 5 6\n7 8 .\n");
    }
}
