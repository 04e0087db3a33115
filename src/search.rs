//! The A* loop, its frontier, and the bookkeeping tables.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::errors::{PuzzleError, Result};
use crate::path::Path;
use crate::state::Board;

/// A frontier entry: a board plus the bookkeeping A* orders by.
///
/// Entries sort by priority (f = g + h) ascending, with ties broken by
/// insertion sequence, so pops are deterministic for a fixed input and
/// heuristic.
#[derive(Debug)]
struct OpenEntry {
    priority: u32,
    seq: u64,
    cost: u32,
    board: Board,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq)
            .cmp(&(other.priority, other.seq))
            .reverse()
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of boards awaiting expansion.
#[derive(Debug, Default)]
struct Frontier {
    queue: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl Frontier {
    fn push(&mut self, priority: u32, cost: u32, board: Board) {
        self.queue.push(OpenEntry {
            priority,
            seq: self.seq,
            cost,
            board,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<OpenEntry> {
        self.queue.pop()
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(maximum: usize) -> Self {
        Self {
            current: 0,
            maximum,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(PuzzleError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Knobs for a single search run.
#[derive(Debug, Default, Clone)]
pub struct SearchOptions {
    /// Maximum number of board expansions before giving up. The whole
    /// 3x3 space holds 181,440 reachable boards, so an unlimited run
    /// always terminates, but callers may want to bail out earlier.
    pub step_limit: Option<usize>,
}

/// The bookkeeping a finished search leaves behind.
///
/// `cost` records the cheapest known move count to every discovered
/// board and is the single source of truth during relaxation.
/// `came_from` records each board's predecessor, `None` for the start,
/// and exists only so the path can be walked back.
#[derive(Debug)]
pub struct SearchTables {
    pub(crate) cost: HashMap<Board, u32>,
    pub(crate) came_from: HashMap<Board, Option<Board>>,
}

impl SearchTables {
    /// Cheapest known move count to `board`, if it was discovered.
    pub fn cost(&self, board: &Board) -> Option<u32> {
        self.cost.get(board).copied()
    }

    /// Number of boards discovered during the search.
    pub fn discovered(&self) -> usize {
        self.cost.len()
    }
}

/// One A* run from `start` towards `goal`.
#[derive(Debug)]
pub struct Searcher<H>
where
    H: Fn(&Board, &Board) -> u32,
{
    start: Board,
    goal: Board,
    heuristic: H,
    options: SearchOptions,
}

impl<H> Searcher<H>
where
    H: Fn(&Board, &Board) -> u32,
{
    pub fn new(start: Board, goal: Board, heuristic: H) -> Self {
        Self {
            start,
            goal,
            heuristic,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the search until the goal pops or the frontier drains.
    ///
    /// Each step costs one move, so the goal's entry in the cost table
    /// is the optimal move count. Improving on a known cost re-pushes
    /// the board rather than rewriting the queued entry; the stale
    /// twin is discarded on pop against the cost table.
    pub fn run(self) -> Result<SearchTables> {
        let mut limit = self.options.step_limit.map(StepLimit::new);
        let mut frontier = Frontier::default();
        let mut tables = SearchTables {
            cost: HashMap::new(),
            came_from: HashMap::new(),
        };

        tables.cost.insert(self.start, 0);
        tables.came_from.insert(self.start, None);
        frontier.push((self.heuristic)(&self.start, &self.goal), 0, self.start);

        while let Some(entry) = frontier.pop() {
            // Lazy deletion: a cheaper route to this board was found
            // after the entry was queued.
            if tables
                .cost
                .get(&entry.board)
                .map_or(true, |&g| entry.cost > g)
            {
                continue;
            }

            if entry.board.is_goal(&self.goal) {
                return Ok(tables);
            }

            if let Some(counter) = limit.as_mut() {
                counter.increment()?;
            }

            let new_cost = entry.cost + 1;
            for neighbor in entry.board.successors() {
                if tables.cost.get(&neighbor).map_or(true, |&g| new_cost < g) {
                    tables.cost.insert(neighbor, new_cost);
                    tables.came_from.insert(neighbor, Some(entry.board));
                    let priority = new_cost + (self.heuristic)(&neighbor, &self.goal);
                    frontier.push(priority, new_cost, neighbor);
                }
            }
        }

        Err(PuzzleError::NoSolution)
    }
}

/// Solve `start` towards `goal`, returning the full board path.
pub fn solve<H>(start: Board, goal: Board, heuristic: H) -> Result<Path>
where
    H: Fn(&Board, &Board) -> u32,
{
    let tables = Searcher::new(start, goal, heuristic).run()?;
    Path::reconstruct(&tables, goal)
}
