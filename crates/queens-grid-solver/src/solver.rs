//! Backtracking placement search.
//!
//! Rows are filled top to bottom and columns scanned left to right, so the
//! first solution found is the lexicographically smallest one. A candidate
//! `(row, col)` is legal when its color group and column are unused and it
//! is not forbidden by the queen placed on the previous row.
//!
//! The search state (used groups, used columns, forbidden cells and the
//! chosen path) is mutated in place; every mutation made for a candidate is
//! recorded in a [`Mark`] and reverted before the next column is tried.

use std::collections::HashMap;

use log::debug;
use queens_grid_core::{Board, Placement, Rgb8, Solution};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors returned by the solver.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("no valid queen placement exists for this board")]
    NoSolutionFound,
    #[error("board is {board}x{board}, expected grid size {expected}")]
    GridSizeMismatch { board: usize, expected: usize },
}

/// Search counters, reset on every [`QueensSolver::solve`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Legal candidates committed (including the final cell).
    pub nodes: u64,
    /// Commits that were reverted.
    pub backtracks: u64,
}

/// Mutations made by one commit.
struct Mark {
    group: usize,
    col: usize,
    forbidden: [Option<usize>; 3],
}

/// Per-invocation search state.
struct SearchState {
    n: usize,
    used_groups: Vec<bool>,
    used_cols: Vec<bool>,
    /// Row-major cell flags.
    forbidden: Vec<bool>,
    path: Vec<usize>,
}

impl SearchState {
    fn new(n: usize, groups: usize) -> Self {
        Self {
            n,
            used_groups: vec![false; groups],
            used_cols: vec![false; n],
            forbidden: vec![false; n * n],
            path: Vec::with_capacity(n),
        }
    }

    #[inline]
    fn is_legal(&self, row: usize, col: usize, group: usize) -> bool {
        !self.used_groups[group] && !self.used_cols[col] && !self.forbidden[row * self.n + col]
    }

    fn commit(&mut self, row: usize, col: usize, group: usize) -> Mark {
        self.used_groups[group] = true;
        self.used_cols[col] = true;
        self.path.push(col);

        let mut forbidden = [None; 3];
        let next = row + 1;
        if next < self.n {
            let lo = col.saturating_sub(1);
            let hi = (col + 1).min(self.n - 1);
            for (slot, c) in forbidden.iter_mut().zip(lo..=hi) {
                let idx = next * self.n + c;
                if !self.forbidden[idx] {
                    self.forbidden[idx] = true;
                    *slot = Some(idx);
                }
            }
        }
        Mark {
            group,
            col,
            forbidden,
        }
    }

    fn revert(&mut self, mark: Mark) {
        for idx in mark.forbidden.into_iter().flatten() {
            self.forbidden[idx] = false;
        }
        self.path.pop();
        self.used_cols[mark.col] = false;
        self.used_groups[mark.group] = false;
    }
}

/// Solver bound to one board.
///
/// Color groups are indexed once up front; each call to [`solve`](Self::solve)
/// builds a fresh search state, so the solver can be reused.
pub struct QueensSolver<'a> {
    board: &'a Board,
    /// Group id of each cell, row-major.
    group_of: Vec<usize>,
    group_count: usize,
    stats: SolveStats,
}

impl<'a> QueensSolver<'a> {
    pub fn new(board: &'a Board) -> Self {
        let mut ids: HashMap<Rgb8, usize> = HashMap::new();
        let group_of = board
            .cells()
            .iter()
            .map(|cell| {
                let next = ids.len();
                *ids.entry(cell.color).or_insert(next)
            })
            .collect();
        Self {
            board,
            group_of,
            group_count: ids.len(),
            stats: SolveStats::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Number of distinct color groups on the board.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Counters from the last [`solve`](Self::solve) call.
    #[inline]
    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Find the lexicographically first placement.
    pub fn solve(&mut self) -> Result<Solution, SolveError> {
        let n = self.board.size();
        self.stats = SolveStats::default();
        let mut state = SearchState::new(n, self.group_count);

        let found = self.descend(&mut state, 0);
        debug!(
            "search finished: found={found} nodes={} backtracks={}",
            self.stats.nodes, self.stats.backtracks
        );
        if !found {
            return Err(SolveError::NoSolutionFound);
        }

        let placements = state
            .path
            .iter()
            .enumerate()
            .map(|(row, &col)| Placement::new(row, col))
            .collect();
        Ok(Solution::new(placements))
    }

    fn descend(&mut self, state: &mut SearchState, row: usize) -> bool {
        let n = state.n;
        for col in 0..n {
            let group = self.group_of[row * n + col];
            if !state.is_legal(row, col, group) {
                continue;
            }
            self.stats.nodes += 1;
            let mark = state.commit(row, col, group);
            if row + 1 == n || self.descend(state, row + 1) {
                return true;
            }
            state.revert(mark);
            self.stats.backtracks += 1;
        }
        false
    }
}

/// Solve a normalized board.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(board)))]
pub fn solve(board: &Board, grid_size: usize) -> Result<Solution, SolveError> {
    if board.size() != grid_size {
        return Err(SolveError::GridSizeMismatch {
            board: board.size(),
            expected: grid_size,
        });
    }
    QueensSolver::new(board).solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_labels(rows: &[&str]) -> Board {
        let palette = |ch: char| {
            let v = (ch as u8 - b'A') * 40;
            Rgb8::new(v, 255 - v, 128)
        };
        Board::from_rows(
            rows.iter()
                .map(|row| row.chars().map(palette).collect())
                .collect(),
        )
        .expect("board")
    }

    #[test]
    fn single_cell_board_places_at_origin() {
        let board = board_from_labels(&["A"]);
        let solution = solve(&board, 1).expect("solve");
        assert_eq!(solution.placements, vec![Placement::new(0, 0)]);
    }

    #[test]
    fn finds_unique_four_by_four_assignment() {
        let board = board_from_labels(&["BABB", "BBCC", "DBCC", "DDBC"]);
        let solution = solve(&board, 4).expect("solve");
        assert_eq!(solution.columns(), vec![1, 3, 0, 2]);
        assert_eq!(solution.validate(&board), Ok(()));
    }

    #[test]
    fn forced_adjacent_singletons_have_no_solution() {
        // A and B are single cells touching diagonally; both would need a queen.
        let board = board_from_labels(&["ACCCC", "CBCCC", "DDDDD", "EEEEE", "EEEEE"]);
        assert_eq!(solve(&board, 5), Err(SolveError::NoSolutionFound));
    }

    #[test]
    fn row_striped_board_yields_first_lexicographic_solution() {
        let board = board_from_labels(&["AAAAA", "BBBBB", "CCCCC", "DDDDD", "EEEEE"]);
        let solution = solve(&board, 5).expect("solve");
        assert_eq!(solution.columns(), vec![0, 2, 4, 1, 3]);
    }

    #[test]
    fn small_boards_without_spacing_fail() {
        assert_eq!(
            solve(&board_from_labels(&["AB", "AB"]), 2),
            Err(SolveError::NoSolutionFound)
        );
        assert_eq!(
            solve(&board_from_labels(&["AAA", "BBB", "CCC"]), 3),
            Err(SolveError::NoSolutionFound)
        );
    }

    #[test]
    fn solving_twice_is_deterministic_and_state_is_fresh() {
        let board = board_from_labels(&["BABB", "BBCC", "DBCC", "DDBC"]);
        let mut solver = QueensSolver::new(&board);
        let first = solver.solve().expect("first");
        let stats = solver.stats();
        let second = solver.solve().expect("second");
        assert_eq!(first, second);
        assert_eq!(solver.stats(), stats);
        assert_eq!(solver.group_count(), 4);
    }

    #[test]
    fn backtracking_is_counted() {
        let board = board_from_labels(&["AAAA", "BBBB", "CCCC", "DDDD"]);
        let mut solver = QueensSolver::new(&board);
        let solution = solver.solve().expect("solve");
        assert_eq!(solution.columns(), vec![1, 3, 0, 2]);
        let stats = solver.stats();
        assert!(stats.backtracks > 0);
        assert_eq!(stats.nodes, stats.backtracks + 4);
    }

    #[test]
    fn rejects_grid_size_mismatch() {
        let board = board_from_labels(&["A"]);
        assert_eq!(
            solve(&board, 2),
            Err(SolveError::GridSizeMismatch {
                board: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn revert_restores_pristine_state() {
        let mut state = SearchState::new(4, 4);
        let mark = state.commit(1, 0, 2);
        assert!(state.forbidden[2 * 4]);
        assert!(state.forbidden[2 * 4 + 1]);
        assert!(!state.is_legal(3, 0, 0));
        state.revert(mark);
        assert!(state.forbidden.iter().all(|&f| !f));
        assert!(state.used_cols.iter().all(|&u| !u));
        assert!(state.used_groups.iter().all(|&u| !u));
        assert!(state.path.is_empty());
    }
}
