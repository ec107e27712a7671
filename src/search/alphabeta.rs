//! Depth-bounded minimax with alpha-beta pruning
//!
//! The search runs over a single board buffer: every candidate move is
//! placed, searched and taken back through [`Board::with_stone`], so sibling
//! branches never see each other's stones and the caller's board comes back
//! unchanged.
//!
//! # Features
//!
//! - Full-width minimax, fixed scan order (ascending cell index)
//! - Alpha-beta cutoffs, switchable off for verification
//! - Root split over worker threads, one private board per worker
//! - Iterative deepening against a deadline
//!
//! # Example
//!
//! ```
//! use tateti::board::{Board, Pos, Stone};
//! use tateti::search::Searcher;
//!
//! let mut searcher = Searcher::new(5, 4, 2);
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place_stone(Pos::new(0, col), Stone::X);
//!     board.place_stone(Pos::new(4, col), Stone::O);
//! }
//!
//! let result = searcher.best_move(&mut board, Stone::X);
//! assert_eq!(result.best_move, Some(3)); // completes row 0
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate, loss_score, win_score, PatternScore};
use crate::rules::{check_winner, LineScanner, Outcome};

/// Infinity score for alpha-beta bounds
const INF: i32 = PatternScore::INF;

/// Nodes between deadline checks
const TIME_CHECK_INTERVAL: u64 = 1024;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Heuristic evaluations (depth bound or draw)
    pub leaf_evals: u64,
    /// Nodes where one side had already won
    pub terminal_hits: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.cutoffs += other.cutoffs;
        self.leaf_evals += other.leaf_evals;
        self.terminal_hits += other.terminal_hits;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Cell index of the best move, `None` on a full board
    pub best_move: Option<usize>,
    /// Score of the best move from the mover's perspective
    pub score: i32,
    /// Depth bound of the deepest completed search
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Pick the highest score; the first index seen wins ties.
fn select_best(scored: impl IntoIterator<Item = (usize, i32)>) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;
    for (idx, score) in scored {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((idx, score));
        }
    }
    best
}

/// Minimax searcher bound to one board size, win length and depth.
#[derive(Debug, Clone)]
pub struct Searcher {
    scanner: Arc<LineScanner>,
    max_depth: u8,
    pruning: bool,
    nodes: u64,
    stats: SearchStats,
    deadline: Option<Instant>,
    stopped: bool,
}

impl Searcher {
    /// Create a searcher for an N x N board with win length K.
    #[must_use]
    pub fn new(board_size: usize, win_length: usize, max_depth: u8) -> Self {
        Self::with_scanner(Arc::new(LineScanner::new(board_size, win_length)), max_depth)
    }

    /// Create a searcher sharing an existing line table.
    #[must_use]
    pub fn with_scanner(scanner: Arc<LineScanner>, max_depth: u8) -> Self {
        Self {
            scanner,
            max_depth,
            pruning: true,
            nodes: 0,
            stats: SearchStats::default(),
            deadline: None,
            stopped: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.board_size, config.win_length, config.max_depth)
    }

    /// Plain minimax over the same depth bound. Selects the same moves,
    /// visits more nodes.
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: u8) {
        self.max_depth = max_depth;
    }

    #[inline]
    pub fn scanner(&self) -> &LineScanner {
        &self.scanner
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Fresh worker with the same settings and line table
    fn worker(&self) -> Self {
        Self::with_scanner(Arc::clone(&self.scanner), self.max_depth).with_pruning(self.pruning)
    }

    fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check the deadline every few nodes and latch the stop flag.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if self.nodes % TIME_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                self.stopped = true;
            }
        }
        self.stopped
    }

    #[inline]
    fn leaf(&mut self, board: &Board, color: Stone) -> i32 {
        self.stats.leaf_evals += 1;
        evaluate(board, &self.scanner, color)
    }

    /// Minimax value of `board` for `color`.
    ///
    /// `depth` counts plies below the root move; the node is a leaf when it
    /// reaches `max_depth`. Maximizing nodes place `color`, minimizing nodes
    /// place its opponent. The board is restored before returning.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        color: Stone,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if self.check_time() {
            return 0;
        }

        match check_winner(board, &self.scanner) {
            Some(Outcome::Win(winner)) if winner == color => {
                self.stats.terminal_hits += 1;
                return win_score(depth);
            }
            Some(Outcome::Win(_)) => {
                self.stats.terminal_hits += 1;
                return loss_score(depth);
            }
            Some(Outcome::Draw) => return self.leaf(board, color),
            None if depth >= self.max_depth => return self.leaf(board, color),
            None => {}
        }

        let mover = if maximizing { color } else { color.opponent() };
        let mut best = if maximizing { -INF } else { INF };

        for idx in 0..board.len() {
            if board.get_index(idx) != Stone::Empty {
                continue;
            }

            let value = board.with_stone(idx, mover, |b| {
                self.minimax(b, depth + 1, !maximizing, color, alpha, beta)
            });
            if self.stopped {
                break;
            }

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Score of playing `color` at `idx`: the opponent replies first.
    #[inline]
    fn score_root_move(&mut self, board: &mut Board, idx: usize, color: Stone) -> i32 {
        board.with_stone(idx, color, |b| self.minimax(b, 0, false, color, -INF, INF))
    }

    /// Best move for `color`, searched in place on `board`.
    ///
    /// Every empty cell is tried in ascending index order with a full
    /// window; the strictly greatest score wins, so ties go to the lowest
    /// index. `best_move` is `None` only when the board has no empty cell.
    pub fn best_move(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        debug_assert_eq!(board.size(), self.scanner.size());
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.stopped = false;

        let start = Instant::now();
        let mut best: Option<(usize, i32)> = None;

        for idx in 0..board.len() {
            if board.get_index(idx) != Stone::Empty {
                continue;
            }
            let score = self.score_root_move(board, idx, color);
            if self.stopped {
                break;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(idx, _)| idx),
            score: best.map_or(0, |(_, score)| score),
            depth: self.max_depth,
            nodes: self.nodes,
            stats: self.stats,
        };
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            depth = result.depth,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search finished"
        );
        result
    }

    /// Search on a private copy, leaving `board` untouched.
    #[must_use]
    pub fn search(&mut self, board: &Board, color: Stone) -> SearchResult {
        let mut work_board = board.clone();
        self.best_move(&mut work_board, color)
    }

    /// Split root moves across `threads` workers.
    ///
    /// Each worker owns a copy of the board and its own counters. Moves are
    /// dealt round-robin and merged back in index order, so the selected
    /// move matches [`Searcher::best_move`].
    #[must_use]
    pub fn search_parallel(&self, board: &Board, color: Stone, threads: usize) -> SearchResult {
        let moves: Vec<usize> = board.empty_indices().collect();
        if moves.is_empty() {
            return SearchResult::no_move(self.max_depth);
        }
        let threads = threads.clamp(1, moves.len());
        let start = Instant::now();

        let mut scored: Vec<(usize, i32)> = Vec::with_capacity(moves.len());
        let mut nodes = 0;
        let mut stats = SearchStats::default();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..threads)
                .map(|thread_id| {
                    let mut worker = self.worker();
                    let mut work_board = board.clone();
                    let moves = &moves;

                    scope.spawn(move || {
                        let scores: Vec<(usize, i32)> = moves
                            .iter()
                            .skip(thread_id)
                            .step_by(threads)
                            .map(|&idx| (idx, worker.score_root_move(&mut work_board, idx, color)))
                            .collect();
                        (scores, worker.nodes, worker.stats)
                    })
                })
                .collect();

            for handle in handles {
                if let Ok((scores, worker_nodes, worker_stats)) = handle.join() {
                    scored.extend(scores);
                    nodes += worker_nodes;
                    stats.merge(&worker_stats);
                }
            }
        });

        scored.sort_unstable_by_key(|&(idx, _)| idx);
        let best = select_best(scored);

        debug!(
            threads,
            best_move = ?best.map(|(idx, _)| idx),
            nodes,
            elapsed_us = start.elapsed().as_micros() as u64,
            "parallel search finished"
        );

        SearchResult {
            best_move: best.map(|(idx, _)| idx),
            score: best.map_or(0, |(_, score)| score),
            depth: self.max_depth,
            nodes,
            stats,
        }
    }

    /// Iterative deepening from depth 1 up to the configured depth,
    /// stopping at `time_limit`.
    ///
    /// Depth 1 always runs to completion. A deeper iteration that hits the
    /// deadline is discarded and the previous result is returned. A forced
    /// win ends the loop early.
    #[must_use]
    pub fn search_timed(&mut self, board: &Board, color: Stone, time_limit: Duration) -> SearchResult {
        let full_depth = self.max_depth;
        let start = Instant::now();
        let mut work_board = board.clone();
        let mut best = SearchResult::no_move(0);
        let mut total_nodes = 0;
        let mut total_stats = SearchStats::default();

        for depth in full_depth.min(1)..=full_depth {
            self.max_depth = depth;
            self.deadline = (depth > 1).then(|| start + time_limit);

            let result = self.best_move(&mut work_board, color);
            total_nodes += result.nodes;
            total_stats.merge(&result.stats);
            if self.stopped {
                debug!(depth, "deadline hit, keeping previous iteration");
                break;
            }

            best = result;
            if best.score >= win_score(depth) || start.elapsed() >= time_limit {
                break;
            }
        }

        self.max_depth = full_depth;
        self.deadline = None;
        self.stopped = false;

        best.nodes = total_nodes;
        best.stats = total_stats;
        best
    }
}
