//! Main engine integrating rules and search
//!
//! [`Engine`] is the entry point used by every front end. It owns one
//! [`EngineConfig`] and the line table built from it, and answers the three
//! questions callers ask:
//!
//! 1. **Who won?** [`Engine::check_winner`]
//! 2. **Whose turn is it?** [`Engine::detect_player`]
//! 3. **Where should this player move?** [`Engine::best_move`] /
//!    [`Engine::get_move_with_stats`]
//!
//! # Example
//!
//! ```
//! use tateti::{Board, Engine, EngineConfig, Pos, Stone};
//!
//! // Shallow search keeps the example fast
//! let mut engine = Engine::with_config(EngineConfig {
//!     max_depth: 2,
//!     ..EngineConfig::default()
//! });
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place_stone(Pos::new(1, col), Stone::O);
//!     board.place_stone(Pos::new(3, col), Stone::X);
//! }
//! board.place_stone(Pos::new(0, 0), Stone::X);
//!
//! // O to move completes row 1
//! let result = engine.get_move_with_stats(&board, Stone::O);
//! assert_eq!(result.best_move, Some(8));
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::board::{Board, Stone};
use crate::config::{EngineConfig, Variant};
use crate::rules::{check_winner, detect_player, find_winning_line, LineScanner, Outcome, WinningLine};
use crate::search::{SearchResult, Searcher};

/// Which search strategy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Single-threaded search to the configured depth
    Exhaustive,
    /// Root moves split across worker threads
    Parallel,
    /// Iterative deepening against the configured time limit
    IterativeDeepening,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Cell index of the best move, if any
    pub best_move: Option<usize>,
    /// Evaluation score of the position after the move
    pub score: i32,
    /// Strategy that found this move
    pub search_type: SearchType,
    /// Depth bound of the completed search
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Stateless game engine for one configuration.
///
/// The searcher's counters are the only mutable state, which is why the
/// move-finding methods take `&mut self`.
pub struct Engine {
    config: EngineConfig,
    scanner: Arc<LineScanner>,
    searcher: Searcher,
}

impl Engine {
    /// Create an engine with the default configuration (5x5, four in a row, depth 4).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine for one of the preset variants.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self::with_config(variant.config())
    }

    /// Create an engine with a custom configuration.
    ///
    /// The configuration is expected to be valid (see [`EngineConfig::validate`]).
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid engine config: {config:?}");
        let scanner = Arc::new(LineScanner::new(config.board_size, config.win_length));
        let searcher = Searcher::with_scanner(Arc::clone(&scanner), config.max_depth);
        info!(
            board_size = config.board_size,
            win_length = config.win_length,
            max_depth = config.max_depth,
            threads = config.threads,
            lines = scanner.len(),
            "engine ready"
        );
        Self {
            config,
            scanner,
            searcher,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn scanner(&self) -> &LineScanner {
        &self.scanner
    }

    /// Empty board of the configured size
    #[must_use]
    pub fn new_board(&self) -> Board {
        Board::with_size(self.config.board_size)
    }

    /// Win / draw / ongoing (`None`).
    #[must_use]
    pub fn check_winner(&self, board: &Board) -> Option<Outcome> {
        check_winner(board, &self.scanner)
    }

    /// The first complete line, for highlighting.
    #[must_use]
    pub fn winning_line(&self, board: &Board) -> Option<WinningLine> {
        find_winning_line(board, &self.scanner)
    }

    /// Player to move under the fewer-or-equal-marks rule.
    #[must_use]
    pub fn detect_player(&self, board: &Board) -> Stone {
        detect_player(board)
    }

    /// Best move for `color`, searched in place on `board`.
    ///
    /// `board` is restored before returning. `None` means the board is full.
    pub fn best_move(&mut self, board: &mut Board, color: Stone) -> Option<usize> {
        self.searcher.best_move(board, color).best_move
    }

    /// Best move on a copy of `board`.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<usize> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// Strategy follows the configuration:
    /// 1. `time_limit_ms` set: iterative deepening up to `max_depth`
    /// 2. `threads > 1`: root split over worker threads
    /// 3. otherwise: single-threaded search to `max_depth`
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        let (result, search_type) = if let Some(limit) = self.config.time_limit_ms {
            (
                self.searcher.search_timed(board, color, Duration::from_millis(limit)),
                SearchType::IterativeDeepening,
            )
        } else if self.config.threads > 1 {
            (
                self.searcher.search_parallel(board, color, self.config.threads),
                SearchType::Parallel,
            )
        } else {
            (self.searcher.search(board, color), SearchType::Exhaustive)
        };

        let result = MoveResult::from_search(result, search_type, start.elapsed().as_millis() as u64);
        debug!(
            color = ?color,
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            time_ms = result.time_ms,
            "move chosen"
        );
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_from(codes: [i64; 25]) -> Board {
        Board::from_codes(5, &codes).unwrap()
    }

    fn near_win_board() -> Board {
        board_from([
            2, 1, 1, 1, 2, //
            1, 2, 0, 1, 2, //
            2, 1, 0, 2, 1, //
            1, 1, 2, 2, 2, //
            2, 1, 1, 2, 0, //
        ])
    }

    #[test]
    fn test_engine_defaults() {
        let engine = Engine::new();
        assert_eq!(engine.config().win_length, 4);
        assert_eq!(engine.config().max_depth, 4);
        assert_eq!(engine.scanner().len(), 28);
        assert_eq!(engine.new_board().len(), 25);
    }

    #[test]
    fn test_five_variant_scanner() {
        let engine = Engine::for_variant(Variant::Five);
        assert_eq!(engine.scanner().len(), 12);
    }

    #[test]
    fn test_check_winner_variants() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place_stone(Pos::new(2, col), Stone::X);
        }
        assert_eq!(
            Engine::for_variant(Variant::Four).check_winner(&board),
            Some(Outcome::Win(Stone::X))
        );
        assert_eq!(Engine::for_variant(Variant::Five).check_winner(&board), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let mut board = Board::new();
        for row in 1..5 {
            board.place_stone(Pos::new(row, 2), Stone::O);
        }
        let line = Engine::new().winning_line(&board).unwrap();
        assert_eq!(line.winner, Stone::O);
        assert_eq!(line.cells, vec![7, 12, 17, 22]);
    }

    #[test]
    fn test_best_move_in_place_restores_board() {
        let mut engine = Engine::new();
        let mut board = near_win_board();
        let before = board.clone();

        assert_eq!(engine.best_move(&mut board, Stone::X), Some(7));
        assert_eq!(board, before);
    }

    #[test]
    fn test_get_move_strategies_agree() {
        let board = near_win_board();

        let mut exhaustive = Engine::new();
        let mut parallel = Engine::with_config(EngineConfig {
            threads: 2,
            ..EngineConfig::default()
        });
        let mut timed = Engine::with_config(EngineConfig {
            time_limit_ms: Some(10_000),
            ..EngineConfig::default()
        });

        let a = exhaustive.get_move_with_stats(&board, Stone::X);
        let b = parallel.get_move_with_stats(&board, Stone::X);
        let c = timed.get_move_with_stats(&board, Stone::X);

        assert_eq!(a.search_type, SearchType::Exhaustive);
        assert_eq!(b.search_type, SearchType::Parallel);
        assert_eq!(c.search_type, SearchType::IterativeDeepening);
        assert_eq!(a.best_move, Some(7));
        assert_eq!(b.best_move, Some(7));
        assert_eq!(c.best_move, Some(7));
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut engine = Engine::new();
        let board = board_from([
            1, 1, 2, 2, 1, //
            2, 2, 1, 1, 2, //
            1, 1, 2, 2, 1, //
            2, 2, 1, 1, 2, //
            1, 1, 2, 2, 1, //
        ]);
        assert_eq!(engine.check_winner(&board), Some(Outcome::Draw));
        assert_eq!(engine.get_move(&board, Stone::X), None);
    }

    #[test]
    fn test_detect_player_through_engine() {
        let engine = Engine::new();
        let board = board_from([
            1, 2, 1, 0, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 0, //
        ]);
        assert_eq!(engine.detect_player(&board), Stone::O);
    }
}
