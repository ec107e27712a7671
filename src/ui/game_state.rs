//! Game state management for the Ta-Te-Ti GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{Board, Engine, EngineConfig, MoveResult, Outcome, Stone, Variant};

/// Time budget for the AI's own moves
const AI_TIME_LIMIT_MS: u64 = 500;
/// Hints run on the UI thread, so they get a shorter budget
const HINT_TIME_LIMIT_MS: u64 = 200;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat); `show_suggestions` computes a hint after every move
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::X }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// Cell indices of the completed line, absent on a draw
    pub winning_line: Option<Vec<usize>>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub variant: Variant,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<usize>,
    pub move_history: Vec<(usize, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<usize>,
    pub message: Option<String>,
    engine: Engine,
}

impl GameState {
    pub fn new(mode: GameMode, variant: Variant) -> Self {
        let engine = Engine::for_variant(variant);
        Self {
            board: engine.new_board(),
            mode,
            variant,
            current_turn: Stone::X,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            engine,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.variant);
    }

    /// Switch rule set; starts a new game
    pub fn set_variant(&mut self, variant: Variant) {
        if variant != self.variant {
            debug!(%variant, "variant changed");
            *self = Self::new(self.mode, variant);
        }
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the current player's mark at `idx`
    pub fn try_place_stone(&mut self, idx: usize) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if idx >= self.board.len() {
            return Err("Outside the board".to_string());
        }
        if self.board.get_index(idx) != Stone::Empty {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(idx);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, idx: usize) {
        let color = self.current_turn;
        self.board.set_index(idx, color);

        self.move_history.push((idx, color));
        self.last_move = Some(idx);
        self.suggested_move = None;
        self.move_timer.stop();

        if let Some(outcome) = self.engine.check_winner(&self.board) {
            debug!(?outcome, moves = self.move_history.len(), "game over");
            self.game_over = Some(GameResult {
                outcome,
                winning_line: self.engine.winning_line(&self.board).map(|line| line.cells),
            });
            return;
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        self.message = None;

        if let GameMode::PvP { show_suggestions: true } = self.mode {
            self.request_suggestion();
        }
    }

    /// Engine configuration with a time budget, for off-thread or hint searches
    fn timed_config(&self, time_limit_ms: u64) -> EngineConfig {
        EngineConfig {
            time_limit_ms: Some(time_limit_ms),
            ..self.engine.config().clone()
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let color = self.current_turn;
        let config = self.timed_config(AI_TIME_LIMIT_MS);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = Engine::with_config(config);
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(idx) if self.board.get_index(idx) == Stone::Empty => self.execute_move(idx),
                _ => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Compute a hint for the player to move (PvP)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = Engine::with_config(self.timed_config(HINT_TIME_LIMIT_MS));
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo last move (last two against the AI)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        // Reset and replay
        let keep = self.move_history.len().saturating_sub(undo_count);
        self.move_history.truncate(keep);

        self.board = self.engine.new_board();
        for &(idx, color) in &self.move_history {
            self.board.set_index(idx, color);
        }
        self.current_turn = self.engine.detect_player(&self.board);
        self.last_move = self.move_history.last().map(|&(idx, _)| idx);
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotseat() -> GameState {
        GameState::new(GameMode::PvP { show_suggestions: false }, Variant::Four)
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = hotseat();
        state.try_place_stone(12).unwrap();
        assert_eq!(state.current_turn, Stone::O);
        state.try_place_stone(0).unwrap();
        assert_eq!(state.current_turn, Stone::X);
        assert_eq!(state.board.get_index(12), Stone::X);
        assert_eq!(state.board.get_index(0), Stone::O);
        assert_eq!(state.last_move, Some(0));
    }

    #[test]
    fn test_rejects_occupied_and_out_of_range() {
        let mut state = hotseat();
        state.try_place_stone(3).unwrap();
        assert!(state.try_place_stone(3).is_err());
        assert!(state.try_place_stone(25).is_err());
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_win_sets_game_over_with_line() {
        let mut state = hotseat();
        for idx in [0, 5, 1, 6, 2, 7, 3] {
            state.try_place_stone(idx).unwrap();
        }

        let result = state.game_over.clone().unwrap();
        assert_eq!(result.outcome, Outcome::Win(Stone::X));
        assert_eq!(result.winning_line, Some(vec![0, 1, 2, 3]));
        assert_eq!(state.try_place_stone(20), Err("Game is over".to_string()));
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = hotseat();
        let codes = [
            1, 1, 2, 2, 1, //
            2, 2, 1, 1, 2, //
            1, 1, 2, 2, 1, //
            2, 2, 1, 1, 2, //
            1, 1, 2, 2, 1, //
        ];
        let xs: Vec<usize> = (0..25).filter(|&i| codes[i] == 1).collect();
        let os: Vec<usize> = (0..25).filter(|&i| codes[i] == 2).collect();
        for (i, &x) in xs.iter().enumerate() {
            state.try_place_stone(x).unwrap();
            if let Some(&o) = os.get(i) {
                state.try_place_stone(o).unwrap();
            }
        }

        let result = state.game_over.clone().unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.winning_line, None);
    }

    #[test]
    fn test_undo_replays_history() {
        let mut state = hotseat();
        for idx in [0, 5, 1, 6, 2, 7, 3] {
            state.try_place_stone(idx).unwrap();
        }
        state.undo();

        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Stone::X);
        assert_eq!(state.board.get_index(3), Stone::Empty);
        assert_eq!(state.last_move, Some(7));
        assert_eq!(state.move_history.len(), 6);
    }

    #[test]
    fn test_hint_finds_immediate_win() {
        let mut state = hotseat();
        for idx in [0, 5, 1, 6, 2] {
            state.try_place_stone(idx).unwrap();
        }
        // O ignores the threat
        state.try_place_stone(24).unwrap();
        state.request_suggestion();
        assert_eq!(state.suggested_move, Some(3));
    }

    #[test]
    fn test_variant_switch_restarts() {
        let mut state = hotseat();
        state.try_place_stone(0).unwrap();
        state.set_variant(Variant::Five);

        assert_eq!(state.variant, Variant::Five);
        assert_eq!(state.engine().config().win_length, 5);
        assert!(state.move_history.is_empty());
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_pve_turn_ownership() {
        let state = GameState::new(GameMode::PvE { human_color: Stone::O }, Variant::Four);
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());
    }
}
