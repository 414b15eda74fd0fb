//! Game state management for the Pentago GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::cli::Players;
use crate::config::{EngineConfig, Strategy};
use crate::rules::winning_line;
use crate::{AIEngine, Direction, Game, GameStatus, Move, MoveResult, Piece, Pos};

/// Hint searches never go deeper than this
const HINT_DEPTH: u8 = 2;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Final outcome shown by the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub status: GameStatus,
    pub winning_line: Option<[Pos; 5]>,
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
    pub game: Game,
    pub players: Players,
    pub config: EngineConfig,
    pub game_over: Option<GameResult>,
    /// Cell clicked by a human, waiting for the rotation
    pub selected: Option<Pos>,
    pub last_move: Option<Move>,
    pub move_history: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    /// Hint search running on a background thread
    pub hint: Option<Receiver<MoveResult>>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(players: Players, config: EngineConfig) -> Self {
        Self {
            game: Game::new(),
            players,
            config,
            game_over: None,
            selected: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            hint: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.players, self.config);
    }

    #[inline]
    pub fn current_turn(&self) -> Piece {
        self.game.turn
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        self.players.strategy_for(self.game.turn) == Strategy::Human
    }

    /// Check if the side to move is played by the computer
    pub fn is_ai_turn(&self) -> bool {
        self.players.strategy_for(self.game.turn).is_automated()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Human picks the cell for the next piece. Clicking the selected cell
    /// again clears the selection.
    pub fn select_cell(&mut self, pos: Pos) -> Result<(), String> {
        self.check_human_can_move()?;

        if !self.game.board.is_empty(pos) {
            return Err("Cell is occupied".to_string());
        }

        self.selected = if self.selected == Some(pos) { None } else { Some(pos) };
        self.message = None;
        Ok(())
    }

    /// Human finishes the move by rotating a quadrant
    pub fn rotate_selected(&mut self, quadrant: u8, direction: Direction) -> Result<(), String> {
        self.check_human_can_move()?;

        let pos = self.selected.ok_or_else(|| "Select a cell first".to_string())?;
        self.execute_move(Move::new(pos, quadrant, direction));
        Ok(())
    }

    fn check_human_can_move(&self) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) {
        let color = self.game.turn;
        if !self.game.make_move(mv) {
            warn!(%mv, %color, "move rejected");
            self.message = Some(format!("Invalid move: {}", mv));
            return;
        }
        info!(%mv, %color, "move played");

        self.move_history.push(mv);
        self.last_move = Some(mv);
        self.selected = None;
        self.suggested_move = None;
        self.hint = None;
        self.message = None;
        self.move_timer.stop();

        self.update_game_over();
        if self.game_over.is_none() {
            self.move_timer.start();
        }
    }

    fn update_game_over(&mut self) {
        self.game_over = match self.game.status() {
            GameStatus::InProgress => None,
            status => Some(GameResult {
                status,
                winning_line: winning_line(&self.game.board).map(|(_, line)| line),
            }),
        };
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.game.board;
        let color = self.game.turn;
        let strategy = self.players.strategy_for(color);
        let config = self.config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::with_config(config);
            if let Some(result) = engine.choose(strategy, &board, color) {
                let _ = tx.send(result);
            }
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
                    warn!("AI thread ended without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI could not find a move".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            if let Some(mv) = move_result.best_move {
                self.execute_move(mv);
            } else {
                self.message = Some("AI could not find a move".to_string());
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

    /// Check if a hint search is running
    pub fn is_hint_pending(&self) -> bool {
        self.hint.is_some()
    }

    /// Start a shallow search for the side to move. The result arrives
    /// through [`GameState::check_hint_result`].
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() || self.is_hint_pending() {
            return;
        }

        let board = self.game.board;
        let color = self.game.turn;
        let config = EngineConfig {
            max_depth: self.config.max_depth.min(HINT_DEPTH),
            ..self.config
        };

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = AIEngine::with_config(config).get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.hint = Some(rx);
    }

    /// Pick up a finished hint. Moves played in the meantime drop the
    /// receiver, so a stale hint never shows up.
    pub fn check_hint_result(&mut self) {
        let Some(receiver) = &self.hint else {
            return;
        };

        match receiver.try_recv() {
            Ok(result) => {
                self.hint = None;
                self.suggested_move = result.best_move;
                self.last_ai_result = Some(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                warn!("hint thread ended without a result");
                self.hint = None;
            }
        }
    }

    /// Undo the last move, or the last two when a human plays the computer
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let against_computer = self.players.white.is_automated() != self.players.black.is_automated();
        let undo_count = if against_computer && self.move_history.len() >= 2 { 2 } else { 1 };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<Move> = self.move_history.drain(..moves_to_keep).collect();

        self.game = Game::new();
        self.move_history.clear();
        self.game_over = None;
        self.last_move = None;
        self.selected = None;
        self.suggested_move = None;
        self.hint = None;

        for mv in moves {
            self.game.make_move(mv);
            self.move_history.push(mv);
            self.last_move = Some(mv);
        }

        self.move_timer.start();
    }
}
