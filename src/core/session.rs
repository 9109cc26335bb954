//! Game session - the play/game-over lifecycle.
//!
//! Ties the board, the active piece, scoring, and the tick interval into one
//! state machine: `Ready -> Running -> Over`. `Over` is terminal for a
//! session value; restarting means constructing a fresh session. The session
//! never talks to a terminal or a timer directly - it buffers typed events
//! that the run loop drains to drive the clock and the display.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::scoring::{drop_score, line_clear_score, next_interval_ms, should_speed_up};
use crate::core::shapes;
use crate::types::{GameAction, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_TICK_MS};

/// Lifecycle states. `Running` is the only state in which the clock fires
/// and score accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Running,
    Over,
}

/// Notifications for the driver, drained after each call into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The score changed; carries the new total.
    ScoreChanged(u32),
    /// The gravity interval changed; the driver must reschedule its clock
    /// so the old and new cadence never coexist.
    TickIntervalChanged(u64),
    /// No valid spawn position remained; the driver should halt its clock.
    GameOver { final_score: u32 },
}

/// A single game: board, active piece, score, and gravity interval.
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    state: SessionState,
    score: u32,
    tick_interval_ms: u64,
    rng: StdRng,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// New session with an entropy-seeded piece sequence.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// New session with a deterministic piece sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT),
            active: None,
            state: SessionState::Ready,
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            rng,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Take the buffered events, leaving the buffer empty.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin play. Only meaningful from `Ready`: resets the board and score,
    /// restores the initial gravity interval, and spawns the first piece.
    /// A blocked spawn goes straight to `Over`.
    pub fn start(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        self.board.clear();
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_MS;
        self.events.push(SessionEvent::ScoreChanged(0));
        self.events
            .push(SessionEvent::TickIntervalChanged(self.tick_interval_ms));
        self.state = SessionState::Running;
        if !self.spawn_piece() {
            self.game_over();
        }
    }

    /// One gravity step. Descend the active piece; when it cannot descend,
    /// lock it, clear full rows, score, and spawn the next piece.
    pub fn tick(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        let descended = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.board, 0, 1),
            None => return,
        };
        if !descended {
            self.lock_and_continue();
        }
    }

    pub fn move_left(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.try_move(&self.board, -1, 0);
        }
    }

    pub fn move_right(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.try_move(&self.board, 1, 0);
        }
    }

    pub fn rotate(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.try_rotate(&self.board);
        }
    }

    /// Player-accelerated single-step descent: +1 point per cell. Failure is
    /// a no-op; locking only happens through `tick` and `hard_drop`.
    pub fn soft_drop(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        let moved = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.board, 0, 1),
            None => return,
        };
        if moved {
            self.add_score(drop_score(1, false));
        }
    }

    /// Descend to rest (+2 points per cell), then run the same
    /// lock/clear/score/spawn sequence as a failed tick descent.
    pub fn hard_drop(&mut self) {
        if self.state != SessionState::Running {
            return;
        }
        let mut cells: u32 = 0;
        match self.active.as_mut() {
            Some(piece) => {
                while piece.try_move(&self.board, 0, 1) {
                    cells += 1;
                }
            }
            None => return,
        }
        if cells > 0 {
            self.add_score(drop_score(cells, true));
        }
        self.lock_and_continue();
    }

    /// Dispatch an input-layer action. Everything is ignored outside
    /// `Running`; the individual methods enforce that themselves.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            // Lifecycle belongs to the runner: a restart swaps the session.
            GameAction::Restart => {}
        }
    }

    fn spawn_piece(&mut self) -> bool {
        let (shape, color) = shapes::pick_random(&mut self.rng);
        let piece = Piece::spawn(shape, color, self.board.width());
        if self.board.is_valid_placement(piece.shape(), piece.x(), piece.y()) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            false
        }
    }

    fn lock_and_continue(&mut self) {
        if let Some(piece) = self.active.take() {
            self.board
                .lock(piece.shape(), piece.x(), piece.y(), piece.color());
        }
        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.add_score(line_clear_score(cleared));
            if should_speed_up(self.score, self.tick_interval_ms) {
                self.tick_interval_ms = next_interval_ms(self.tick_interval_ms);
                self.events
                    .push(SessionEvent::TickIntervalChanged(self.tick_interval_ms));
            }
        }
        if !self.spawn_piece() {
            self.game_over();
        }
    }

    fn add_score(&mut self, points: u32) {
        self.score += points;
        self.events.push(SessionEvent::ScoreChanged(self.score));
    }

    fn game_over(&mut self) {
        self.state = SessionState::Over;
        self.events.push(SessionEvent::GameOver {
            final_score: self.score,
        });
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
