//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the falling piece, the piece queue and
//! scoring. Every intent is tried eagerly: the piece is mutated, checked with
//! [`GameState::piece_fits`], and reverted if it does not fit. A piece locks
//! the instant a downward move is illegal (no lock delay).

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::gravity::GravityTimer;
use crate::grid::Grid;
use crate::pieces::Piece;
use crate::rng::PieceQueue;
use crate::scoring::{calculate_level, calculate_line_score, drop_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Emitted whenever a piece locks into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Rows that were full at lock time, bottom to top (pre-compaction indices)
    pub cleared_rows: ArrayVec<usize, ROWS>,
    pub points: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    grid: Grid,
    queue: PieceQueue<R>,
    current: Piece,
    score: u32,
    lines_cleared: u32,
    game_over: bool,
    started: bool,
    config: GameConfig,
    gravity: GravityTimer,
    /// Last lock event (consumed by the presentation layer).
    last_event: Option<LockEvent>,
}

impl GameState<StdRng> {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default().with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(config.seed), config)
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R, config: GameConfig) -> Self {
        let mut queue = PieceQueue::with_rng(rng);
        let current = queue.get_and_update();

        Self {
            grid: Grid::new(),
            queue,
            current,
            score: 0,
            lines_cleared: 0,
            game_over: false,
            started: false,
            config,
            gravity: GravityTimer::new(),
            last_event: None,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == GamePhase::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn level(&self) -> u32 {
        calculate_level(self.lines_cleared)
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    pub fn next_pieces(&self) -> [PieceKind; LOOKAHEAD] {
        self.queue.next_kinds()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current automatic descent interval
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level(), &self.config)
    }

    /// True if every tile of the current piece is inside the grid on an empty cell
    pub fn piece_fits(&self) -> bool {
        self.current
            .tile_positions()
            .all(|p| self.grid.is_inside(p.row, p.col) && self.grid.is_empty(p.row, p.col))
    }

    /// Translate the current piece, reverting if it no longer fits
    fn try_move(&mut self, d_row: i32, d_col: i32) -> bool {
        if self.game_over {
            return false;
        }
        self.current.move_by(d_row, d_col);
        if !self.piece_fits() {
            self.current.move_by(-d_row, -d_col);
            return false;
        }
        true
    }

    pub fn move_piece_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_piece_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate in place, no wall kicks
    fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        if clockwise {
            self.current.rotate_cw();
        } else {
            self.current.rotate_ccw();
        }
        if !self.piece_fits() {
            if clockwise {
                self.current.rotate_ccw();
            } else {
                self.current.rotate_cw();
            }
            return false;
        }
        true
    }

    pub fn rotate_piece_cw(&mut self) -> bool {
        self.try_rotate(true)
    }

    pub fn rotate_piece_ccw(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Descend one row, or lock the piece if it cannot.
    ///
    /// Returns true if the piece moved down, false if it locked (or the game
    /// is already over).
    pub fn move_piece_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if self.try_move(1, 0) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Write the current piece into the grid, clear rows, then spawn or end the game
    fn lock_piece(&mut self) {
        let kind = self.current.kind();
        for p in self.current.tile_positions() {
            self.grid.set(p.row, p.col, Some(kind));
        }

        let cleared_rows = self.grid.full_rows();
        let rows = self.grid.clear_full_rows();

        if self.spawn_area_blocked() {
            self.game_over = true;
        } else {
            self.current = self.queue.get_and_update();
        }

        let points = self.update_score(rows);

        debug!(kind = kind.as_str(), rows, points, "piece locked");
        if self.game_over {
            info!(
                score = self.score,
                lines = self.lines_cleared,
                "game over"
            );
        }

        self.last_event = Some(LockEvent {
            kind,
            cleared_rows,
            points,
            game_over: self.game_over,
        });
    }

    /// Any block left in the two spawn rows means the next piece cannot enter.
    fn spawn_area_blocked(&self) -> bool {
        (0..SPAWN_ROWS).any(|row| !self.grid.is_row_empty(row))
    }

    /// Add `rows_cleared` to the line count and award points at the new level.
    ///
    /// Returns the points awarded.
    pub fn update_score(&mut self, rows_cleared: usize) -> u32 {
        self.lines_cleared = self.lines_cleared.saturating_add(rows_cleared as u32);
        let points = calculate_line_score(rows_cleared, self.level());
        self.score = self.score.saturating_add(points);
        points
    }

    /// Clear the grid and zero score and line count.
    ///
    /// The current piece and the queue carry over into the next game.
    pub fn restart_game(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.lines_cleared = 0;
        self.gravity.reset();
        self.last_event = None;
    }

    /// Enter `Playing` from any phase, starting from an empty grid
    pub fn start(&mut self) {
        let from = self.phase();
        self.started = true;
        self.game_over = false;
        self.restart_game();
        info!(from = ?from, "game started");
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the descent scheduler; performs an automatic move down when due.
    ///
    /// Returns true if a descent was issued. Does nothing unless playing.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_playing() {
            return false;
        }
        let interval = self.drop_interval_ms();
        if self.gravity.advance(elapsed_ms, interval) {
            self.move_piece_down();
            return true;
        }
        false
    }

    /// Apply a game action
    ///
    /// Any movement intent received before the game started, or after it
    /// ended, first starts a fresh game and is then applied. `Start` does
    /// nothing while a game is in progress; only `Restart` wipes one.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start if self.is_playing() => return false,
            GameAction::Start | GameAction::Restart => {
                self.start();
                return true;
            }
            _ => {}
        }

        if !self.is_playing() {
            self.start();
        }

        match action {
            GameAction::MoveLeft => self.move_piece_left(),
            GameAction::MoveRight => self.move_piece_right(),
            GameAction::MoveDown => self.move_piece_down(),
            GameAction::RotateCw => self.rotate_piece_cw(),
            GameAction::RotateCcw => self.rotate_piece_ccw(),
            GameAction::Start | GameAction::Restart => true,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.active = self.current.into();
        out.next = self.next_pieces();
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines_cleared;
        out.started = self.started;
        out.game_over = self.game_over;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
