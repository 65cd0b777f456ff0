//! Snapshot module - a read-only copy of the game for renderers
//!
//! `GameState::snapshot_into` fills a reusable [`GameSnapshot`] each frame, so
//! the presentation layer never borrows the live state.

use crate::pieces::Piece;
use crate::types::{GamePhase, PieceKind, Position, COLUMNS, LOOKAHEAD, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub tiles: [Position; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            tiles: value.tiles(),
        }
    }
}

/// Everything a renderer needs for one frame, copied out of `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell values: 0 empty, 1..=7 piece kind
    pub grid: [[u8; COLUMNS]; ROWS],
    pub active: ActiveSnapshot,
    pub next: [PieceKind; LOOKAHEAD],
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub started: bool,
    pub game_over: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn playable(&self) -> bool {
        self.phase() == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; COLUMNS]; ROWS],
            active: Piece::new(PieceKind::I).into(),
            next: [PieceKind::I; LOOKAHEAD],
            score: 0,
            level: 0,
            lines: 0,
            started: false,
            game_over: false,
            drop_interval_ms: 0,
        }
    }
}
