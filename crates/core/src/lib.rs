//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on terminal, input or rendering code, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any frontend or headless
//!
//! # Module Structure
//!
//! - [`grid`]: 22x10 playfield with occupancy queries and two-pass line clearing
//! - [`pieces`]: Tetromino layout tables and the falling [`Piece`]
//! - [`rng`]: Uniform random piece queue with a 2-piece lookahead
//! - [`scoring`]: Classic line scores, levels and the descent curve
//! - [`gravity`]: Accumulator that schedules automatic descent
//! - [`game_state`]: The state machine tying it all together
//! - [`config`]: Seed and descent tunables, loadable from the environment
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Every draw picks one of seven kinds with equal odds
//! - **Fixed rotation tables**: No wall kicks; a blocked rotation is reverted
//! - **Instant lock**: A piece locks as soon as it cannot move down
//! - **Game over**: Any locked block left in rows 0-1 after a lock
//! - **Scoring**: 40/100/300/1200 for 1-4 rows, times (level + 1)
//!
//! # Example
//!
//! ```
//! use blocktris_core::GameState;
//! use blocktris_core::types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::NotStarted);
//!
//! // The first intent starts the game.
//! game.apply_action(GameAction::MoveRight);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! game.apply_action(GameAction::MoveDown);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The automatic descent interval is
//! `max(min_drop_ms, 500 - level * 45)` with the level capped at 10.

pub mod config;
pub mod game_state;
pub mod gravity;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{GameState, LockEvent};
pub use gravity::GravityTimer;
pub use grid::Grid;
pub use pieces::{get_layouts, spawn_offset, Piece, PieceLayout};
pub use rng::PieceQueue;
pub use scoring::{calculate_level, calculate_line_score, drop_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
