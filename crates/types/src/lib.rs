//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Dimensions
//!
//! - **Rows**: 22 (indexed 0-21, top to bottom). Rows 0 and 1 are the spawn
//!   area and are normally hidden by renderers.
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Coordinates are always `(row, col)`.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 500 | Automatic descent interval at level 0 |
//! | `DROP_STEP_MS` | 45 | Interval reduction per level |
//! | `MIN_DROP_MS` | 50 | Floor for the descent interval |
//! | `MAX_SPEED_LEVEL` | 10 | Level after which the interval stops shrinking |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, Position, COLUMNS, ROWS};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.cell_value(), 6);
//! assert_eq!(PieceKind::from_cell_value(6), Some(PieceKind::T));
//!
//! let p = Position::new(1, 2) + Position::new(3, 4);
//! assert_eq!(p, Position::new(4, 6));
//!
//! assert_eq!((ROWS, COLUMNS), (22, 10));
//! ```

use std::ops::Add;

/// Playfield height in cells (22 rows, the top two are the spawn area)
pub const ROWS: usize = 22;

/// Playfield width in cells (10 columns)
pub const COLUMNS: usize = 10;

/// Rows at the top of the playfield that pieces spawn into.
///
/// Any locked block inside these rows ends the game.
pub const SPAWN_ROWS: usize = 2;

/// Number of upcoming pieces held by the piece queue.
pub const LOOKAHEAD: usize = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic descent interval at level 0
pub const BASE_DROP_MS: u32 = 500;

/// How much the descent interval shrinks per level
pub const DROP_STEP_MS: u32 = 45;

/// Lower bound for the descent interval
pub const MIN_DROP_MS: u32 = 50;

/// Levels beyond this one no longer speed up descent
pub const MAX_SPEED_LEVEL: u32 = 10;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N rows at level 0:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Integer (row, column) coordinate on the playfield.
///
/// Relative tile offsets and absolute positions share this type; negative
/// values are legal and simply fall outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// The seven tetromino piece kinds
///
/// Each kind has a fixed cell value written into the grid when it locks,
/// which renderers use for colour lookup:
/// - **I** (1): Cyan, horizontal bar
/// - **J** (2): Blue
/// - **L** (3): Orange (mirror of J)
/// - **O** (4): Yellow, 2x2 square
/// - **S** (5): Green
/// - **T** (6): Purple
/// - **Z** (7): Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, ordered by cell value.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Grid cell value for this kind (1..=7).
    pub const fn cell_value(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_value`]. `0` and anything above `7` map to `None`.
    pub fn from_cell_value(value: u8) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// Single uppercase letter, as shown in the NEXT panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the playfield
///
/// - `None`: Empty cell (value 0)
/// - `Some(PieceKind)`: Cell locked by the given kind (value 1..=7)
pub type Cell = Option<PieceKind>;

/// Integer view of a cell: 0 for empty, 1..=7 for locked blocks.
pub fn cell_value(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::cell_value)
}

/// Intents the presentation layer issues to the engine
///
/// Used by both keyboard input and the automatic descent timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot descend
    MoveDown,
    /// Rotate piece clockwise
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Begin play from the start screen or after game over
    Start,
    /// Clear the playfield and score
    Restart,
}

/// Lifecycle of a game session
///
/// `NotStarted → Playing → GameOver`, and `GameOver → Playing` on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    NotStarted,
    Playing,
    GameOver,
}
