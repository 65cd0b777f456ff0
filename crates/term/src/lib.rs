//! Terminal presentation for the game.
//!
//! Rendering is split in two: [`GameView`] turns a
//! [`core::GameSnapshot`](blocktris_core::GameSnapshot) into a framebuffer
//! (pure, unit-testable), and [`TerminalRenderer`] diffs framebuffers and
//! flushes the changes through crossterm.
//!
//! Board cells are drawn 2 characters wide to compensate for typical terminal
//! glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, LineFlash, Viewport, LINE_FLASH_MS, VISIBLE_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
