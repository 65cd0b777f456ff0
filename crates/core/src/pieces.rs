//! Pieces module - tetromino layouts and the falling piece
//!
//! Every kind owns a fixed table of pre-computed rotation layouts (four for
//! I, J, L, S, T and Z; a single one for O) plus a spawn offset. A [`Piece`]
//! is just `{ kind, rotation index, offset }`; absolute tile positions are
//! the current layout shifted by the offset.
//!
//! Rotation and movement here are unconditional. Legality is decided by the
//! caller (see `GameState::piece_fits`).

use crate::types::{PieceKind, Position};

/// Four tile positions relative to the piece offset, as `(row, col)`
pub type PieceLayout = [Position; 4];

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

const I_LAYOUTS: [PieceLayout; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const J_LAYOUTS: [PieceLayout; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
];

const L_LAYOUTS: [PieceLayout; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(0, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(2, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

// O does not rotate: one layout, so rotation is modulo 1.
const O_LAYOUTS: [PieceLayout; 1] = [[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]];

const S_LAYOUTS: [PieceLayout; 4] = [
    [p(1, 0), p(1, 1), p(0, 1), p(0, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(2, 0), p(2, 1), p(1, 1), p(1, 2)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const T_LAYOUTS: [PieceLayout; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_LAYOUTS: [PieceLayout; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

/// Rotation layouts for a piece kind, indexed by rotation state
pub fn get_layouts(kind: PieceKind) -> &'static [PieceLayout] {
    match kind {
        PieceKind::I => &I_LAYOUTS,
        PieceKind::J => &J_LAYOUTS,
        PieceKind::L => &L_LAYOUTS,
        PieceKind::O => &O_LAYOUTS,
        PieceKind::S => &S_LAYOUTS,
        PieceKind::T => &T_LAYOUTS,
        PieceKind::Z => &Z_LAYOUTS,
    }
}

/// Offset a freshly spawned piece starts at.
///
/// I spawns one row higher so its flat layout lands on row 0; O is one
/// column further right to sit centred.
pub fn spawn_offset(kind: PieceKind) -> Position {
    match kind {
        PieceKind::I => p(-1, 3),
        PieceKind::O => p(0, 4),
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => p(0, 3),
    }
}

/// A tetromino with its own rotation state and offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    offset: Position,
}

impl Piece {
    /// Create a piece at rotation 0 and its spawn offset
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            offset: spawn_offset(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Grid cell value written when this piece locks (1..=7)
    pub fn type_id(&self) -> u8 {
        self.kind.cell_value()
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Number of distinct rotation states (4, or 1 for O)
    pub fn layout_count(&self) -> usize {
        get_layouts(self.kind).len()
    }

    /// Absolute tile positions for the current rotation and offset.
    ///
    /// The iterator captures the state by value, so it can be recreated at any
    /// time and is unaffected by later mutation.
    pub fn tile_positions(&self) -> impl Iterator<Item = Position> + 'static {
        let offset = self.offset;
        let layout: &'static PieceLayout = &get_layouts(self.kind)[self.rotation];
        layout.iter().map(move |&tile| tile + offset)
    }

    /// Eager form of [`Piece::tile_positions`]
    pub fn tiles(&self) -> [Position; 4] {
        let layout = get_layouts(self.kind)[self.rotation];
        layout.map(|tile| tile + self.offset)
    }

    pub fn rotate_cw(&mut self) {
        self.rotation = (self.rotation + 1) % self.layout_count();
    }

    pub fn rotate_ccw(&mut self) {
        let n = self.layout_count();
        self.rotation = (self.rotation + n - 1) % n;
    }

    /// Shift the offset by (d_row, d_col). No bounds checking.
    pub fn move_by(&mut self, d_row: i32, d_col: i32) {
        self.offset = self.offset + p(d_row, d_col);
    }

    /// Back to rotation 0 at the spawn offset
    pub fn reset(&mut self) {
        self.rotation = 0;
        self.offset = spawn_offset(self.kind);
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Piece::new(kind)
    }
}
