//! Pieces tests - layout tables, spawn positions and rotation cycles

use blocktris::core::pieces::{get_layouts, spawn_offset, Piece};
use blocktris::types::{PieceKind, Position};

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_offsets() {
    assert_eq!(spawn_offset(PieceKind::I), pos(-1, 3));
    assert_eq!(spawn_offset(PieceKind::O), pos(0, 4));
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(spawn_offset(kind), pos(0, 3), "{:?}", kind);
    }
}

#[test]
fn test_spawned_pieces_sit_in_spawn_rows() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert_eq!(piece.rotation(), 0);
        for tile in piece.tiles() {
            assert!((0..2).contains(&tile.row), "{:?} tile {:?}", kind, tile);
            assert!((3..7).contains(&tile.col), "{:?} tile {:?}", kind, tile);
        }
    }
}

#[test]
fn test_i_spawns_flat_on_top_row() {
    let piece = Piece::new(PieceKind::I);
    assert_eq!(piece.tiles(), [pos(0, 3), pos(0, 4), pos(0, 5), pos(0, 6)]);
}

#[test]
fn test_t_spawn_tiles() {
    let piece = Piece::new(PieceKind::T);
    assert_eq!(piece.tiles(), [pos(0, 4), pos(1, 3), pos(1, 4), pos(1, 5)]);
}

#[test]
fn test_o_spawn_tiles() {
    let piece = Piece::new(PieceKind::O);
    assert_eq!(piece.tiles(), [pos(0, 4), pos(0, 5), pos(1, 4), pos(1, 5)]);
}

#[test]
fn test_type_ids() {
    let ids: Vec<u8> = PieceKind::ALL.iter().map(|&k| Piece::new(k).type_id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

// ============== Rotation Tests ==============

#[test]
fn test_full_cw_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let start = Piece::new(kind);
        let mut piece = start;
        for _ in 0..piece.layout_count() {
            piece.rotate_cw();
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_cw_then_ccw_is_identity() {
    for kind in PieceKind::ALL {
        for steps in 0..4 {
            let mut piece = Piece::new(kind);
            for _ in 0..steps {
                piece.rotate_cw();
            }
            let before = piece;
            piece.rotate_cw();
            piece.rotate_ccw();
            assert_eq!(piece, before, "{:?} after {} steps", kind, steps);
        }
    }
}

#[test]
fn test_ccw_visits_layouts_in_reverse() {
    let mut piece = Piece::new(PieceKind::L);
    let mut seen = Vec::new();
    for _ in 0..4 {
        piece.rotate_ccw();
        seen.push(piece.rotation());
    }
    assert_eq!(seen, vec![3, 2, 1, 0]);
}

#[test]
fn test_o_rotation_is_a_no_op() {
    let mut piece = Piece::new(PieceKind::O);
    let tiles = piece.tiles();
    piece.rotate_cw();
    assert_eq!(piece.rotation(), 0);
    assert_eq!(piece.tiles(), tiles);
    piece.rotate_ccw();
    assert_eq!(piece.tiles(), tiles);
}

#[test]
fn test_tiles_follow_layout_table() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for &layout in get_layouts(kind) {
            let expected = layout.map(|tile| tile + spawn_offset(kind));
            assert_eq!(piece.tiles(), expected, "{:?} rotation {}", kind, piece.rotation());
            piece.rotate_cw();
        }
    }
}

#[test]
fn test_i_vertical_layout() {
    let mut piece = Piece::new(PieceKind::I);
    piece.rotate_cw();
    assert_eq!(piece.tiles(), [pos(-1, 5), pos(0, 5), pos(1, 5), pos(2, 5)]);
}

// ============== Movement Tests ==============

#[test]
fn test_move_is_invertible() {
    let mut piece = Piece::new(PieceKind::S);
    let start = piece;
    piece.move_by(3, -2);
    assert_eq!(piece.offset(), start.offset() + pos(3, -2));
    piece.move_by(-3, 2);
    assert_eq!(piece, start);
}

#[test]
fn test_tile_iterator_matches_tiles() {
    let mut piece = Piece::new(PieceKind::Z);
    piece.rotate_cw();
    piece.move_by(5, 1);
    let collected: Vec<Position> = piece.tile_positions().collect();
    assert_eq!(collected, piece.tiles().to_vec());
}

#[test]
fn test_reset_returns_to_spawn() {
    let mut piece = Piece::new(PieceKind::J);
    piece.rotate_cw();
    piece.move_by(10, -3);
    piece.reset();
    assert_eq!(piece, Piece::new(PieceKind::J));
}
