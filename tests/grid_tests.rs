//! Grid tests: occupancy queries and two-pass line clearing

use blocktris::core::Grid;
use blocktris::types::{PieceKind, COLUMNS, ROWS};

fn fill_row(grid: &mut Grid, row: i32, kind: PieceKind) {
    for col in 0..COLUMNS as i32 {
        assert!(grid.set(row, col, Some(kind)));
    }
}

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!((grid.rows(), grid.columns()), (ROWS, COLUMNS));
    assert!(grid.cells().iter().all(|c| c.is_none()));
    for row in 0..ROWS {
        assert!(grid.is_row_empty(row));
        assert!(!grid.is_row_full(row));
    }
}

#[test]
fn test_bounds() {
    let mut grid = Grid::new();
    assert!(grid.is_inside(0, 0));
    assert!(grid.is_inside(21, 9));
    assert!(!grid.is_inside(-1, 0));
    assert!(!grid.is_inside(22, 0));
    assert!(!grid.is_inside(0, 10));

    // Outside cells are neither empty nor writable.
    assert!(!grid.is_empty(-1, 4));
    assert!(!grid.set(0, -1, Some(PieceKind::T)));
    assert_eq!(grid.get(22, 0), None);
    assert_eq!(grid.value(22, 0), 0);
}

#[test]
fn test_cell_values_match_piece_ids() {
    let mut grid = Grid::new();
    for (col, kind) in PieceKind::ALL.into_iter().enumerate() {
        grid.set(21, col as i32, Some(kind));
    }

    let mut out = [[0u8; COLUMNS]; ROWS];
    grid.write_u8_grid(&mut out);
    assert_eq!(out[21], [1, 2, 3, 4, 5, 6, 7, 0, 0, 0]);
    assert!(out[..21].iter().all(|row| row.iter().all(|&v| v == 0)));
}

#[test]
fn test_full_rows_bottom_to_top() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 21, PieceKind::I);
    fill_row(&mut grid, 19, PieceKind::J);
    fill_row(&mut grid, 5, PieceKind::Z);

    assert_eq!(grid.full_rows().as_slice(), &[21, 19, 5]);
}

#[test]
fn test_clear_non_adjacent_rows_compacts_remainder() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 21, PieceKind::I);
    grid.set(20, 0, Some(PieceKind::T));
    fill_row(&mut grid, 19, PieceKind::I);
    grid.set(18, 5, Some(PieceKind::S));

    assert_eq!(grid.clear_full_rows(), 2);

    assert_eq!(grid.get(21, 0), Some(Some(PieceKind::T)));
    assert_eq!(grid.get(20, 5), Some(Some(PieceKind::S)));
    let occupied = grid.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(occupied, 2);
    for row in 0..20 {
        assert!(grid.is_row_empty(row), "row {} should be empty", row);
    }
}

#[test]
fn test_erase_then_pull_matches_clear() {
    let mut a = Grid::new();
    fill_row(&mut a, 21, PieceKind::L);
    a.set(20, 3, Some(PieceKind::O));
    let mut b = a.clone();

    assert_eq!(a.erase_full_rows(), 1);
    // Erased rows are empty but nothing has fallen yet.
    assert!(a.is_row_empty(21));
    assert_eq!(a.get(20, 3), Some(Some(PieceKind::O)));

    a.pull_rows();
    assert_eq!(b.clear_full_rows(), 1);
    assert_eq!(a, b);
    assert_eq!(a.get(21, 3), Some(Some(PieceKind::O)));
}

#[test]
fn test_clear_with_no_full_rows_still_settles_gaps() {
    let mut grid = Grid::new();
    grid.set(15, 2, Some(PieceKind::J));

    assert_eq!(grid.clear_full_rows(), 0);
    assert!(grid.is_row_empty(15));
    assert_eq!(grid.get(21, 2), Some(Some(PieceKind::J)));
}

#[test]
fn test_clear_every_row() {
    let mut grid = Grid::new();
    for row in 0..ROWS as i32 {
        fill_row(&mut grid, row, PieceKind::O);
    }

    assert_eq!(grid.full_rows().len(), ROWS);
    assert_eq!(grid.clear_full_rows(), ROWS);
    assert_eq!(grid, Grid::new());
}

#[test]
fn test_full_and_empty_are_mutually_exclusive() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 21, PieceKind::S);
    grid.set(20, 0, Some(PieceKind::T));
    for col in 0..COLUMNS as i32 - 1 {
        grid.set(19, col, Some(PieceKind::J));
    }

    // 21 full, 20 and 19 partial, the rest empty.
    for row in 0..ROWS {
        assert!(
            !(grid.is_row_full(row) && grid.is_row_empty(row)),
            "row {} is both full and empty",
            row
        );
    }
    assert!(grid.is_row_full(21) && !grid.is_row_empty(21));
    assert!(!grid.is_row_full(20) && !grid.is_row_empty(20));
    assert!(!grid.is_row_full(19) && !grid.is_row_empty(19));
    assert!(!grid.is_row_full(0) && grid.is_row_empty(0));
}

#[test]
fn test_clear_resets_everything() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 10, PieceKind::T);
    grid.clear();
    assert_eq!(grid, Grid::new());
}
