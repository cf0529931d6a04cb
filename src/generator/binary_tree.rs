// src/generator/binary_tree.rs
//! Бинарное дерево: каждая ячейка открывает стену вверх или вправо

use crate::generator::Lattice;
use crate::grid::{CellValue, Grid, GridSize, make_wall_grid};
use rand::Rng;

/// Строит идеальный лабиринт за один проход без вспомогательных структур.
///
/// Правая верхняя ячейка лабиринта не имеет кандидатов и становится корнем дерева,
/// у первой строки остаётся только «вправо», у последнего столбца — только «вверх».
pub fn generate_binary_tree<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Grid {
    let lattice = Lattice::new(size);
    let grid_size = lattice.size();
    let mut grid = make_wall_grid(grid_size);

    for cell in lattice.cells() {
        grid.set(cell, CellValue::Walkable);

        let up = cell.offset(-2, 0, grid_size);
        let right = cell.offset(0, 2, grid_size);
        let target = match (up, right) {
            (Some(up), Some(right)) => {
                if rng.gen_bool(0.5) {
                    up
                } else {
                    right
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => continue,
        };
        grid.set(cell.midpoint(target), CellValue::Walkable);
    }

    log::debug!("binary tree: {} cells", lattice.cell_count());
    grid
}
