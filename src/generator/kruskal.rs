// src/generator/kruskal.rs
//! Рандомизированный алгоритм Краскала

use crate::disjoint_set::DisjointSet;
use crate::generator::Lattice;
use crate::grid::{CellValue, Grid, GridSize, Position, make_wall_grid};
use rand::Rng;
use rand::seq::SliceRandom;

/// Строит идеальный лабиринт объединением случайно перемешанных рёбер.
///
/// Все ячейки лабиринта открыты сразу, закрыты только стены между ними.
/// Ребро принимается, если его концы ещё в разных множествах, поэтому
/// структура зависит только от порядка рёбер, а не от порядка обхода.
pub fn generate_kruskal<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Grid {
    let lattice = Lattice::new(size);
    let grid_size = lattice.size();
    let mut grid = make_wall_grid(grid_size);

    // Каждое ребро один раз: вправо и вниз от каждой ячейки
    let mut edges: Vec<(Position, Position)> = Vec::new();
    for cell in lattice.cells() {
        grid.set(cell, CellValue::Walkable);
        for (dr, dc) in [(0, 2), (2, 0)] {
            if let Some(next) = cell.offset(dr, dc, grid_size) {
                edges.push((cell, next));
            }
        }
    }

    edges.shuffle(rng);

    let mut sets = DisjointSet::new(lattice.cell_count());
    let mut opened = 0usize;
    for (a, b) in edges {
        if sets.union(lattice.index(a), lattice.index(b)) {
            grid.set(a.midpoint(b), CellValue::Walkable);
            opened += 1;
        }
    }

    log::debug!(
        "kruskal: {} cells, {opened} walls opened, {} set(s) left",
        lattice.cell_count(),
        sets.set_count()
    );
    grid
}
