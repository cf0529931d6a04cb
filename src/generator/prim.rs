// src/generator/prim.rs
//! Рандомизированный алгоритм Прима

use crate::generator::Lattice;
use crate::grid::{CellValue, Grid, GridSize, Position, make_wall_grid};
use rand::Rng;
use rand::seq::SliceRandom;

/// Строит идеальный лабиринт, выращивая дерево из случайной точки границы.
///
/// `discovered` отмечает ячейку при попадании в границу, а не при включении в лабиринт:
/// так одна ячейка никогда не попадает в границу дважды.
pub fn generate_prim<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Grid {
    let lattice = Lattice::new(size);
    let mut grid = make_wall_grid(lattice.size());
    let mut discovered = vec![false; lattice.cell_count()];
    let mut frontier: Vec<Position> = Vec::new();

    let start = Position::new(0, 0);
    grid.set(start, CellValue::Walkable);
    discovered[lattice.index(start)] = true;

    let mut discover = |pos: Position, frontier: &mut Vec<Position>| {
        for n in lattice.neighbors(pos) {
            let idx = lattice.index(n);
            if !discovered[idx] {
                discovered[idx] = true;
                frontier.push(n);
            }
        }
    };

    discover(start, &mut frontier);
    let mut skipped = 0usize;
    let mut joined = Vec::with_capacity(4);

    while !frontier.is_empty() {
        let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));

        joined.clear();
        joined.extend(lattice.neighbors(cell).filter(|&n| grid.is_walkable(n)));
        let Some(&anchor) = joined.choose(rng) else {
            skipped += 1;
            continue;
        };

        grid.set(cell, CellValue::Walkable);
        grid.set(cell.midpoint(anchor), CellValue::Walkable);
        discover(cell, &mut frontier);
    }

    if skipped > 0 {
        log::warn!("prim: skipped {skipped} frontier cells without a maze neighbor");
    }
    log::debug!("prim: {} cells", lattice.cell_count());
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn degenerate_sizes_terminate() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let grid = generate_prim(GridSize::new(1, 1).unwrap(), &mut rng);
        assert_eq!(grid.count(CellValue::Walkable), 1);

        let column = generate_prim(GridSize::new(7, 1).unwrap(), &mut rng);
        assert_eq!(column.to_string(), ".\n.\n.\n.\n.\n.\n.\n");
    }

    #[test]
    fn opens_one_wall_per_added_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let grid = generate_prim(GridSize::new(20, 30).unwrap(), &mut rng);
        assert_eq!((grid.rows(), grid.cols()), (19, 29));
        let cells = 10 * 15;
        assert_eq!(grid.count(CellValue::Walkable), cells + cells - 1);
    }
}
