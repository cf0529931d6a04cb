// src/generator/backtracker.rs
//! Поиск в глубину с возвратом (recursive backtracker) на явном стеке

use crate::generator::Lattice;
use crate::grid::{CellValue, Grid, GridSize, Position, make_wall_grid};
use rand::Rng;
use rand::seq::SliceRandom;

/// Строит идеальный лабиринт поиском в глубину.
///
/// Граница роста — всегда последняя посещённая ячейка, поэтому коридоры длинные,
/// а развилок мало.
pub fn generate_backtracker<R: Rng + ?Sized>(size: GridSize, rng: &mut R) -> Grid {
    let lattice = Lattice::new(size);
    let mut grid = make_wall_grid(lattice.size());
    let mut visited = vec![false; lattice.cell_count()];

    let start = Position::new(0, 0);
    grid.set(start, CellValue::Walkable);
    visited[lattice.index(start)] = true;

    let mut stack = vec![start];
    let mut candidates = Vec::with_capacity(4);
    let mut carved = 0usize;

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            lattice
                .neighbors(current)
                .filter(|&n| !visited[lattice.index(n)]),
        );

        match candidates.choose(rng) {
            Some(&next) => {
                visited[lattice.index(next)] = true;
                grid.set(next, CellValue::Walkable);
                grid.set(current.midpoint(next), CellValue::Walkable);
                stack.push(next);
                carved += 1;
            }
            None => {
                stack.pop();
            }
        }
    }

    log::debug!(
        "backtracker: {} cells, {carved} walls opened",
        lattice.cell_count()
    );
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_cell_is_trivial_maze() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for (rows, cols) in [(1, 1), (2, 2), (1, 2)] {
            let grid = generate_backtracker(GridSize::new(rows, cols).unwrap(), &mut rng);
            assert_eq!((grid.rows(), grid.cols()), (1, 1));
            assert_eq!(grid[Position::new(0, 0)], CellValue::Walkable);
        }
    }

    #[test]
    fn single_row_is_one_corridor() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let grid = generate_backtracker(GridSize::new(1, 9).unwrap(), &mut rng);
        assert_eq!(grid.to_string(), ".........\n");
    }

    #[test]
    fn odd_by_odd_interior_posts_stay_walls() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let grid = generate_backtracker(GridSize::new(15, 21).unwrap(), &mut rng);
        for row in (1..grid.rows()).step_by(2) {
            for col in (1..grid.cols()).step_by(2) {
                assert_eq!(grid[Position::new(row, col)], CellValue::Wall);
            }
        }
    }

    #[test]
    fn every_maze_cell_is_reached() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let grid = generate_backtracker(GridSize::new(11, 11).unwrap(), &mut rng);
        // 6×6 ячеек + 35 открытых стен
        assert_eq!(grid.count(CellValue::Walkable), 36 + 35);
    }
}
