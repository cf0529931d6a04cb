//! Генераторы лабиринтов
//!
//! Идеальные генераторы (`backtracker`, `prim`, `kruskal`, `binary_tree`) работают
//! на решётке ячеек лабиринта: ячейки стоят на позициях с чётными строкой и столбцом,
//! стена между соседними ячейками — их середина. Поэтому сетка сначала
//! приводится к нечётным размерам.
//!
//! Случайность всегда передаётся извне, глобального генератора нет.

pub mod backtracker;
pub mod binary_tree;
pub mod density;
pub mod kruskal;
pub mod prim;

pub use backtracker::generate_backtracker;
pub use binary_tree::generate_binary_tree;
pub use density::{generate_density_random, validate_density};
pub use kruskal::generate_kruskal;
pub use prim::generate_prim;

use crate::config::Algorithm;
use crate::error::Result;
use crate::grid::{Grid, GridSize, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Шаги к соседним ячейкам лабиринта: вверх, вправо, вниз, влево
const CELL_STEPS: [(isize, isize); 4] = [(-2, 0), (0, 2), (2, 0), (0, -2)];

/// Решётка ячеек лабиринта внутри нечётной сетки
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lattice {
    size: GridSize,
}

impl Lattice {
    /// Решётка для запрошенного размера (чётные измерения уменьшаются на 1).
    pub(crate) fn new(requested: GridSize) -> Self {
        Self {
            size: requested.odd_adjusted(),
        }
    }

    pub(crate) fn size(self) -> GridSize {
        self.size
    }

    pub(crate) fn cell_rows(self) -> usize {
        self.size.rows().div_ceil(2)
    }

    pub(crate) fn cell_cols(self) -> usize {
        self.size.cols().div_ceil(2)
    }

    pub(crate) fn cell_count(self) -> usize {
        self.cell_rows() * self.cell_cols()
    }

    /// Номер ячейки лабиринта в построчном порядке решётки.
    pub(crate) fn index(self, pos: Position) -> usize {
        (pos.row / 2) * self.cell_cols() + pos.col / 2
    }

    /// Все ячейки лабиринта: сначала по строкам, внутри строки по столбцам.
    pub(crate) fn cells(self) -> impl Iterator<Item = Position> {
        let cols = self.cell_cols();
        (0..self.cell_rows())
            .flat_map(move |r| (0..cols).map(move |c| Position::new(r * 2, c * 2)))
    }

    /// Соседние ячейки лабиринта на расстоянии двух шагов, в пределах сетки.
    pub(crate) fn neighbors(self, pos: Position) -> impl Iterator<Item = Position> {
        CELL_STEPS
            .into_iter()
            .filter_map(move |(dr, dc)| pos.offset(dr, dc, self.size))
    }
}

/// Генерирует лабиринт выбранным алгоритмом.
///
/// Для идеальных алгоритмов чётные измерения уменьшаются на единицу.
///
/// # Ошибки
/// [`crate::MazeError::InvalidDensity`] для `DensityRandom` с плотностью вне [0, 1].
///
/// # Пример
/// ```
/// use mazegen::{Algorithm, GridSize, generate_maze};
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
/// let grid = generate_maze(Algorithm::Kruskal, GridSize::new(10, 10)?, &mut rng)?;
/// assert_eq!((grid.rows(), grid.cols()), (9, 9));
/// # Ok::<(), mazegen::MazeError>(())
/// ```
pub fn generate_maze<R: Rng + ?Sized>(
    algorithm: Algorithm,
    size: GridSize,
    rng: &mut R,
) -> Result<Grid> {
    let grid = match algorithm {
        Algorithm::Backtracker => generate_backtracker(size, rng),
        Algorithm::Prim => generate_prim(size, rng),
        Algorithm::Kruskal => generate_kruskal(size, rng),
        Algorithm::BinaryTree => generate_binary_tree(size, rng),
        Algorithm::DensityRandom { density } => generate_density_random(size, density, rng)?,
    };
    log::debug!(
        "{algorithm}: requested {size}, produced {}",
        grid.size()
    );
    Ok(grid)
}

/// Генерирует `count` лабиринтов с сидами `seed`, `seed + 1`, ...
///
/// Каждый лабиринт получает собственный `ChaCha8Rng`, поэтому результат
/// не зависит от порядка выполнения и совпадает с последовательными вызовами
/// [`generate_maze`] с теми же сидами.
pub fn generate_batch(
    algorithm: Algorithm,
    size: GridSize,
    seed: u64,
    count: usize,
) -> Result<Vec<Grid>> {
    let one = |i: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
        generate_maze(algorithm, size, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let grids: Result<Vec<Grid>> = (0..count).into_par_iter().map(one).collect();
    #[cfg(not(feature = "parallel"))]
    let grids: Result<Vec<Grid>> = (0..count).map(one).collect();

    grids
}
