// src/generator/density.rs
//! Случайная расстановка стен с заданной плотностью

use crate::error::{MazeError, Result};
use crate::grid::{CellValue, Grid, GridSize, Position, make_walkable_grid};
use rand::Rng;

/// Проверяет плотность: допускается только [0, 1]; NaN отклоняется.
pub fn validate_density(density: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(MazeError::InvalidDensity(density))
    }
}

/// Каждая ячейка независимо становится стеной с вероятностью `density`.
///
/// Размер сетки сохраняется как есть. Связность и проходимость не гарантируются.
///
/// # Ошибки
/// [`MazeError::InvalidDensity`], если `density` вне [0, 1].
pub fn generate_density_random<R: Rng + ?Sized>(
    size: GridSize,
    density: f64,
    rng: &mut R,
) -> Result<Grid> {
    let density = validate_density(density)?;
    let mut grid = make_walkable_grid(size);

    for row in 0..size.rows() {
        for col in 0..size.cols() {
            let sample: f64 = rng.gen_range(0.0..1.0);
            if sample < density {
                grid.set(Position::new(row, col), CellValue::Wall);
            }
        }
    }

    log::debug!(
        "density random: {size}, density {density}, {} walls",
        grid.count(CellValue::Wall)
    );
    Ok(grid)
}
