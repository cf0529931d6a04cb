//! Ошибки генерации лабиринтов

use thiserror::Error;

/// Все ошибки, которые может вернуть библиотека.
#[derive(Debug, Error)]
pub enum MazeError {
    /// Одно из измерений сетки равно нулю
    #[error("invalid grid size: {rows}×{cols} (both dimensions must be positive)")]
    InvalidGridSize { rows: usize, cols: usize },

    /// Плотность стен вне диапазона [0, 1] или NaN
    #[error("invalid wall density {0}: expected a value in [0, 1]")]
    InvalidDensity(f64),

    /// Позиция за пределами сетки
    #[error("position ({row}, {col}) is out of bounds for a {rows}×{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Неизвестное имя алгоритма (CLI, конфигурация)
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
