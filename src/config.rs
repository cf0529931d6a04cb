// src/config.rs
//! Конфигурация генерации лабиринтов
//!
//! Этот модуль определяет параметры, управляющие генерацией:
//! - Алгоритм (поиск в глубину, Прим, Краскал, бинарное дерево, случайная плотность)
//! - Размер сетки
//! - Сид генератора случайных чисел и количество лабиринтов
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use crate::error::{MazeError, Result};
use crate::grid::GridSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Плотность стен по умолчанию для [`Algorithm::DensityRandom`]
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Алгоритм генерации лабиринта
///
/// Первые четыре варианта строят идеальный лабиринт (остовное дерево),
/// `DensityRandom` расставляет стены независимо и связности не гарантирует.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Algorithm {
    /// Поиск в глубину с возвратом: длинные коридоры, мало развилок
    #[default]
    Backtracker,
    /// Рандомизированный алгоритм Прима: много коротких ветвей
    Prim,
    /// Рандомизированный алгоритм Краскала: наименее смещённая структура
    Kruskal,
    /// Бинарное дерево: самый быстрый, заметный диагональный уклон
    BinaryTree,
    /// Каждая ячейка — стена с вероятностью `density`
    DensityRandom { density: f64 },
}

impl Algorithm {
    /// Все идеальные алгоритмы (без параметров)
    pub const PERFECT: [Algorithm; 4] = [
        Algorithm::Backtracker,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::BinaryTree,
    ];

    /// Строит ли алгоритм остовное дерево.
    ///
    /// # Примеры
    /// ```
    /// use mazegen::Algorithm;
    /// assert!(Algorithm::Kruskal.is_perfect());
    /// assert!(!Algorithm::DensityRandom { density: 0.3 }.is_perfect());
    /// ```
    #[must_use]
    pub fn is_perfect(self) -> bool {
        !matches!(self, Algorithm::DensityRandom { .. })
    }

    /// Размер сетки, которую вернёт генератор для запрошенного размера.
    #[must_use]
    pub fn output_size(self, requested: GridSize) -> GridSize {
        if self.is_perfect() {
            requested.odd_adjusted()
        } else {
            requested
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Backtracker => write!(f, "backtracker"),
            Algorithm::Prim => write!(f, "prim"),
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::BinaryTree => write!(f, "binary-tree"),
            Algorithm::DensityRandom { density } => write!(f, "random:{density}"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    /// Принимает `backtracker`/`dfs`, `prim`, `kruskal`, `binary-tree`,
    /// `random` или `random:<плотность>`.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, arg) = match lower.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (lower.as_str(), None),
        };
        let algorithm = match (name, arg) {
            ("backtracker" | "dfs", None) => Algorithm::Backtracker,
            ("prim", None) => Algorithm::Prim,
            ("kruskal", None) => Algorithm::Kruskal,
            ("binary-tree" | "binary_tree" | "binarytree", None) => Algorithm::BinaryTree,
            ("random" | "density", None) => Algorithm::DensityRandom {
                density: DEFAULT_DENSITY,
            },
            ("random" | "density", Some(arg)) => {
                let density: f64 = arg
                    .parse()
                    .map_err(|_| MazeError::UnknownAlgorithm(s.to_string()))?;
                Algorithm::DensityRandom { density }
            }
            _ => return Err(MazeError::UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}

/// Основные параметры генерации
///
/// Полная конфигурация для генерации одного или нескольких лабиринтов. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeGenerationParams {
    /// Сид генератора случайных чисел; без сида генерация недетерминирована
    #[serde(default)]
    pub seed: Option<u64>,

    /// Количество строк сетки (по умолчанию 21)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Количество столбцов сетки (по умолчанию 21)
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Алгоритм (по умолчанию `Backtracker`)
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Сколько лабиринтов сгенерировать (сиды `seed`, `seed + 1`, ...)
    #[serde(default = "default_count")]
    pub count: usize,
}

impl MazeGenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Аргументы
    /// * `path` - путь к файлу конфигурации в формате TOML
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # maze.toml
    /// seed = 42
    /// rows = 31
    /// cols = 41
    /// algorithm = "Kruskal"
    /// ```
    ///
    /// ```toml
    /// algorithm = { DensityRandom = { density = 0.25 } }
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let params: Self = toml::from_str(contents)?;
        Ok(params)
    }

    /// Проверенный размер сетки.
    pub fn grid_size(&self) -> Result<GridSize> {
        GridSize::new(self.rows, self.cols)
    }
}

fn default_rows() -> usize {
    21
}
fn default_cols() -> usize {
    21
}
fn default_count() -> usize {
    1
}

impl Default for MazeGenerationParams {
    fn default() -> Self {
        Self {
            seed: None,
            rows: 21,
            cols: 21,
            algorithm: Algorithm::Backtracker,
            count: 1,
        }
    }
}
