//! Модель сетки лабиринта
//!
//! Сетка хранится как один плоский буфер в построчном порядке (`row * cols + col`),
//! начало координат в левом верхнем углу: строки растут вниз, столбцы вправо.
//! Готовая сетка неизменяема: публичного API для изменения ячеек нет,
//! [`Grid::with_cell`] возвращает новую сетку.

use crate::error::{MazeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Значение одной ячейки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellValue {
    Wall,
    Walkable,
}

impl CellValue {
    #[must_use]
    pub fn is_walkable(self) -> bool {
        matches!(self, CellValue::Walkable)
    }

    /// Числовое значение ячейки в выбранной кодировке.
    ///
    /// # Примеры
    /// ```
    /// use mazegen::{BitEncoding, CellValue};
    /// assert_eq!(CellValue::Wall.to_bit(BitEncoding::WallIsOne), 1);
    /// assert_eq!(CellValue::Wall.to_bit(BitEncoding::WallIsZero), 0);
    /// ```
    #[must_use]
    pub fn to_bit(self, encoding: BitEncoding) -> u8 {
        match (self, encoding) {
            (CellValue::Wall, BitEncoding::WallIsOne)
            | (CellValue::Walkable, BitEncoding::WallIsZero) => 1,
            (CellValue::Walkable, BitEncoding::WallIsOne)
            | (CellValue::Wall, BitEncoding::WallIsZero) => 0,
        }
    }
}

/// Кодировка 0/1 на границе экспорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BitEncoding {
    /// Стена = 1, проход = 0
    #[default]
    WallIsOne,
    /// Инвертированная: стена = 0, проход = 1
    WallIsZero,
}

/// Размер сетки (строки × столбцы). Оба измерения строго положительны.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Создаёт размер сетки.
    ///
    /// # Ошибки
    /// [`MazeError::InvalidGridSize`], если одно из измерений равно нулю.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidGridSize { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn area(self) -> usize {
        self.rows * self.cols
    }

    /// Уменьшает каждое чётное измерение на единицу.
    ///
    /// Идеальным лабиринтам нужна нечётная сетка: ячейки лабиринта стоят на
    /// чётных позициях, а стены между ними на нечётных.
    #[must_use]
    pub fn odd_adjusted(self) -> Self {
        let odd = |n: usize| if n % 2 == 0 { n - 1 } else { n };
        Self {
            rows: odd(self.rows),
            cols: odd(self.cols),
        }
    }

    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Позиция ячейки (строка, столбец)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Сдвигает позицию; `None`, если результат выходит за пределы `size`.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: GridSize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = Self { row, col };
        size.contains(pos).then_some(pos)
    }

    /// Середина между двумя позициями (стена между соседними ячейками лабиринта).
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

/// Двумерная бинарная матрица лабиринта
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellValue>,
}

impl Grid {
    /// Сетка, целиком заполненная одним значением.
    #[must_use]
    pub fn filled(size: GridSize, value: CellValue) -> Self {
        Self {
            size,
            cells: vec![value; size.area()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellValue> {
        self.size
            .contains(pos)
            .then(|| self.cells[self.size.index(pos)])
    }

    #[must_use]
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellValue::is_walkable)
    }

    /// Все ячейки в построчном порядке.
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.cells.chunks(self.size.cols)
    }

    #[must_use]
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&c| c == value).count()
    }

    /// Возвращает новую сетку, в которой заменена одна ячейка.
    ///
    /// # Ошибки
    /// [`MazeError::OutOfBounds`], если позиция вне сетки.
    pub fn with_cell(&self, pos: Position, value: CellValue) -> Result<Self> {
        if !self.size.contains(pos) {
            return Err(MazeError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.size.rows,
                cols: self.size.cols,
            });
        }
        let mut next = self.clone();
        next.set(pos, value);
        Ok(next)
    }

    /// Матрица 0/1 в выбранной кодировке; все строки одной длины.
    #[must_use]
    pub fn to_matrix(&self, encoding: BitEncoding) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.to_bit(encoding)).collect())
            .collect()
    }

    /// Запись доступна только генераторам внутри крейта, пока сетка не отдана вызывающему.
    pub(crate) fn set(&mut self, pos: Position, value: CellValue) {
        let idx = self.size.index(pos);
        self.cells[idx] = value;
    }
}

impl Index<Position> for Grid {
    type Output = CellValue;

    fn index(&self, pos: Position) -> &CellValue {
        assert!(
            self.size.contains(pos),
            "position ({}, {}) out of bounds for {} grid",
            pos.row,
            pos.col,
            self.size
        );
        &self.cells[self.size.index(pos)]
    }
}

impl fmt::Display for Grid {
    /// `#` — стена, `.` — проход, по строке текста на строку сетки
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                let ch = if cell.is_walkable() { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[must_use]
pub fn make_wall_grid(size: GridSize) -> Grid {
    Grid::filled(size, CellValue::Wall)
}

#[must_use]
pub fn make_walkable_grid(size: GridSize) -> Grid {
    Grid::filled(size, CellValue::Walkable)
}
