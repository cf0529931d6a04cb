// src/analysis.rs
//! Структурная проверка готовых лабиринтов
//!
//! Лабиринт рассматривается как граф: вершины — открытые ячейки лабиринта
//! (чётные строка и столбец), рёбра — открытые стены между ними.
//! Модуль не ищет пути, он только проверяет, что граф является остовным деревом.

use crate::grid::{CellValue, Grid, Position};
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use std::collections::HashMap;

/// Итог проверки лабиринта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MazeReport {
    /// Всего ячеек лабиринта (позиции с чётными строкой и столбцом)
    pub maze_cells: usize,
    /// Из них открытых
    pub open_maze_cells: usize,
    /// Открытых стен между двумя ячейками лабиринта
    pub opened_walls: usize,
    /// Открытых «столбов» (нечётная строка и нечётный столбец)
    pub open_posts: usize,
    /// Компонент связности среди открытых ячеек лабиринта
    pub components: usize,
    pub has_cycle: bool,
}

impl MazeReport {
    /// Все ячейки открыты и образуют одно дерево.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.open_maze_cells == self.maze_cells
            && self.components == 1
            && self.opened_walls + 1 == self.maze_cells
            && self.open_posts == 0
            && !self.has_cycle
    }
}

/// Строит граф ячеек лабиринта и считает его характеристики.
#[must_use]
pub fn analyze_perfect(grid: &Grid) -> MazeReport {
    let size = grid.size();
    let mut graph: UnGraph<Position, ()> = UnGraph::new_undirected();
    let mut nodes: HashMap<Position, NodeIndex> = HashMap::new();
    let mut maze_cells = 0;
    let mut open_posts = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            match (row % 2, col % 2) {
                (0, 0) => {
                    maze_cells += 1;
                    if grid.is_walkable(pos) {
                        nodes.insert(pos, graph.add_node(pos));
                    }
                }
                (1, 1) if grid.is_walkable(pos) => open_posts += 1,
                _ => {}
            }
        }
    }

    let mut opened_walls = 0;
    for (&pos, &node) in &nodes {
        for (dr, dc) in [(0, 2), (2, 0)] {
            let Some(next) = pos.offset(dr, dc, size) else {
                continue;
            };
            let Some(&other) = nodes.get(&next) else {
                continue;
            };
            if grid[pos.midpoint(next)] == CellValue::Walkable {
                graph.add_edge(node, other, ());
                opened_walls += 1;
            }
        }
    }

    MazeReport {
        maze_cells,
        open_maze_cells: nodes.len(),
        opened_walls,
        open_posts,
        components: connected_components(&graph),
        has_cycle: is_cyclic_undirected(&graph),
    }
}

/// Количество 4-связных областей из открытых ячеек.
///
/// Подходит для любых сеток, в том числе со случайной плотностью.
#[must_use]
pub fn walkable_regions(grid: &Grid) -> usize {
    let size = grid.size();
    let mut graph: UnGraph<(), ()> = UnGraph::with_capacity(size.area(), 2 * size.area());
    let node_of =
        |pos: Position| -> NodeIndex { NodeIndex::new(pos.row * size.cols() + pos.col) };
    for _ in 0..size.area() {
        graph.add_node(());
    }

    let mut walls = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            if !grid.is_walkable(pos) {
                walls += 1;
                continue;
            }
            for (dr, dc) in [(0, 1), (1, 0)] {
                if let Some(next) = pos.offset(dr, dc, size) {
                    if grid.is_walkable(next) {
                        graph.add_edge(node_of(pos), node_of(next), ());
                    }
                }
            }
        }
    }

    // Каждая стена — изолированная вершина, её не считаем
    connected_components(&graph) - walls
}
