pub mod analysis;
pub mod config;
pub mod disjoint_set;
pub mod error;
pub mod generator;
pub mod grid;

pub use analysis::{MazeReport, analyze_perfect, walkable_regions};
pub use config::{Algorithm, MazeGenerationParams};
pub use disjoint_set::DisjointSet;
pub use error::{MazeError, Result};
pub use generator::{
    generate_backtracker, generate_batch, generate_binary_tree, generate_density_random,
    generate_kruskal, generate_maze, generate_prim,
};
pub use grid::{
    BitEncoding, CellValue, Grid, GridSize, Position, make_walkable_grid, make_wall_grid,
};
