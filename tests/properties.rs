use mazegen::{
    Algorithm, CellValue, Grid, GridSize, MazeError, Position, analyze_perfect,
    generate_binary_tree, generate_density_random, generate_kruskal, generate_maze,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

fn size(rows: usize, cols: usize) -> GridSize {
    GridSize::new(rows, cols).unwrap()
}

/// Обход в ширину по ячейкам лабиринта через открытые стены.
/// Возвращает (достигнутые ячейки, открытые стены).
fn flood_fill(grid: &Grid) -> (usize, usize) {
    let s = grid.size();
    let mut seen = vec![false; s.area()];
    let mut queue = VecDeque::from([Position::new(0, 0)]);
    seen[0] = true;
    let mut reached = 0;

    while let Some(pos) = queue.pop_front() {
        reached += 1;
        for (dr, dc) in [(-2, 0), (2, 0), (0, -2), (0, 2)] {
            let Some(next) = pos.offset(dr, dc, s) else {
                continue;
            };
            let idx = next.row * s.cols() + next.col;
            if !seen[idx] && grid.is_walkable(pos.midpoint(next)) && grid.is_walkable(next) {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }

    let mut walls = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let horizontal = row % 2 == 0 && col % 2 == 1;
            let vertical = row % 2 == 1 && col % 2 == 0;
            if (horizontal || vertical) && grid.is_walkable(Position::new(row, col)) {
                walls += 1;
            }
        }
    }
    (reached, walls)
}

fn maze_cells(grid: &Grid) -> usize {
    grid.rows().div_ceil(2) * grid.cols().div_ceil(2)
}

#[test]
fn perfect_generators_build_spanning_trees() {
    let sizes = [(5, 5), (6, 9), (21, 21), (40, 40), (5, 40), (1, 7), (2, 2)];
    for algorithm in Algorithm::PERFECT {
        for (seed, &(rows, cols)) in sizes.iter().enumerate() {
            let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
            let grid = generate_maze(algorithm, size(rows, cols), &mut rng).unwrap();
            let cells = maze_cells(&grid);

            let (reached, walls) = flood_fill(&grid);
            assert_eq!(reached, cells, "{algorithm} {rows}×{cols}: not connected");
            assert_eq!(walls, cells - 1, "{algorithm} {rows}×{cols}: wrong wall count");

            let report = analyze_perfect(&grid);
            assert!(report.is_perfect(), "{algorithm} {rows}×{cols}: {report:?}");
        }
    }
}

#[test]
fn even_dimensions_shrink_by_one() {
    for algorithm in Algorithm::PERFECT {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = generate_maze(algorithm, size(10, 7), &mut rng).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (9, 7), "{algorithm}");
        assert_eq!(grid.size(), algorithm.output_size(size(10, 7)));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let noisy = generate_maze(
        Algorithm::DensityRandom { density: 0.2 },
        size(10, 8),
        &mut rng,
    )
    .unwrap();
    assert_eq!((noisy.rows(), noisy.cols()), (10, 8));
}

#[test]
fn seeded_generation_is_reproducible() {
    let algorithms = [
        Algorithm::Backtracker,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::BinaryTree,
        Algorithm::DensityRandom { density: 0.35 },
    ];
    for algorithm in algorithms {
        let a = generate_maze(algorithm, size(25, 31), &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = generate_maze(algorithm, size(25, 31), &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b, "{algorithm}");
    }
}

#[test]
fn different_seeds_give_different_mazes() {
    let a = generate_kruskal(size(31, 31), &mut ChaCha8Rng::seed_from_u64(1));
    let b = generate_kruskal(size(31, 31), &mut ChaCha8Rng::seed_from_u64(2));
    assert_ne!(a, b);
}

#[test]
fn density_fraction_converges() {
    let mut walls = 0;
    let mut total = 0;
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate_density_random(size(40, 40), 0.3, &mut rng).unwrap();
        walls += grid.count(CellValue::Wall);
        total += grid.size().area();
    }
    let fraction = walls as f64 / total as f64;
    assert!((fraction - 0.3).abs() < 0.02, "wall fraction {fraction}");
}

#[test]
fn density_extremes_and_out_of_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let open = generate_density_random(size(40, 40), 0.0, &mut rng).unwrap();
    assert_eq!(open.count(CellValue::Walkable), 1600);
    let solid = generate_density_random(size(40, 40), 1.0, &mut rng).unwrap();
    assert_eq!(solid.count(CellValue::Wall), 1600);

    assert!(matches!(
        generate_density_random(size(5, 5), -0.5, &mut rng),
        Err(MazeError::InvalidDensity(_))
    ));
}

#[test]
fn binary_tree_each_cell_opens_one_wall_except_top_right() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate_binary_tree(size(5, 5), &mut rng);
        let s = grid.size();

        for row in (0..s.rows()).step_by(2) {
            for col in (0..s.cols()).step_by(2) {
                let cell = Position::new(row, col);
                // Стена вверх/вправо может быть открыта только самой ячейкой
                let chosen = [(-1, 0), (0, 1)]
                    .into_iter()
                    .filter_map(|(dr, dc)| cell.offset(dr, dc, s))
                    .filter(|&wall| grid.is_walkable(wall))
                    .count();
                let top_right = row == 0 && col == s.cols() - 1;
                let expected = usize::from(!top_right);
                assert_eq!(chosen, expected, "seed {seed}, cell ({row}, {col})");
            }
        }
    }
}

#[test]
fn kruskal_has_no_directional_bias() {
    let mut horizontal = 0usize;
    let mut vertical = 0usize;
    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate_kruskal(size(21, 21), &mut rng);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if !grid.is_walkable(Position::new(row, col)) {
                    continue;
                }
                match (row % 2, col % 2) {
                    (0, 1) => horizontal += 1,
                    (1, 0) => vertical += 1,
                    _ => {}
                }
            }
        }
    }
    let share = horizontal as f64 / (horizontal + vertical) as f64;
    assert!((share - 0.5).abs() < 0.03, "horizontal share {share}");
}

#[test]
fn zero_size_is_rejected_before_generation() {
    assert!(matches!(
        GridSize::new(0, 0),
        Err(MazeError::InvalidGridSize { rows: 0, cols: 0 })
    ));
}
