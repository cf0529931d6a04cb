use clap::{Parser, ValueEnum};
use mazegen::{
    Algorithm, BitEncoding, Grid, MazeGenerationParams, analyze_perfect, generate_batch,
    generate_maze, walkable_regions,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Генератор лабиринтов на прямоугольной сетке
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Количество строк (перекрывает конфигурацию)
    #[arg(long)]
    rows: Option<usize>,

    /// Количество столбцов (перекрывает конфигурацию)
    #[arg(long)]
    cols: Option<usize>,

    /// Алгоритм: backtracker, prim, kruskal, binary-tree, random[:плотность]
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Плотность стен для алгоритма random
    #[arg(short, long)]
    density: Option<f64>,

    /// Сид генератора случайных чисел
    #[arg(short, long)]
    seed: Option<u64>,

    /// Количество лабиринтов
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Формат вывода
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Инвертировать 0/1 в матричном выводе (стена = 0)
    #[arg(long)]
    invert: bool,

    /// Вывести структурный отчёт по каждому лабиринту
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// `#` — стена, `.` — проход
    Text,
    /// JSON-массив строк из 0 и 1
    Matrix,
}

impl Cli {
    fn params(&self) -> Result<MazeGenerationParams, Box<dyn std::error::Error>> {
        let mut params = match &self.config {
            Some(path) => {
                eprintln!("🔍 Загрузка конфигурации из {}...", path.display());
                MazeGenerationParams::from_toml_file(path)?
            }
            None => MazeGenerationParams::default(),
        };

        if let Some(rows) = self.rows {
            params.rows = rows;
        }
        if let Some(cols) = self.cols {
            params.cols = cols;
        }
        if let Some(algorithm) = self.algorithm {
            params.algorithm = algorithm;
        }
        if let Some(density) = self.density {
            match &mut params.algorithm {
                Algorithm::DensityRandom { density: d } => *d = density,
                other => eprintln!("⚠️ --density игнорируется для алгоритма {other}"),
            }
        }
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(count) = self.count {
            params.count = count;
        }
        Ok(params)
    }
}

fn print_grid(grid: &Grid, format: Format, encoding: BitEncoding) -> serde_json::Result<()> {
    match format {
        Format::Text => print!("{grid}"),
        Format::Matrix => println!("{}", serde_json::to_string(&grid.to_matrix(encoding))?),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let params = cli.params()?;
    let size = params.grid_size()?;

    eprintln!(
        "Генерация {} лабиринт(ов) {} (размер: {size})...",
        params.count, params.algorithm
    );
    let grids = match params.seed {
        Some(seed) => generate_batch(params.algorithm, size, seed, params.count)?,
        None => {
            let mut rng = ChaCha8Rng::from_entropy();
            (0..params.count)
                .map(|_| generate_maze(params.algorithm, size, &mut rng))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let encoding = if cli.invert {
        BitEncoding::WallIsZero
    } else {
        BitEncoding::WallIsOne
    };

    for (i, grid) in grids.iter().enumerate() {
        if i > 0 && matches!(cli.format, Format::Text) {
            println!();
        }
        print_grid(grid, cli.format, encoding)?;

        if cli.report {
            if params.algorithm.is_perfect() {
                let report = analyze_perfect(grid);
                eprintln!(
                    "📊 #{i}: {}",
                    serde_json::to_string(&report)?
                );
                if !report.is_perfect() {
                    log::error!("maze #{i} is not a spanning tree: {report:?}");
                }
            } else {
                eprintln!(
                    "📊 #{i}: стен {}, проходимых областей {}",
                    grid.count(mazegen::CellValue::Wall),
                    walkable_regions(grid)
                );
            }
        }
    }

    eprintln!("\nГотово!");
    Ok(())
}
