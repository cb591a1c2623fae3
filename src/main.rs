//! CLI for creating, solving and drawing mazes

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use amaze::{render, GeneratorConfig, Maze};

/// Create, solve and draw rectangular mazes.
///
/// Options may be combined; they run in the order create, solve, draw.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Args {
    /// Create a maze with ROWS rows and COLS columns, written to FILE
    #[arg(short, long, num_args = 3, value_names = ["ROWS", "COLS", "FILE"])]
    create: Option<Vec<String>>,

    /// Random seed for maze creation
    #[arg(short = 'r', long, default_value_t = GeneratorConfig::DEFAULT_SEED)]
    seed: u64,

    /// Solve the maze in IN, writing the labelled maze to OUT. Use `-` for stdin.
    #[arg(short, long, num_args = 2, value_names = ["IN", "OUT"])]
    solve: Option<Vec<PathBuf>>,

    /// Draw the maze in FILE. Use `-` for stdin.
    #[arg(short, long, value_name = "FILE")]
    draw: Option<PathBuf>,
}

/// Validated jobs of one invocation
#[derive(Debug)]
struct Options {
    create: Option<(GeneratorConfig, PathBuf)>,
    solve: Option<(PathBuf, PathBuf)>,
    draw: Option<PathBuf>,
}

impl TryFrom<Args> for Options {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> anyhow::Result<Self> {
        let create = match args.create {
            Some(values) => {
                let (rows, cols, file) = values
                    .into_iter()
                    .collect_tuple()
                    .ok_or_else(|| anyhow!("--create expects ROWS COLS FILE"))?;
                let rows = rows
                    .parse::<usize>()
                    .with_context(|| format!("Invalid row count `{}`", rows))?;
                let cols = cols
                    .parse::<usize>()
                    .with_context(|| format!("Invalid column count `{}`", cols))?;
                let config = GeneratorConfig::new(rows, cols).with_seed(args.seed);
                Some((config, PathBuf::from(file)))
            }
            None => None,
        };

        let solve = match args.solve {
            Some(paths) => Some(
                paths
                    .into_iter()
                    .collect_tuple()
                    .ok_or_else(|| anyhow!("--solve expects IN OUT"))?,
            ),
            None => None,
        };

        Ok(Options {
            create,
            solve,
            draw: args.draw,
        })
    }
}

/// Set up logs on stderr, filtered by `RUST_LOG`
fn setup_logs() {
    let log_level = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(log_level)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Read layout from file, or from stdin if the path is `-`
fn read_layout(path: &Path) -> anyhow::Result<String> {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))
    }
}

fn write_layout(path: &Path, maze: &Maze) -> anyhow::Result<()> {
    fs::write(path, maze.to_string())
        .with_context(|| format!("Could not write {}", path.display()))
}

fn run(options: &Options) -> anyhow::Result<()> {
    if let Some((config, file)) = &options.create {
        let maze = config.generate()?;
        write_layout(file, &maze)?;
        info!(rows = config.rows, cols = config.cols, seed = config.seed, file = %file.display(), "maze created");
    }

    if let Some((input, output)) = &options.solve {
        let layout = read_layout(input)?;
        let mut maze = Maze::parse_layout(&layout)
            .with_context(|| format!("Could not load maze from {}", input.display()))?;
        let solution = maze.solve()?;
        write_layout(output, &maze)?;
        info!(shortest_path = solution.shortest_path, file = %output.display(), "maze solved");
    }

    if let Some(file) = &options.draw {
        let layout = read_layout(file)?;
        let drawing = render::draw(&layout)
            .with_context(|| format!("Could not draw maze from {}", file.display()))?;
        print!("{}", drawing);
    }
    Ok(())
}

/// Parse options, then create, solve and draw as requested
fn main() -> anyhow::Result<()> {
    setup_logs();
    let options = Options::try_from(Args::parse())?;
    run(&options)
}
