//! Truck Loader CLI

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u_loading_core::{Config, Dimensions, Error, Strategy};
use u_loading_grid::{
    from_json, parse_blocks, parse_names, render, to_json, Allocator, Footprint, Loader, Shape,
    ShapeCatalog,
};

const EXIT_FAILURE: u8 = 1;
/// Exit code for rejected input (bad shapes, names, configuration).
const EXIT_INPUT: u8 = 2;

#[derive(Parser)]
#[command(name = "truck-loader")]
#[command(about = "Loads parcels into trucks and reports where each one goes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load parcels into trucks
    Load {
        /// Text file with parcel shapes separated by blank lines
        #[arg(short, long, conflicts_with = "names")]
        file: Option<PathBuf>,

        /// Standard parcel names (e.g. "9,6,1,1")
        #[arg(short, long)]
        names: Option<String>,

        /// Allocation strategy
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Maximum number of trucks
        #[arg(short, long)]
        max_trucks: Option<usize>,

        /// Truck size as WxH; repeat to cycle sizes across new trucks
        #[arg(short, long = "truck")]
        trucks: Vec<Dimensions>,

        /// JSON configuration file (command-line options take precedence)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for the loaded trucks (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a JSON export and count parcels per truck
    Unload {
        /// Path to the JSON file
        file: PathBuf,

        /// Also draw the trucks
        #[arg(long)]
        draw: bool,
    },

    /// List the standard parcels
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// One parcel per truck
    One,
    /// First-fit decreasing
    Ffd,
    /// Even round-robin
    Even,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::One => Strategy::OnePerContainer,
            StrategyArg::Ffd => Strategy::FirstFitDecreasing,
            StrategyArg::Even => Strategy::EvenRoundRobin,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn exit_status(err: &anyhow::Error) -> u8 {
    let input = err
        .downcast_ref::<Error>()
        .map_or(false, Error::is_input_error);
    if input {
        EXIT_INPUT
    } else {
        EXIT_FAILURE
    }
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the `warn` default.
/// Library `log` records are forwarded to it.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Load {
            file,
            names,
            strategy,
            max_trucks,
            trucks,
            config,
            output,
        } => {
            let mut config = match config {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str::<Config>(&text)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => Config::default(),
            };
            if let Some(strategy) = strategy {
                config.strategy = strategy.into();
            }
            if let Some(max) = max_trucks {
                config.max_containers = Some(max);
            }
            if !trucks.is_empty() {
                config.dimensions = trucks;
            }

            let shapes = read_shapes(file, names)?;
            let loader = Loader::new(config);
            log::info!(
                "Loading {} parcel(s) with {}",
                shapes.len(),
                loader.config().strategy
            );

            let result = loader.allocate(&shapes)?;
            print!("{}", render(&result));

            let summary = result.summary();
            println!(
                "\n{} parcel(s) in {} truck(s), {} ({})",
                summary.shapes_placed,
                summary.containers_used,
                summary.utilization_percent(),
                summary.strategy
            );

            if let Some(path) = output {
                fs::write(&path, to_json(&result)?)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Trucks saved to {}", path.display());
            }
        }

        Commands::Unload { file, draw } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let result = from_json(&text)?;

            let per_truck = result.shape_counts();
            for (container, counts) in result.containers().iter().zip(&per_truck) {
                println!(
                    "Truck {} ({:.1}% full):",
                    container.index() + 1,
                    container.utilization() * 100.0
                );
                if counts.is_empty() {
                    println!("  (empty)");
                }
                for (id, count) in counts {
                    println!("  {} x{}", id.replace('\n', "/"), count);
                }
            }
            if draw {
                println!();
                print!("{}", render(&result));
            }
        }

        Commands::Catalog => {
            println!("Standard Parcels:");
            println!("=================");
            for (name, shape) in ShapeCatalog::standard().iter() {
                println!("{} ({}x{}):", name, shape.width(), shape.height());
                println!("{}\n", shape);
            }
        }
    }

    Ok(())
}

fn read_shapes(file: Option<PathBuf>, names: Option<String>) -> anyhow::Result<Vec<Shape>> {
    match (file, names) {
        (Some(path), _) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(parse_blocks(&text)?)
        }
        (None, Some(names)) => Ok(ShapeCatalog::standard().lookup_all(parse_names(&names))?),
        (None, None) => bail!("either --file or --names is required"),
    }
}
