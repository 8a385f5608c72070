use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use knapsack_lp::config::RunConfig;
use knapsack_lp::instance::Instance;
use knapsack_lp::knapsack::Knapsack;
use knapsack_lp::plot::{scatter_plot, write_svg};
use knapsack_lp::solver::{GoodLpSolver, MilpStatus};
use knapsack_lp::util::{init_logger, timed};
use log::{LevelFilter, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER", default_value = "output")]
    output_folder: PathBuf,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("no config file provided, using defaults (--config-file to override)");
            RunConfig::default()
        }
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            serde_yaml::from_reader(BufReader::new(file)).context("incorrect config file format")?
        }
    };
    info!("running with config: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let instance = timed("generate", || {
        Instance::generate(config.n_items, config.prng_seed)
    });
    info!(
        "generated {} items (seed: {})",
        instance.len(),
        config.prng_seed
    );

    let selection = timed("solve", || {
        Knapsack::from_instance(&instance, config.capacity).solve_with(&GoodLpSolver)
    });
    match &selection.status {
        MilpStatus::Optimal => info!(
            "selected {} items, total value {}, total weight {}/{}",
            selection.items.len(),
            selection.total_value,
            selection.total_weight,
            config.capacity
        ),
        status => warn!("solver returned no selection ({status:?})"),
    }

    let document = timed("plot", || {
        scatter_plot(&instance, &selection.items, &config.plot)
    });
    write_svg(&document, &args.output_folder.join("knapsack_result.svg"))?;

    Ok(())
}
