use anyhow::Context;
use clap::Parser;
use portfolio_allocation::config::ConfigManager;
use portfolio_allocation::data::JsonConnector;
use portfolio_allocation::engines::generation::{ConsoleProgressCallback, LogProgressCallback};
use portfolio_allocation::report;
use portfolio_allocation::AllocationSearch;
use std::path::PathBuf;

/// Portfolio allocation with multiple targets using a genetic algorithm.
///
/// For example, compute share counts for data-example.json with 10000
/// generations and a total value of 50000:
///
///     portfolio-allocation data-example.json -g 10000 -v 50000
#[derive(Parser, Debug)]
#[command(name = "portfolio-allocation", version)]
struct Cli {
    /// JSON file describing shares and targets
    #[arg(required_unless_present = "show_config", value_parser = existing_file)]
    data_file: Option<PathBuf>,

    /// Config file (default is $HOME/.portfolio-allocation.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of generations [default: 10000]
    #[arg(short = 'g', long = "generations", alias = "nb-gen")]
    generations: Option<usize>,

    /// Target total value [default: 50000]
    #[arg(short = 'v', long)]
    target_value: Option<f64>,

    /// Maximum of shares for one holding in the initial population [default: 10000]
    #[arg(short = 'm', long)]
    max_shares: Option<u64>,

    /// Number of candidates per generation [default: 30]
    #[arg(short = 'p', long)]
    population_size: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate candidates on a single thread
    #[arg(long)]
    no_parallel: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,

    /// Send progress lines to the log instead of stdout
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("data file does not exist: {}", value))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut manager = ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?;
    manager
        .update(|config| {
            if let Some(generations) = cli.generations {
                config.generations = generations;
            }
            if let Some(target_value) = cli.target_value {
                config.target_value = target_value;
            }
            if let Some(max_shares) = cli.max_shares {
                config.max_shares = max_shares;
            }
            if let Some(population_size) = cli.population_size {
                config.population_size = population_size;
            }
            if cli.seed.is_some() {
                config.seed = cli.seed;
            }
            if cli.no_parallel {
                config.parallel = false;
            }
        })
        .context("Invalid command-line options")?;

    if cli.show_config {
        print!("{}", manager.to_toml_string()?);
        return Ok(());
    }

    let data_file = cli.data_file.context("a data file is required")?;
    let dataset = JsonConnector::load_and_validate(&data_file)
        .with_context(|| format!("Failed to load {}", data_file.display()))?;
    let metadata = JsonConnector::create_metadata(&data_file, &dataset);
    log::info!(
        "Loaded {} shares and {} targets from {} (domains: {:?})",
        metadata.num_shares,
        metadata.num_targets,
        metadata.file_path,
        metadata.domains
    );

    let mut search = AllocationSearch::new(dataset, manager.get()).context("Failed to create the search")?;
    let result = if cli.quiet {
        search.run(&mut LogProgressCallback)?
    } else {
        search.run(&mut ConsoleProgressCallback)?
    };

    print!("{}", report::render_result(&result.best.genome));
    print!("{}", report::render_allocations(&result.best.genome));

    Ok(())
}
