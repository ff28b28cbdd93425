//! quarry CLI: run the sample query catalogue against a dataset.

mod present;

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use quarry_core::config::{ConfigFile, EngineConfig};
use quarry_core::dataset::Dataset;
use quarry_core::types::Money;
use quarry_samples::{catalogue, find, Sink};
use tracing_subscriber::EnvFilter;

use present::{JsonlPresenter, TextPresenter};

const BUNDLED_DATASET: &str = include_str!("../../../data/sample_dataset.json");

#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "Run demonstration queries over an in-memory customer/product dataset", long_about = None)]
struct Cli {
    /// JSON dataset to query (defaults to the bundled sample dataset)
    #[arg(long, global = true, env = "QUARRY_DATASET")]
    dataset: Option<PathBuf>,

    /// YAML config file with sample thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every sample in the catalogue
    List,

    /// Run one sample
    Run {
        /// Sample id (see `quarry list`)
        #[arg(short, long)]
        sample: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Run every sample in catalogue order
    RunAll {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Load and validate the dataset, then print a summary
    Validate,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Jsonl,
}

#[derive(Args, Default)]
struct Overrides {
    /// Cutoff for the low-numbers sample
    #[arg(long)]
    low_number_cutoff: Option<i64>,

    /// Threshold for the customers-over-total sample
    #[arg(long)]
    customer_total_threshold: Option<f64>,

    /// Threshold for the customers-with-large-order sample
    #[arg(long)]
    large_order_threshold: Option<f64>,

    /// Prices below this are cheap
    #[arg(long)]
    cheap_below: Option<f64>,

    /// Prices above this are expensive
    #[arg(long)]
    expensive_above: Option<f64>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::List => {
            list_samples();
            Ok(())
        }
        Commands::Run {
            sample,
            format,
            overrides,
        } => run_sample(&cli, sample, *format, overrides),
        Commands::RunAll { format, overrides } => run_all(&cli, *format, overrides),
        Commands::Validate => validate_dataset(&cli),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list_samples() {
    for sample in catalogue() {
        println!("{:<28} {:<22} {}", sample.id, sample.category, sample.title);
    }
}

fn run_sample(
    cli: &Cli,
    id: &str,
    format: OutputFormat,
    overrides: &Overrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let sample = find(id)?;
    let config = load_config(cli, overrides)?;
    let dataset = load_dataset(cli, &config)?;

    let mut sink = make_sink(format);
    sample.run(&dataset, &config.samples, sink.as_mut())?;
    Ok(())
}

fn run_all(
    cli: &Cli,
    format: OutputFormat,
    overrides: &Overrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli, overrides)?;
    let dataset = load_dataset(cli, &config)?;

    let mut sink = make_sink(format);
    let mut failed: Vec<&'static str> = Vec::new();
    for sample in catalogue() {
        if let Err(e) = sample.run(&dataset, &config.samples, sink.as_mut()) {
            tracing::error!(sample = sample.id, error = %e, "sample failed");
            eprintln!("Error in {}: {}", sample.id, e);
            failed.push(sample.id);
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} sample(s) failed: {}", failed.len(), failed.join(", ")).into())
    }
}

fn validate_dataset(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli, &Overrides::default())?;
    let dataset = load_dataset(cli, &config)?;

    println!("✓ Dataset is valid");
    println!("  Customers: {}", dataset.customers.len());
    println!("  Orders:    {}", dataset.order_count());
    println!("  Products:  {}", dataset.products.len());
    println!("  Suppliers: {}", dataset.suppliers.len());
    println!("  Fingerprint: {}", dataset.fingerprint()?);
    Ok(())
}

fn make_sink(format: OutputFormat) -> Box<dyn Sink> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(io::stdout().lock())),
        OutputFormat::Jsonl => Box::new(JsonlPresenter::new(io::stdout().lock())),
    }
}

fn load_config(cli: &Cli, overrides: &Overrides) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config = EngineConfig::from_env();
    if let Some(path) = &cli.config {
        let doc = ConfigFile::from_yaml_str(&fs::read_to_string(path)?)?;
        config.apply_file(&doc);
    }
    apply_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(cfg: &mut EngineConfig, o: &Overrides) {
    let s = &mut cfg.samples;
    if let Some(v) = o.low_number_cutoff {
        s.low_number_cutoff = v;
    }
    if let Some(v) = o.customer_total_threshold {
        s.customer_total_threshold = Money::new(v);
    }
    if let Some(v) = o.large_order_threshold {
        s.large_order_threshold = Money::new(v);
    }
    if let Some(v) = o.cheap_below {
        s.price_tiers.cheap_below = Money::new(v);
    }
    if let Some(v) = o.expensive_above {
        s.price_tiers.expensive_above = Money::new(v);
    }
}

fn load_dataset(cli: &Cli, config: &EngineConfig) -> Result<Dataset, Box<dyn std::error::Error>> {
    let path = cli
        .dataset
        .clone()
        .or_else(|| config.dataset_path.as_ref().map(PathBuf::from));

    let dataset = match &path {
        Some(p) => Dataset::from_path(p)?,
        None => Dataset::from_json_str(BUNDLED_DATASET)?,
    };

    let fingerprint = dataset.fingerprint()?;
    tracing::info!(
        source = %path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "bundled".into()),
        customers = dataset.customers.len(),
        products = dataset.products.len(),
        suppliers = dataset.suppliers.len(),
        fingerprint = %fingerprint.short(),
        "dataset loaded"
    );
    Ok(dataset)
}
