//! partition-sim CLI
//!
//! Runs the placement strategies over one workload and prints the report

use anyhow::{bail, Context};
use clap::Parser;
use partition_sim::config::{parse_size_list, SimulationConfig, Workload};
use partition_sim::{input, report, Strategy};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "partition-sim")]
#[command(about = "Fixed-partition memory allocation simulator")]
struct Args {
    /// Workload config file (TOML, or JSON with a .json extension)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Block sizes, comma separated (e.g. 100,500,200,300,600)
    #[arg(short = 'b', long)]
    blocks: Option<String>,

    /// Process sizes in arrival order, comma separated
    #[arg(short = 'p', long)]
    processes: Option<String>,

    /// Prompt for block and process sizes on stdin
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Strategy to run (first-fit, best-fit, worst-fit, next-fit); repeatable [default: all]
    #[arg(short = 's', long = "strategy")]
    strategies: Vec<String>,

    /// Output format (text, json) [default: text]
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Parse output format from CLI string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format '{}'. Valid options: text, json",
            s
        )),
    }
}

/// Resolve exactly one workload source into a config
fn load_config(args: &Args) -> anyhow::Result<SimulationConfig> {
    let from_lists = args.blocks.is_some() || args.processes.is_some();
    let sources = [args.config.is_some(), from_lists, args.interactive]
        .iter()
        .filter(|&&set| set)
        .count();

    if sources != 1 {
        bail!(
            "Exactly one workload source is required: \
             --config, --blocks/--processes or --interactive"
        );
    }

    if let Some(path) = &args.config {
        info!("Loading workload from {:?}", path);
        return SimulationConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path));
    }

    if args.interactive {
        let stdin = io::stdin();
        let workload = input::read_workload(stdin.lock(), io::stdout())?;
        return Ok(SimulationConfig::new(workload));
    }

    let block_sizes = parse_size_list(args.blocks.as_deref().unwrap_or_default())
        .context("Invalid --blocks")?;
    let process_sizes = parse_size_list(args.processes.as_deref().unwrap_or_default())
        .context("Invalid --processes")?;
    Ok(SimulationConfig::new(Workload::new(block_sizes, process_sizes)?))
}

fn main() -> anyhow::Result<()> {
    // Warnings only by default so the report stays readable; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let format = parse_format(&args.format).map_err(anyhow::Error::msg)?;

    let mut config = load_config(&args)?;
    if !args.strategies.is_empty() {
        config.strategies = args
            .strategies
            .iter()
            .map(|s| s.parse::<Strategy>())
            .collect::<Result<Vec<_>, _>>()?;
    }

    info!(
        "Workload: {} blocks, {} processes, strategies {:?}",
        config.workload.block_sizes.len(),
        config.workload.process_sizes.len(),
        config.strategies
    );

    let engine = config.workload.engine();
    let comparison = engine.run_selected(&config.strategies);

    let output = match format {
        OutputFormat::Text => {
            report::render_report(&engine.pristine_blocks(), engine.requests(), &comparison)
        }
        OutputFormat::Json => report::render_json(&comparison)?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    stdout.flush()?;

    Ok(())
}
