use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

mod config;
mod error;
mod render;

use config::{Overrides, RunConfig};
use error::{CliError, CliResult};
use render::{OutputFormat, write_trajectory};

#[derive(Parser)]
#[command(name = "ep-cli")]
#[command(about = "EpiFlow CLI - discrete-time compartmental epidemic models", long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,
    /// YAML run configuration; flags take precedence over its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Output file path (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Run verbosely
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    cli.overrides.apply(&mut config);

    cmd_run(&config, cli.format, cli.output.as_deref())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn cmd_run(config: &RunConfig, format: OutputFormat, output: Option<&Path>) -> CliResult<()> {
    debug!(
        model = %config.model,
        params = ?config.params,
        cycles = config.cycles,
        "resolved run configuration"
    );

    let mut model = config.model.build(&config.params)?;
    let points = model.run(config.cycles)?;
    debug!(points, "simulation finished");

    let trajectory = model.dump();

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_trajectory(&trajectory, format, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), points, "wrote trajectory");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_trajectory(&trajectory, format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
