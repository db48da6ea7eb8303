//! intel-report - render intelligence reports in the terminal
//!
//! Usage:
//!   intel-report render <ID>        Fetch a report from the configured source
//!   intel-report inspect <FILE>     Render a local data.json

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use intel_report_core::{render, RenderedReport, ReportDocument};
use intel_report_runtime::{RenderOutcome, ReportViewer, RuntimeConfig};

mod surface;

#[derive(Parser)]
#[command(name = "intel-report", version, about = "Render intelligence reports")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and render a report by id
    Render {
        /// Report identifier
        id: Option<String>,

        /// YAML runtime configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Read reports from this directory
        #[arg(long, conflicts_with = "base_url")]
        root: Option<PathBuf>,

        /// Read reports from this remote store
        #[arg(long)]
        base_url: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Render a local report file
    Inspect {
        /// Path to a data.json file
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn print_report(report: &RenderedReport, format: Format) -> Result<()> {
    match format {
        Format::Text => print!(
            "{}",
            surface::render_text(report).context("Failed to format report")?
        ),
        Format::Json => println!(
            "{}",
            report.to_json().context("Failed to serialize report")?
        ),
    }
    Ok(())
}

async fn run_render(
    id: Option<String>,
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    base_url: Option<String>,
    format: Format,
) -> Result<ExitCode> {
    let mut runtime_config = match config {
        Some(path) => RuntimeConfig::from_yaml_file(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    if let Some(root) = root {
        runtime_config = runtime_config.with_root(root);
    }
    if let Some(base_url) = base_url {
        runtime_config = runtime_config.with_base_url(base_url);
    }
    runtime_config
        .validate()
        .context("Invalid runtime configuration")?;

    let viewer =
        ReportViewer::from_config(&runtime_config).context("Failed to set up report source")?;

    match viewer.render(id.as_deref()).await {
        RenderOutcome::Rendered(report) => {
            print_report(&report, format)?;
            Ok(ExitCode::SUCCESS)
        }
        RenderOutcome::Errored(err) => {
            eprintln!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        RenderOutcome::Superseded => bail!("Render request was superseded"),
    }
}

fn run_inspect(file: PathBuf, format: Format) -> Result<ExitCode> {
    let document = ReportDocument::from_json_file(&file)
        .with_context(|| format!("Failed to read report: {}", file.display()))?;
    print_report(&render(&document), format)?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match cli.command {
        Commands::Render {
            id,
            config,
            root,
            base_url,
            format,
        } => run_render(id, config, root, base_url, format).await,
        Commands::Inspect { file, format } => run_inspect(file, format),
    }
}
