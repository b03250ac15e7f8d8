//! iwords: index a folder of text documents and write a scored word report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use interesting_words::{DocumentReader, IndexResult, ReportConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Parser)]
#[command(
    name = "iwords",
    version,
    about = "Build a scored word index over a folder of text documents"
)]
struct Cli {
    /// Folder containing the documents to index
    #[arg(short, long)]
    input: PathBuf,

    /// File to write the report to (nothing is written when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sort order: iaf, fai or f
    #[arg(short, long = "sortorder")]
    sort_order: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,
}

fn run(cli: Cli) -> IndexResult<()> {
    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    let mut reader = DocumentReader::new(config);
    reader.read_folder(&cli.input)?;
    let scored = reader.compute_importance()?;
    log::info!(
        "{} distinct words, {} with an importance score",
        reader.index().len(),
        scored
    );

    let Some(output) = cli.output else {
        return Ok(());
    };
    match cli.format {
        OutputFormat::Html => reader.write_html(&output, cli.sort_order.as_deref()),
        OutputFormat::Json => reader.write_json(&output, cli.sort_order.as_deref()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
