//! Binary entry point for the evlp2boel converter.
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use evlp2boel::convert::{run_convert, ConvertConfig, ConvertSummary};
use evlp2boel::ingest::{Directedness, Progress};

#[derive(Parser, Debug)]
#[command(
    name = "evlp2boel",
    version,
    about = "Converts vertex/edge list text files into a binary ordered edge list",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        short = 'd',
        long = "directed",
        help = "Treat the edge file as directed (default: undirected)"
    )]
    directed: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for the conversion summary"
    )]
    format: OutputFormat,

    #[arg(value_name = "DIR", help = "Directory containing the input files")]
    path: PathBuf,

    #[arg(
        value_name = "GRAPH",
        help = "Graph name; reads <GRAPH>.v and <GRAPH>.e, writes <GRAPH>.boel"
    )]
    graph: String,

    #[arg(
        value_name = "VERTEX_COUNT",
        help = "Expected number of vertices (table sizing hint)"
    )]
    vertex_count: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

/// Progress sink backed by an indicatif spinner on stderr.
struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("static spinner template")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        Self { pb }
    }

    fn finish(self) {
        self.pb.finish_and_clear();
    }
}

impl Progress for SpinnerProgress {
    fn lines_read(&mut self, lines: u64) {
        self.pb.set_message(format!("{lines} lines read"));
        self.pb.tick();
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let cfg = build_config(&cli);

    let mut progress = SpinnerProgress::new();
    let summary = run_convert(&cfg, &mut progress)?;
    progress.finish();

    emit(cli.format, &summary)?;
    Ok(())
}

fn build_config(cli: &Cli) -> ConvertConfig {
    let directedness = if cli.directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    ConvertConfig {
        vertex_path: cli.path.join(format!("{}.v", cli.graph)),
        edge_path: cli.path.join(format!("{}.e", cli.graph)),
        output_path: cli.path.join(format!("{}.boel", cli.graph)),
        vertex_count_hint: cli.vertex_count,
        directedness,
    }
}

fn emit(format: OutputFormat, summary: &ConvertSummary) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Text => {
            println!(
                "Converted {} vertices and {} edges ({:.2}% isolated)",
                summary.vertices, summary.edges, summary.isolated_pct
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
    }
    Ok(())
}
