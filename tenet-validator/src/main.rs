// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
// - unwrap_used/expect_used: In a CLI binary, panicking on unrecoverable errors is acceptable.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::exit,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use tenet::principle::PRINCIPLES;
use tracing_subscriber::EnvFilter;

use tenet_validator::output::{write_human, write_json};
use tenet_validator::{DEFAULT_ROOT, ScanConfig, validate_docs};

#[derive(Parser)]
#[command(name = "tenet")]
#[command(about = "Validate a documentation tree against the principle battery")]
#[command(version)]
struct Cli {
    /// Documentation root to validate
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// Exclude patterns (glob format), repeatable
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Maximum file size in bytes
    #[arg(long, default_value_t = ScanConfig::default().max_file_size)]
    max_file_size: u64,

    /// List the principles and exit
    #[arg(long)]
    list_principles: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays machine-readable under --format json.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.list_principles {
        list_principles();
        return Ok(());
    }

    let mut config = ScanConfig::default();
    config.root = cli.root.clone();
    config.exclude = cli.exclude.clone();
    config.max_file_size = cli.max_file_size;

    let report = validate_docs(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => write_human(&report, &mut out)?,
        OutputFormat::Json => write_json(&report, &mut out)?,
    }
    out.flush()?;

    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}

fn list_principles() {
    for principle in PRINCIPLES {
        println!("{}", principle.name().bold());
        println!("    {}", principle.description().dimmed());
    }
}
