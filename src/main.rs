/// jsx-labeler: emits structurally-scoped test labels for React Native JSX.
///
/// Scans a directory tree for `.tsx` files and prints one line per
/// recognized interactive element (TextInput, TouchableOpacity):
/// `<file> (<line>,<column>): <label>`.
use anyhow::{Context, Result};
use clap::Parser;
use jsx_labeler::scan;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsx-labeler")]
#[command(about = "Emit test labels for React Native JSX elements", long_about = None)]
#[command(version)]
struct Cli {
    /// Root directory to scan for .tsx files
    root: PathBuf,

    /// Optional log file path for debug logging
    #[arg(short, long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log.as_ref())?;

    std::env::set_current_dir(&cli.root)
        .with_context(|| format!("Failed to change directory to {:?}", cli.root))?;

    // One unseeded generator for the whole run, shared by every match.
    // Label suffixes are not reproducible across runs.
    let mut rng = StdRng::from_entropy();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scan::scan_current_dir(&mut rng, &mut out).context("Scan failed")?;

    Ok(())
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("jsx-labeler.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .init();
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
