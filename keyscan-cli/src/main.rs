use clap::Parser;
use colored::Colorize;
use keyscan::{
    scan_channel, scan_shared, timing::time, CliOverrides, KeywordIndex, ScanConfig, ScanError,
    ScanResult,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, ScanError>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Scans files for keywords, comparing a shared-memory and a message-passing driver"
)]
struct Cli {
    /// Files to scan (default: file1.txt through file4.txt)
    files: Vec<PathBuf>,

    /// Keyword to search for (can be specified multiple times)
    #[arg(short = 'k', long = "keyword")]
    keywords: Vec<String>,

    /// Maximum number of workers per driver
    #[arg(short = 'j', long)]
    workers: Option<NonZeroUsize>,

    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ScanConfig::load_from(cli.config.as_deref())?.merge_with_cli(CliOverrides {
        files: cli.files,
        keywords: cli.keywords,
        worker_count: cli.workers,
        log_level: cli.log_level,
    });

    init_tracing(&config.log_level);

    // Pre-check: abort before any scanning if an input file is missing
    if let Err(err) = config.validate() {
        eprintln!("{} {}", "error:".red().bold(), err);
        eprintln!("Create the input files before running the scan.");
        std::process::exit(1);
    }

    run_driver("threaded approach", &config, scan_shared)?;
    println!();
    run_driver("message-passing approach", &config, scan_channel)?;

    Ok(())
}

fn run_driver(
    label: &str,
    config: &ScanConfig,
    driver: fn(&ScanConfig) -> ScanResult<KeywordIndex>,
) -> Result<()> {
    println!("{}:", label.bold());
    let timed = time(label, || driver(config));
    let elapsed_seconds = timed.elapsed_seconds();
    let mut index = timed.value?;
    // Merge order follows worker completion; sort by input order for
    // reproducible output
    index.normalize(&config.files);
    println!("completed in {} seconds", elapsed_seconds);
    print_index(&index);
    Ok(())
}

fn print_index(index: &KeywordIndex) {
    for (keyword, files) in index.iter() {
        if files.is_empty() {
            println!("  {}: (no matches)", keyword.blue());
        } else {
            let joined = files
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}: {}", keyword.blue(), joined);
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
