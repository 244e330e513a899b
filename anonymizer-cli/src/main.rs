//! `anonymize`: mask sensitive fields in a JSON, CSV or XML file.
//!
//! ```text
//! anonymize people.json masked.json --config rules.json
//! anonymize people.dat masked.dat -c rules.json --format csv --seed 42
//! ```

use std::path::PathBuf;

use anonymizer::{
    config,
    formats::{self, Format},
    FakeSource, MaskOptions, Masker, DEFAULT_MAX_DEPTH,
};
use anyhow::{Context, Result};
use clap::Parser;
use slog::{debug, info, o, warn, Drain, Level, Logger};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "anonymize",
    author,
    version,
    about = "Replace sensitive fields in JSON, CSV or XML records with synthetic values"
)]
struct Args {
    /// File to read.
    input: PathBuf,

    /// File to write the masked document to.
    output: PathBuf,

    /// Rule configuration (JSON object of field name to rule).
    #[arg(short, long, env = "ANONYMIZE_CONFIG")]
    config: PathBuf,

    /// Input format; inferred from the input file extension when omitted.
    #[arg(short, long)]
    format: Option<Format>,

    /// Seed for reproducible synthetic values.
    #[arg(long, env = "ANONYMIZE_SEED")]
    seed: Option<u64>,

    /// Deepest XML element nesting accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log level (trace, debug, info, warning, error, critical).
    #[arg(
        short,
        long,
        env = "ANONYMIZE_LOG_LEVEL",
        default_value = "info",
        value_parser = parse_level
    )]
    log_level: Level,
}

fn parse_level(name: &str) -> Result<Level, String> {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::Trace),
        "debug" => Ok(Level::Debug),
        "info" => Ok(Level::Info),
        "warn" | "warning" => Ok(Level::Warning),
        "error" => Ok(Level::Error),
        "crit" | "critical" => Ok(Level::Critical),
        other => Err(format!("unknown log level `{other}`")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = build_logger(args.log_level);
    let result = run(&args, &logger);
    if let Err(err) = &result {
        slog::error!(logger, "anonymization failed"; "error" => format!("{err:#}"));
    }
    // Dropping the last logger handle flushes the async drain.
    drop(logger);
    result
}

fn build_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(level).fuse();
    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}

fn run(args: &Args, logger: &Logger) -> Result<()> {
    let rules = config::load_rule_table(&args.config)
        .with_context(|| format!("Failed to load rules from {}", args.config.display()))?;
    for (field, raw) in rules.invalid_rules() {
        warn!(logger, "rule will not evaluate"; "field" => field, "rule" => raw);
    }
    debug!(logger, "loaded rules"; "count" => rules.len());

    let document = formats::read_document(&args.input, args.format)
        .with_context(|| format!("Failed to read input {}", args.input.display()))?;
    info!(logger, "decoded input";
        "path" => %args.input.display(),
        "format" => %document.format());

    let source = args.seed.map_or_else(FakeSource::new, FakeSource::seeded);
    let mut masker = Masker::with_source(rules, source)
        .with_logger(logger.new(o!("input" => args.input.display().to_string())))
        .with_options(MaskOptions {
            max_depth: args.max_depth,
        });
    let masked = masker
        .mask_document(document)
        .context("Failed to mask input")?;

    formats::write_document(&args.output, &masked)
        .with_context(|| format!("Failed to write output {}", args.output.display()))?;

    info!(logger, "anonymization complete"; "stats" => masker.stats());
    println!("Anonymized data written to {}", args.output.display());
    Ok(())
}
