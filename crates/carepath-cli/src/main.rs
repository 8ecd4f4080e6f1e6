use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use carepath_cli::input::{read_answers, resolve_config};
use carepath_cli::report::build_report;

/// Score one respondent's survey answers and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "carepath-score", version)]
struct Args {
    /// Answer set JSON file, or `-` to read stdin.
    answers: PathBuf,

    /// Scoring config overriding the built-in reference tables.
    #[arg(long, env = "CAREPATH_SCORING_CONFIG")]
    config: Option<PathBuf>,

    /// Add a percentile per domain.
    #[arg(long)]
    percentiles: bool,

    /// Add the dashboard badge level.
    #[arg(long)]
    badge: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = resolve_config(args.config.as_ref())?;
    let answers = read_answers(&args.answers)?;
    let result = carepath_scoring::score_with(&answers, &config);
    tracing::info!(
        overall = carepath_core::models::result::tier_label(result.overall.risk),
        feedback = result.feedback.len(),
        "scoring complete"
    );

    let report = build_report(result, args.percentiles, args.badge);
    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
