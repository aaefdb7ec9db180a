use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use roster_report::{load_roster, render_json, render_text, run_script, ReportConfig};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Load an employee roster from CSV and print the roster report."
)]
struct Cli {
    /// TOML file overriding the report constants.
    #[arg(long, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Roster CSV file (header + name,dd/mm/yyyy,salary,title rows).
    #[arg(long, env = "ROSTER_INPUT")]
    input: Option<PathBuf>,

    /// Base salary used to express salaries in base units.
    #[arg(long, env = "ROSTER_BASE_UNIT")]
    base_unit: Option<Decimal>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    debug!(?config, "resolved configuration");

    let roster = load_roster(&config.input)
        .with_context(|| format!("Failed to load roster from {}", config.input.display()))?;

    let today = chrono::Local::now().date_naive();
    let report = run_script(roster, &config, today).context("Report script failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        render_json(&report, &mut out)?;
    } else {
        render_text(&report, &mut out)?;
    }
    out.flush().context("Failed to write report")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

/// Defaults, then the optional TOML file, then CLI flags / env vars.
fn resolve_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_toml_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(base_unit) = cli.base_unit {
        config.base_unit = base_unit;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
