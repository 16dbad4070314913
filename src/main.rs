use anyhow::{Context, Result};
use clap::Parser;
use gccount::{cli::Cli, config::AnalysisConfig, ingest, report, sweep};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the effective configuration: file (if any), then CLI flags
fn load_config(args: &Cli) -> Result<AnalysisConfig> {
    let base = match &args.config {
        Some(path) => AnalysisConfig::from_toml(path)?,
        None => AnalysisConfig::default(),
    };
    let config = args.apply_overrides(base);

    if let Err(msg) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", msg);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;

    let logs = ingest::ingest(&config).context("Failed to ingest GC logs")?;

    info!("counting gcc");
    let stats = sweep::count_gcc(logs.file_count(), &logs.intervals, config.sweep_options())
        .context("GCC sweep aborted")?;

    let output = report::render(&stats, args.format, &config.time_unit)
        .context("Failed to render report")?;
    print!("{}", output);

    Ok(())
}
