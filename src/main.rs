use anyhow::{Context, Result};
use clap::Parser;
use proflog::{cli::Cli, config::ReportConfig, generate_report};
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

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = ReportConfig::resolve(&args).context("Failed to load configuration")?;
    tracing::debug!(?config, "Resolved report configuration");

    // Parse and sort fully before anything reaches stdout
    let report = generate_report(&config.input)?;

    let stdout = std::io::stdout();
    report
        .render(config.format, &mut stdout.lock())
        .context("Failed to write report")?;

    Ok(())
}
