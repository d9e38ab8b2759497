use clap::Parser as _;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = dexterity_site::CliArgs::parse();
    let reports = dexterity_site::run(args)?;
    tracing::info!(pages = reports.len(), "done");
    Ok(())
}
