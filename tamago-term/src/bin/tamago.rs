use std::io;

use anyhow::Context;
use clap::Parser;
use tamago_core::config::TamagoConfig;
use tamago_term::cli::Options;
use tamago_term::runner;
use tamago_term::Session;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let mut config = match &options.config {
        Some(path) => TamagoConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TamagoConfig::default(),
    };
    if let Some(name) = &options.name {
        config.pet.name.clone_from(name);
    }

    // Flags win over the config file.
    let log_level = options
        .log_level()
        .unwrap_or_else(|| config.general.log_level.parse().unwrap_or(tracing::Level::WARN));

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting tamago version {}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "configuration loaded");

    let session = Session::new(config, options.seed);
    let stdin = BufReader::new(tokio::io::stdin());
    runner::run(session, stdin, io::stdout(), options.format()).await?;

    tracing::info!("Session ended");
    Ok(())
}
