//! Five-screen demo of the nav-nexus typed navigation graph.

mod app;
mod cli;
mod pages;
mod routes;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::info;
use nav_nexus::{Application, HostConfig};
use std::path::Path;

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = match &cli.config {
        Some(path) => HostConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => HostConfig::default(),
    };
    info!("Starting nav-demo with {:?}", config);

    let mut host = app::build_host(&config)?;
    Application::new(config).run(&mut host)?;

    info!("Exited with back stack {}", host.navigator().snapshot()?);
    Ok(())
}
