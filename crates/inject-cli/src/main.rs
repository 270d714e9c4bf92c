use std::path::Path;

use anyhow::Context;
use clap::Parser;
use inject_config::InjectConfig;

mod cli;
mod pipeline;
mod walk;

fn main() {
    if let Err(error) = run() {
        eprintln!("inject-field error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing()?;

    ensure_dir(&cli.dir)?;
    let config = InjectConfig::load(&cli.dir)
        .with_context(|| format!("failed to load configuration for {}", cli.dir.display()))?;

    let summary = pipeline::run(&cli.dir, &config)?;
    tracing::info!(
        scanned = summary.scanned,
        rewritten = summary.rewritten.len(),
        injected = summary.injected,
        "inject-field finished"
    );
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("INJECT_FIELD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("invalid --dir '{}': directory does not exist", dir.display());
    }
    Ok(())
}
