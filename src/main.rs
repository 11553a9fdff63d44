mod cli;
mod application;
mod domain;
mod data;
mod exec;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Parse first: --quiet decides the default log level.
    // RUST_LOG still overrides either default.
    let cli = Cli::parse();

    let directive = if cli.quiet { "train_all=error" } else { "train_all=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    cli.run()
}
