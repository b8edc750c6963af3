//! Slack Notify - Message Poster
//!
//! Posts a message and/or adds a reaction, then exits. Any failure is fatal
//! and exits with status 1.

use clap::Parser;
use slack_notify::cli::Args;
use slack_notify::config::Config;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_args(args)?;
    slack_notify::run(&config).await
}
