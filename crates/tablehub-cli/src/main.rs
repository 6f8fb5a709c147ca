//! `tablehub-cli`: operator commands for a TableHub deployment.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

#[tokio::main]
async fn main() {
    // Command output goes to stdout; logs stay on stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::Cli::parse().execute().await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
