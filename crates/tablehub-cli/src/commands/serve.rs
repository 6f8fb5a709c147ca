//! Start the TableHub server.

use clap::Args;

use tablehub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the store provider (postgres or memory)
    #[arg(long)]
    pub provider: Option<String>,

    /// Reject bookings on closed calendar dates
    #[arg(long)]
    pub enforce_calendar_rules: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref provider) = args.provider {
        config.database.provider = provider.clone();
    }
    if args.enforce_calendar_rules {
        config.booking.enforce_calendar_rules = true;
    }
    config.database.backend()?;

    println!("Starting TableHub server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Storage: {}", config.database.provider);

    tablehub_api::run_server(config).await
}
