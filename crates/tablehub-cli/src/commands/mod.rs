//! CLI command definitions and dispatch.

pub mod availability;
pub mod bookings;
pub mod config;
pub mod migrate;
pub mod serve;
pub mod settings;
pub mod slots;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use tablehub_core::config::{AppConfig, StoreBackend};
use tablehub_core::error::AppError;
use tablehub_core::traits::SystemClock;
use tablehub_database::{DatabasePool, StoreProvider};
use tablehub_service::{AvailabilityService, SettingsResolver};

use crate::output::OutputFormat;

/// TableHub: restaurant table booking availability service
#[derive(Debug, Parser)]
#[command(name = "tablehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// Booking policy inspection and import
    Settings(settings::SettingsArgs),
    /// Booking inspection
    Bookings(bookings::BookingsArgs),
    /// Show the bookable slots for a date
    Slots(slots::SlotsArgs),
    /// Check seat availability for one slot
    Availability(availability::AvailabilityArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
            Commands::Settings(args) => settings::execute(args, &self.config, self.format).await,
            Commands::Bookings(args) => bookings::execute(args, &self.config, self.format).await,
            Commands::Slots(args) => slots::execute(args, &self.config, self.format).await,
            Commands::Availability(args) => {
                availability::execute(args, &self.config, self.format).await
            }
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    debug!(path = config_path, "Loading configuration");
    AppConfig::load_from(config_path)
}

/// Helper: open the configured stores
pub async fn open_stores(config: &AppConfig) -> Result<StoreProvider, AppError> {
    let stores = StoreProvider::from_config(config).await?;
    if stores.backend == StoreBackend::Memory {
        crate::output::print_warning(
            "Using the in-memory store: only bookings made by this process are visible",
        );
    }
    Ok(stores)
}

/// Helper: connect to PostgreSQL, failing for any other provider
pub async fn connect_postgres(config: &AppConfig) -> Result<DatabasePool, AppError> {
    match config.database.backend()? {
        StoreBackend::Postgres => DatabasePool::connect(&config.database).await,
        StoreBackend::Memory => Err(AppError::configuration(
            "This command requires database.provider = \"postgres\"",
        )),
    }
}

/// Helper: availability service over the configured stores
pub fn availability_service(stores: &StoreProvider) -> AvailabilityService {
    AvailabilityService::new(
        SettingsResolver::new(Arc::clone(&stores.settings)),
        Arc::clone(&stores.bookings),
        Arc::new(SystemClock),
    )
}

/// Helper: parse a date argument the same way the HTTP API does
pub fn parse_date_arg(raw: &str) -> Result<chrono::NaiveDate, AppError> {
    tablehub_core::types::parse_booking_date(raw)
        .ok_or_else(|| AppError::validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}
