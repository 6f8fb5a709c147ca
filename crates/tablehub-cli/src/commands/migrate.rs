//! Schema migration commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tablehub_core::error::AppError;
use tablehub_database::migration::{migration_status, run_migrations};

use crate::output::{self, OutputFormat};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply all pending migrations
    Run,
    /// List embedded migrations and whether each has been applied
    Status,
}

#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    version: i64,
    description: String,
    applied: bool,
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::connect_postgres(&config).await?;

    let result = match &args.command {
        MigrateCommand::Run => run_migrations(pool.pool())
            .await
            .map(|()| output::print_success("Database schema is up to date")),
        MigrateCommand::Status => migration_status(pool.pool()).await.map(|status| {
            let pending = status.iter().filter(|m| !m.applied).count();
            let rows: Vec<MigrationRow> = status
                .into_iter()
                .map(|m| MigrationRow {
                    version: m.version,
                    description: m.description,
                    applied: m.applied,
                })
                .collect();
            output::print_list(&rows, format);
            if pending > 0 && format == OutputFormat::Table {
                output::print_warning(&format!("{pending} migration(s) pending"));
            }
        }),
    };

    pool.close().await;
    result
}
