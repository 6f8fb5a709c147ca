//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use tablehub_core::error::AppError;
use tablehub_database::connection::mask_password;
use tablehub_database::provider::seed_settings;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            config.database.url = mask_password(&config.database.url);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => {
                    output::print_kv("Server", &config.bind_address());
                    output::print_kv("Storage", &config.database.provider);
                    output::print_kv("Database URL", &config.database.url);
                    output::print_kv("Auto migrate", &config.database.auto_migrate.to_string());
                    output::print_kv("Log level", &config.logging.level);
                    output::print_kv("Log format", &config.logging.format.to_string());
                    output::print_kv(
                        "Calendar rules",
                        if config.booking.enforce_calendar_rules {
                            "enforced"
                        } else {
                            "not enforced"
                        },
                    );
                }
            }
        }
        ConfigCommand::Validate => {
            let checked = super::load_config(config_path).and_then(|config| {
                config.database.backend()?;
                seed_settings(config.booking.settings.as_ref())?;
                Ok(config)
            });
            match checked {
                Ok(config) => {
                    output::print_success(&format!("Configuration '{config_path}' is valid"));
                    output::print_kv("Server", &config.bind_address());
                    output::print_kv("Storage", &config.database.provider);
                    output::print_kv("Database", &mask_password(&config.database.url));
                }
                Err(e) => {
                    output::print_error(&format!("Configuration invalid: {e}"));
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
