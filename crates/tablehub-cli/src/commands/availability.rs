//! Availability check CLI command.

use clap::Args;

use tablehub_core::error::AppError;
use tablehub_core::types::TimeSlot;

use crate::output::{self, OutputFormat};

/// Arguments for the availability command
#[derive(Debug, Args)]
pub struct AvailabilityArgs {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Time slot (HH:MM)
    pub time_slot: String,
    /// Party size
    #[arg(short, long)]
    pub party_size: Option<u32>,
}

/// Execute the availability command
pub async fn execute(
    args: &AvailabilityArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let date = super::parse_date_arg(&args.date)?;
    let time_slot: TimeSlot = args
        .time_slot
        .parse()
        .map_err(|e| AppError::validation(format!("{e}")))?;

    let config = super::load_config(config_path)?;
    let stores = super::open_stores(&config).await?;
    let report = super::availability_service(&stores)
        .check(date, time_slot, args.party_size.filter(|p| *p > 0))
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&report),
        OutputFormat::Table => {
            output::print_kv("Slot", &format!("{date} {time_slot}"));
            output::print_kv("Capacity", &report.total_capacity.to_string());
            output::print_kv("Occupied", &report.occupied_seats.to_string());
            output::print_kv("Available", &report.available_seats.to_string());
            output::print_kv("Can book", if report.can_book { "yes" } else { "no" });
        }
    }

    stores.close().await;
    Ok(())
}
