//! Slot listing CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tablehub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the slots command
#[derive(Debug, Args)]
pub struct SlotsArgs {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Party size to check each slot against
    #[arg(short, long)]
    pub party_size: Option<u32>,
}

/// Slot display row
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct SlotRow {
    /// Time
    time_slot: String,
    /// Free seats
    available_seats: u32,
    /// Occupied seats
    occupied_seats: u32,
    /// Bookable
    can_book: bool,
}

/// Execute the slots command
pub async fn execute(args: &SlotsArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let stores = super::open_stores(&config).await?;
    let service = super::availability_service(&stores);

    let date = super::parse_date_arg(&args.date)?;
    let listing = service
        .list_slots(date, args.party_size.filter(|p| *p > 0))
        .await?;

    if let Some(closure) = &listing.closure {
        output::print_warning(&format!("{date} is not bookable: {closure}"));
    }

    let rows: Vec<SlotRow> = listing
        .slots
        .iter()
        .map(|s| SlotRow {
            time_slot: s.time_slot.to_string(),
            available_seats: s.report.available_seats,
            occupied_seats: s.report.occupied_seats,
            can_book: s.report.can_book,
        })
        .collect();
    output::print_list(&rows, format);

    stores.close().await;
    Ok(())
}
