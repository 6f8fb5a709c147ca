//! Booking inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tablehub_core::error::AppError;
use tablehub_entity::booking::BookingStatus;

use crate::output::{self, OutputFormat};

/// Arguments for booking commands
#[derive(Debug, Args)]
pub struct BookingsArgs {
    /// Booking subcommand
    #[command(subcommand)]
    pub command: BookingsCommand,
}

/// Booking subcommands
#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List the bookings on a date
    List {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Include cancelled and completed bookings
        #[arg(long)]
        all: bool,
    },
}

/// Booking display row
#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    /// Booking ID (short)
    id: String,
    /// Time
    time: String,
    /// Guests
    party: i32,
    /// Name
    name: String,
    /// Phone
    phone: String,
    /// Status
    status: String,
}

/// Execute booking commands
pub async fn execute(
    args: &BookingsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let stores = super::open_stores(&config).await?;

    match &args.command {
        BookingsCommand::List { date, all } => {
            let date = super::parse_date_arg(date)?;
            let statuses: &[BookingStatus] = if *all {
                &BookingStatus::ALL
            } else {
                &BookingStatus::OCCUPYING
            };
            let bookings = stores.bookings.find_by_date(date, statuses).await?;

            match format {
                OutputFormat::Json => output::print_json(&bookings),
                OutputFormat::Table => {
                    let seats: i32 = bookings
                        .iter()
                        .filter(|b| b.status.occupies_seats())
                        .map(|b| b.party_size)
                        .sum();
                    let rows: Vec<BookingRow> = bookings
                        .iter()
                        .map(|b| BookingRow {
                            id: b.id.to_string()[..8].to_string(),
                            time: b.time_slot.to_string(),
                            party: b.party_size,
                            name: b.name.clone(),
                            phone: b.phone.clone(),
                            status: b.status.to_string(),
                        })
                        .collect();
                    output::print_list(&rows, format);
                    println!("\n{} booking(s), {seats} seat(s) held on {date}", rows.len());
                }
            }
        }
    }

    stores.close().await;
    Ok(())
}
