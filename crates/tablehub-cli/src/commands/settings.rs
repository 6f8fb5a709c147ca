//! Booking policy CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use tablehub_core::error::AppError;
use tablehub_database::repositories::SettingsRepository;
use tablehub_entity::settings::{BlackoutDate, BookingSettingsRecord};
use tablehub_service::CalendarPolicy;

use crate::output::{self, OutputFormat};

/// Arguments for settings commands
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Settings subcommand
    #[command(subcommand)]
    pub command: SettingsCommand,
}

/// Settings subcommands
#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the resolved booking policy
    Show,
    /// Replace the stored policy with the contents of a TOML or JSON file
    Import {
        /// Settings file path
        file: String,
    },
}

/// Booking hours display row
#[derive(Debug, Serialize, Tabled)]
struct HoursRow {
    /// Weekday
    day: String,
    /// Opening
    opening: String,
    /// Closing
    closing: String,
    /// Closed
    closed: String,
}

/// Resolved policy as printed in JSON mode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsView {
    total_seating_capacity: u32,
    table_occupancy_duration: u32,
    max_party_size: u32,
    time_slot_duration: u32,
    advance_booking_days: u32,
    last_bookable_date: NaiveDate,
    closed_weekdays: Vec<u8>,
    blackout_dates: Vec<BlackoutDate>,
    booking_hours: Vec<HoursRow>,
}

/// Execute settings commands
pub async fn execute(
    args: &SettingsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        SettingsCommand::Show => {
            let stores = super::open_stores(&config).await?;
            let service = super::availability_service(&stores);
            let settings = service.settings().await?;
            let last_bookable =
                CalendarPolicy::new(&settings, service.today()).last_bookable_date();

            let hours: Vec<HoursRow> = settings
                .booking_hours
                .iter()
                .map(|h| HoursRow {
                    day: h.day_of_week.to_string(),
                    opening: h.opening_time.map(|t| t.to_string()).unwrap_or_default(),
                    closing: h.closing_time.map(|t| t.to_string()).unwrap_or_default(),
                    closed: if h.is_closed { "✓" } else { "" }.to_string(),
                })
                .collect();

            match format {
                OutputFormat::Json => output::print_json(&SettingsView {
                    total_seating_capacity: settings.total_seating_capacity,
                    table_occupancy_duration: settings.table_occupancy_duration,
                    max_party_size: settings.max_party_size,
                    time_slot_duration: settings.time_slot_duration,
                    advance_booking_days: settings.advance_booking_days,
                    last_bookable_date: last_bookable,
                    closed_weekdays: settings.closed_weekdays.iter().map(|d| d.value()).collect(),
                    blackout_dates: settings
                        .blackout_dates
                        .iter()
                        .map(|(date, reason)| BlackoutDate {
                            date: *date,
                            reason: reason.clone(),
                        })
                        .collect(),
                    booking_hours: hours,
                }),
                OutputFormat::Table => {
                    output::print_kv("Seating capacity", &settings.total_seating_capacity.to_string());
                    output::print_kv(
                        "Table occupancy",
                        &format!("{} min", settings.table_occupancy_duration),
                    );
                    output::print_kv("Max party size", &settings.max_party_size.to_string());
                    output::print_kv(
                        "Slot interval",
                        &format!("{} min", settings.time_slot_duration),
                    );
                    output::print_kv(
                        "Advance booking",
                        &format!("{} days (until {last_bookable})", settings.advance_booking_days),
                    );
                    let closed: Vec<String> =
                        settings.closed_weekdays.iter().map(|d| d.to_string()).collect();
                    output::print_kv("Closed weekdays", &closed.join(", "));
                    for (date, reason) in &settings.blackout_dates {
                        output::print_kv(
                            "Blackout",
                            &format!("{date} {}", reason.as_deref().unwrap_or("")),
                        );
                    }
                    println!();
                    output::print_list(&hours, format);
                }
            }
            stores.close().await;
        }
        SettingsCommand::Import { file } => {
            let record: BookingSettingsRecord = config::Config::builder()
                .add_source(config::File::with_name(file).required(true))
                .build()
                .and_then(|c| c.try_deserialize())
                .map_err(|e| {
                    AppError::configuration(format!("Failed to read settings file '{file}': {e}"))
                })?;

            let pool = super::connect_postgres(&config).await?;
            SettingsRepository::new(pool.pool().clone())
                .replace(&record)
                .await?;
            pool.close().await;

            output::print_success(&format!(
                "Imported booking settings ({} blackout dates, {} booking hours entries)",
                record.blackout_dates.len(),
                record.booking_hours.len()
            ));
        }
    }

    Ok(())
}
