//! Booking status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a table reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation from staff.
    Pending,
    /// Confirmed reservation.
    Confirmed,
    /// Cancelled by the guest or staff.
    Cancelled,
    /// The party has been seated and the table has turned over.
    Completed,
}

impl BookingStatus {
    /// Statuses whose bookings hold seats.
    pub const OCCUPYING: [BookingStatus; 2] = [Self::Pending, Self::Confirmed];

    /// Every status, in lifecycle order.
    pub const ALL: [BookingStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Cancelled,
        Self::Completed,
    ];

    /// Whether a booking in this status counts toward occupied seats.
    ///
    /// Completed bookings are treated as already turned over, even when their
    /// occupancy window has not ended yet.
    pub fn occupies_seats(&self) -> bool {
        match self {
            Self::Pending | Self::Confirmed => true,
            Self::Cancelled | Self::Completed => false,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown booking status '{other}'")),
        }
    }
}
