//! Request DTOs with validation.
//!
//! Every field is optional at the serde level so that a missing or `null`
//! field reaches the handler and is reported with the endpoint's own
//! message instead of a generic body rejection.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// POST /api/bookings/check-availability body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    /// ISO date or timestamp.
    pub date: Option<String>,
    /// `"HH:MM"`.
    pub time_slot: Option<String>,
    /// Party size; zero, negative and `null` mean "not given".
    pub party_size: Option<i64>,
}

/// POST /api/bookings/create body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(required)]
    pub date: Option<String>,
    #[validate(required)]
    pub time_slot: Option<String>,
    #[validate(required, range(min = 1))]
    pub party_size: Option<i64>,
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
    #[validate(required)]
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    /// Trim text fields; whitespace-only values become absent.
    pub fn normalized(self) -> Self {
        Self {
            date: trimmed(self.date),
            time_slot: trimmed(self.time_slot),
            party_size: self.party_size,
            name: trimmed(self.name),
            email: trimmed(self.email),
            phone: trimmed(self.phone),
            notes: trimmed(self.notes),
        }
    }
}

/// POST /api/bookings/slots body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsRequest {
    pub date: Option<String>,
    pub party_size: Option<i64>,
}

/// Trim a text field; `None` when nothing but whitespace remains.
pub fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
