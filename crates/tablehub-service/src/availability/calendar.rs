//! Calendar eligibility.

use std::fmt;

use chrono::{Days, NaiveDate};

use tablehub_core::types::DayOfWeek;

use crate::settings::BookingSettings;

/// Why a date is not open for booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateClosure {
    /// The date is before today.
    InPast,
    /// The date lies past the advance booking horizon.
    BeyondHorizon {
        /// Last date that can still be booked.
        last_bookable: NaiveDate,
    },
    /// An explicit blackout date.
    Blackout {
        /// Administrator supplied reason, if any.
        reason: Option<String>,
    },
    /// A weekday that is closed every week.
    ClosedWeekday(DayOfWeek),
    /// The booking hours for the weekday are marked closed.
    ClosedHours(DayOfWeek),
}

impl DateClosure {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InPast => "past",
            Self::BeyondHorizon { .. } => "beyond_horizon",
            Self::Blackout { .. } => "blackout",
            Self::ClosedWeekday(_) => "closed_weekday",
            Self::ClosedHours(_) => "closed_hours",
        }
    }
}

impl fmt::Display for DateClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InPast => write!(f, "date is in the past"),
            Self::BeyondHorizon { last_bookable } => {
                write!(f, "bookings open up to {last_bookable}")
            }
            Self::Blackout { reason: Some(reason) } => write!(f, "closed: {reason}"),
            Self::Blackout { reason: None } => write!(f, "closed on this date"),
            Self::ClosedWeekday(day) => write!(f, "closed every {day}"),
            Self::ClosedHours(day) => write!(f, "no booking hours on {day}"),
        }
    }
}

/// Decides which calendar dates accept bookings, relative to `today`.
#[derive(Debug, Clone, Copy)]
pub struct CalendarPolicy<'a> {
    settings: &'a BookingSettings,
    today: NaiveDate,
}

impl<'a> CalendarPolicy<'a> {
    pub fn new(settings: &'a BookingSettings, today: NaiveDate) -> Self {
        Self { settings, today }
    }

    /// Furthest date still inside the advance booking horizon.
    pub fn last_bookable_date(&self) -> NaiveDate {
        self.today
            .checked_add_days(Days::new(u64::from(self.settings.advance_booking_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The reason `date` is closed, or `None` when it accepts bookings.
    pub fn closure(&self, date: NaiveDate) -> Option<DateClosure> {
        if date < self.today {
            return Some(DateClosure::InPast);
        }
        let last_bookable = self.last_bookable_date();
        if date > last_bookable {
            return Some(DateClosure::BeyondHorizon { last_bookable });
        }
        if let Some(reason) = self.settings.blackout_dates.get(&date) {
            return Some(DateClosure::Blackout {
                reason: reason.clone(),
            });
        }
        let day = DayOfWeek::of(date);
        if self.settings.closed_weekdays.contains(&day) {
            return Some(DateClosure::ClosedWeekday(day));
        }
        if self.settings.hours_for(day).is_some_and(|h| h.is_closed) {
            return Some(DateClosure::ClosedHours(day));
        }
        None
    }

    pub fn is_open(&self, date: NaiveDate) -> bool {
        self.closure(date).is_none()
    }
}
