//! Slot generator.

use chrono::NaiveDate;

use tablehub_core::types::{DayOfWeek, TimeSlot};
use tablehub_entity::settings::BookingHours;

/// Offerable start times for `date`, every `interval_minutes` from opening
/// while strictly before closing.
///
/// Only the first `hours` entry for the date's weekday is consulted. The
/// sequence is empty when that entry is missing, closed, lacks a time, or
/// describes an empty or inverted window, and when the interval is zero.
/// Existing bookings are not considered.
pub fn generate_slots(date: NaiveDate, hours: &[BookingHours], interval_minutes: u32) -> SlotIter {
    let day = DayOfWeek::of(date);
    match hours
        .iter()
        .find(|h| h.day_of_week == day)
        .and_then(BookingHours::window)
    {
        Some((opening, closing)) => SlotIter {
            next: opening.minutes_since_midnight(),
            end: closing.minutes_since_midnight(),
            step: interval_minutes,
        },
        None => SlotIter::empty(),
    }
}

/// Finite iterator over slot start times. Clone it to restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIter {
    next: u32,
    end: u32,
    step: u32,
}

impl SlotIter {
    fn empty() -> Self {
        Self {
            next: 0,
            end: 0,
            step: 0,
        }
    }
}

impl Iterator for SlotIter {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        if self.step == 0 || self.next >= self.end {
            return None;
        }
        let slot = TimeSlot::from_minutes(self.next)?;
        self.next = self.next.saturating_add(self.step);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.step == 0 || self.next >= self.end {
            return (0, Some(0));
        }
        let remaining = ((self.end - self.next).div_ceil(self.step)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(day: DayOfWeek, opening: &str, closing: &str) -> BookingHours {
        BookingHours {
            day_of_week: day,
            opening_time: opening.parse().ok(),
            closing_time: closing.parse().ok(),
            is_closed: false,
        }
    }

    fn labels(iter: SlotIter) -> Vec<String> {
        iter.map(|s| s.to_string()).collect()
    }

    // 2025-06-02 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_closing_time_is_never_offered() {
        let table = [hours(DayOfWeek::MONDAY, "08:00", "10:00")];
        assert_eq!(
            labels(generate_slots(monday(), &table, 30)),
            vec!["08:00", "08:30", "09:00", "09:30"]
        );
    }

    #[test]
    fn test_uneven_interval_keeps_last_slot_before_closing() {
        let table = [hours(DayOfWeek::MONDAY, "17:00", "18:00")];
        assert_eq!(
            labels(generate_slots(monday(), &table, 45)),
            vec!["17:00", "17:45"]
        );
    }

    #[test]
    fn test_minutes_roll_over_into_hours() {
        let table = [hours(DayOfWeek::MONDAY, "11:40", "13:00")];
        assert_eq!(
            labels(generate_slots(monday(), &table, 25)),
            vec!["11:40", "12:05", "12:30", "12:55"]
        );
    }

    #[test]
    fn test_empty_for_closed_missing_or_inverted() {
        let closed = [BookingHours {
            is_closed: true,
            ..hours(DayOfWeek::MONDAY, "08:00", "10:00")
        }];
        assert_eq!(generate_slots(monday(), &closed, 30).count(), 0);

        let other_day = [hours(DayOfWeek::TUESDAY, "08:00", "10:00")];
        assert_eq!(generate_slots(monday(), &other_day, 30).count(), 0);

        let inverted = [hours(DayOfWeek::MONDAY, "10:00", "08:00")];
        assert_eq!(generate_slots(monday(), &inverted, 30).count(), 0);

        let zero_length = [hours(DayOfWeek::MONDAY, "10:00", "10:00")];
        assert_eq!(generate_slots(monday(), &zero_length, 30).count(), 0);

        let no_closing = [hours(DayOfWeek::MONDAY, "10:00", "")];
        assert_eq!(generate_slots(monday(), &no_closing, 30).count(), 0);
    }

    #[test]
    fn test_zero_interval_is_empty() {
        let table = [hours(DayOfWeek::MONDAY, "08:00", "10:00")];
        assert_eq!(generate_slots(monday(), &table, 0).count(), 0);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let table = [
            hours(DayOfWeek::MONDAY, "12:00", "13:00"),
            hours(DayOfWeek::MONDAY, "18:00", "19:00"),
        ];
        assert_eq!(
            labels(generate_slots(monday(), &table, 30)),
            vec!["12:00", "12:30"]
        );
    }

    #[test]
    fn test_sunday_is_day_zero() {
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let table = [hours(DayOfWeek::SUNDAY, "12:00", "12:30")];
        assert_eq!(labels(generate_slots(sunday, &table, 15)), vec!["12:00", "12:15"]);
    }

    #[test]
    fn test_restartable_and_sized() {
        let table = [hours(DayOfWeek::MONDAY, "08:00", "10:00")];
        let slots = generate_slots(monday(), &table, 30);
        assert_eq!(slots.len(), 4);
        assert_eq!(labels(slots.clone()), labels(slots));
    }
}
