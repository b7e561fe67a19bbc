//! Availability types shared by the sources, the resolver and the calendar.

use std::fmt;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of days covered by the rolling availability window.
pub const WINDOW_DAYS: u32 = 90;

/// Bookability and price of one calendar day.
///
/// `price` is present exactly when the day is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl AvailabilityEntry {
    pub fn available(date: NaiveDate, price: Decimal) -> Self {
        Self {
            date,
            available: true,
            price: Some(price),
        }
    }

    pub fn booked(date: NaiveDate) -> Self {
        Self {
            date,
            available: false,
            price: None,
        }
    }
}

/// Booked interval from the calendar feed, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Every date in `[start, end)`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// The consecutive days availability is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AvailabilityWindow {
    pub start: NaiveDate,
    pub days: u32,
}

impl AvailabilityWindow {
    /// The standard 90-day window starting at `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            days: WINDOW_DAYS,
        }
    }

    /// Last day (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.days.saturating_sub(1)))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.days as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days > 0 && self.start <= date && date <= self.last_day()
    }
}

/// Which stage of the fallback chain produced a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilitySource {
    Feed,
    Api,
    Mock,
}

impl fmt::Display for AvailabilitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilitySource::Feed => write!(f, "calendar feed"),
            AvailabilitySource::Api => write!(f, "availability API"),
            AvailabilitySource::Mock => write!(f, "generated mock data"),
        }
    }
}

/// A resolved window together with the stage that produced it.
#[derive(Debug, Clone)]
pub struct ResolvedAvailability {
    pub source: AvailabilitySource,
    pub entries: Vec<AvailabilityEntry>,
}

/// Errors from a single availability stage. Never surfaced to visitors.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("failed to parse calendar feed: {0}")]
    Feed(String),

    #[error("response does not cover the availability window")]
    OutOfWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_days_are_end_exclusive() {
        let range = DateRange::new(date(2025, 8, 30), date(2025, 9, 2));
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2025, 8, 30), date(2025, 8, 31), date(2025, 9, 1)]);
        assert!(!range.contains(date(2025, 9, 2)));
    }

    #[test]
    fn test_empty_range() {
        let range = DateRange::new(date(2025, 8, 30), date(2025, 8, 30));
        assert_eq!(range.days().count(), 0);
    }

    #[test]
    fn test_window_bounds() {
        let window = AvailabilityWindow::starting(date(2025, 12, 1));
        assert_eq!(window.dates().count(), 90);
        assert_eq!(window.last_day(), date(2026, 2, 28));
        assert!(window.contains(date(2026, 2, 28)));
        assert!(!window.contains(date(2026, 3, 1)));
        assert!(!window.contains(date(2025, 11, 30)));
    }

    #[test]
    fn test_entry_json_shape() {
        let booked = serde_json::to_value(AvailabilityEntry::booked(date(2025, 8, 1))).unwrap();
        assert_eq!(booked, serde_json::json!({"date": "2025-08-01", "available": false}));

        let open = serde_json::to_value(AvailabilityEntry::available(
            date(2025, 8, 2),
            Decimal::from(180),
        ))
        .unwrap();
        assert_eq!(open["price"].as_f64(), Some(180.0));
    }
}
