//! iCal feed parsing and booked-set expansion.

use std::collections::HashSet;

use chrono::{Duration, Local, NaiveDate};
use icalendar::{
    Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, EventLike,
};
use tracing::debug;

use crate::pricing::{nightly_rate, PricingConfig};

use super::models::{AvailabilityEntry, AvailabilityError, AvailabilityWindow, DateRange};

/// Parse every booking event of an iCal document into a [`DateRange`].
///
/// Events without `DTSTART` and cancelled events are skipped. A missing or
/// non-advancing `DTEND` books the start night only. Date-times are truncated
/// to their calendar date, UTC ones after conversion to local time. A body
/// that is not an iCalendar document is an error.
pub fn parse_booked_ranges(ics: &str) -> Result<Vec<DateRange>, AvailabilityError> {
    // The parser accepts almost anything, including HTML error pages
    let is_calendar = ics
        .trim_start_matches('\u{feff}')
        .trim_start()
        .get(..15)
        .is_some_and(|head| head.eq_ignore_ascii_case("BEGIN:VCALENDAR"));
    if !is_calendar {
        return Err(AvailabilityError::Feed(
            "response is not an iCalendar document".to_string(),
        ));
    }

    let calendar: Calendar = ics
        .parse()
        .map_err(|e| AvailabilityError::Feed(format!("{}", e)))?;

    let mut ranges = Vec::new();
    for component in &calendar.components {
        let event = match component {
            CalendarComponent::Event(event) => event,
            _ => continue,
        };

        if event
            .property_value("STATUS")
            .is_some_and(|status| status.eq_ignore_ascii_case("CANCELLED"))
        {
            continue;
        }

        let Some(start) = event.get_start().map(calendar_date) else {
            debug!(
                "Skipping feed event without DTSTART: {:?}",
                event.property_value("UID")
            );
            continue;
        };

        let end = event
            .get_end()
            .map(calendar_date)
            .filter(|end| *end > start)
            .unwrap_or(start + Duration::days(1));

        ranges.push(DateRange::new(start, end));
    }

    Ok(ranges)
}

fn calendar_date(value: DatePerhapsTime) -> NaiveDate {
    match value {
        DatePerhapsTime::Date(date) => date,
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt)) => dt.date(),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => {
            dt.with_timezone(&Local).date_naive()
        }
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            date_time.date()
        }
    }
}

/// Union of all days covered by the ranges.
pub fn booked_dates(ranges: &[DateRange]) -> HashSet<NaiveDate> {
    ranges.iter().flat_map(|range| range.days()).collect()
}

/// One entry per window day: booked days unavailable, the rest priced.
pub fn availability_from_booked(
    window: AvailabilityWindow,
    booked: &HashSet<NaiveDate>,
    pricing: &PricingConfig,
) -> Vec<AvailabilityEntry> {
    window
        .dates()
        .map(|date| {
            if booked.contains(&date) {
                AvailabilityEntry::booked(date)
            } else {
                AvailabilityEntry::available(date, nightly_rate(date, pricing))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Channel Manager//EN\r\n\
BEGIN:VEVENT\r\n\
UID:booking-1\r\n\
DTSTART;VALUE=DATE:20250801\r\n\
DTEND;VALUE=DATE:20250804\r\n\
SUMMARY:Reserved\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:booking-2\r\n\
DTSTART:20250810T120000Z\r\n\
DTEND:20250812T100000Z\r\n\
SUMMARY:Reserved\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:booking-3\r\n\
DTSTART;VALUE=DATE:20250820\r\n\
SUMMARY:Blocked\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:booking-4\r\n\
DTSTART;VALUE=DATE:20250825\r\n\
DTEND;VALUE=DATE:20250827\r\n\
STATUS:CANCELLED\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_parses_date_and_datetime_events() {
        let ranges = parse_booked_ranges(FEED).unwrap();
        assert_eq!(
            ranges,
            vec![
                DateRange::new(date(2025, 8, 1), date(2025, 8, 4)),
                DateRange::new(date(2025, 8, 10), date(2025, 8, 12)),
                DateRange::new(date(2025, 8, 20), date(2025, 8, 21)),
            ]
        );
    }

    #[test]
    fn test_empty_calendar_has_no_bookings() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:test\r\nEND:VCALENDAR\r\n";
        assert!(parse_booked_ranges(ics).unwrap().is_empty());
    }

    #[test]
    fn test_non_calendar_body_is_an_error() {
        for body in [
            "<html><body>503 Service Unavailable</body></html>",
            "",
            "   \r\n",
            "{\"error\": \"unauthorized\"}",
        ] {
            assert!(
                matches!(parse_booked_ranges(body), Err(AvailabilityError::Feed(_))),
                "accepted {:?}",
                body
            );
        }
    }

    #[test]
    fn test_utc_start_uses_local_date() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:test\r\n\
BEGIN:VEVENT\r\n\
UID:late-arrival\r\n\
DTSTART:20250809T230000Z\r\n\
DTEND:20250812T090000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
        let local = |h: u32, d: u32| {
            chrono::NaiveDate::from_ymd_opt(2025, 8, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
                .and_utc()
                .with_timezone(&Local)
                .date_naive()
        };

        let ranges = parse_booked_ranges(ics).unwrap();
        assert_eq!(ranges[0].start, local(23, 9));
        assert_eq!(ranges[0].end, local(9, 12));
    }

    #[test]
    fn test_booked_dates_union() {
        let ranges = vec![
            DateRange::new(date(2025, 8, 1), date(2025, 8, 4)),
            DateRange::new(date(2025, 8, 3), date(2025, 8, 5)),
        ];
        let booked = booked_dates(&ranges);
        assert_eq!(booked.len(), 4);
        assert!(booked.contains(&date(2025, 8, 4)));
        assert!(!booked.contains(&date(2025, 8, 5)));
    }

    #[test]
    fn test_window_marks_booked_days() {
        let pricing = PricingConfig::default();
        let window = AvailabilityWindow::starting(date(2025, 7, 30));
        let booked = booked_dates(&parse_booked_ranges(FEED).unwrap());

        let entries = availability_from_booked(window, &booked, &pricing);
        assert_eq!(entries.len(), 90);
        for entry in &entries {
            if booked.contains(&entry.date) {
                assert!(!entry.available, "{} should be booked", entry.date);
                assert!(entry.price.is_none());
            } else {
                assert!(entry.available, "{} should be free", entry.date);
                assert_eq!(entry.price, Some(nightly_rate(entry.date, &pricing)));
            }
        }
        let aug_3 = entries.iter().find(|e| e.date == date(2025, 8, 3)).unwrap();
        assert!(!aug_3.available);
        let aug_4 = entries.iter().find(|e| e.date == date(2025, 8, 4)).unwrap();
        assert!(aug_4.available);
    }
}
