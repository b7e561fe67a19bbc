//! Month grid for the availability calendar.
//!
//! Builds a render-ready view of one month from the resolved availability
//! window. The grid starts on Sunday; days before the 1st are blank cells.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::availability::AvailabilityEntry;
use crate::i18n::Language;

/// A calendar month, e.g. `2026-10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month;
        self.first_day()
            .iter_days()
            .take_while(move |d| d.month() == month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct InvalidMonth(String);

/// What a day cell shows
#[derive(Debug, Clone, PartialEq)]
pub enum DayState {
    /// Before today; muted, no badge
    Past,
    Available { price: Decimal },
    Booked,
    /// Outside the availability window
    Unknown,
}

/// One day of the grid, with display fields precomputed for the template.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub state: DayState,
    pub is_today: bool,
    pub css_class: String,
    pub badge: String,
    pub has_badge: bool,
}

impl DayCell {
    fn new(date: NaiveDate, state: DayState, is_today: bool, language: Language) -> Self {
        let strings = language.strings();
        let (class, badge) = match &state {
            DayState::Past => ("past-date", String::new()),
            DayState::Available { price } => ("available-date", format!("€{}", price.normalize())),
            DayState::Booked => ("booked-date", strings.booked.to_string()),
            DayState::Unknown => ("unknown-date", String::new()),
        };
        let css_class = if is_today {
            format!("day {} today", class)
        } else {
            format!("day {}", class)
        };

        Self {
            date,
            day: date.day(),
            is_today,
            css_class,
            has_badge: !badge.is_empty(),
            badge,
            state,
        }
    }
}

/// A rendered month
#[derive(Debug, Clone)]
pub struct CalendarMonth {
    pub month: YearMonth,
    pub title: String,
    pub weekday_names: [&'static str; 7],
    pub blank_cells: usize,
    pub days: Vec<DayCell>,
    /// `None` for the current month: past months are not browsable
    pub previous: Option<YearMonth>,
    pub next: YearMonth,
}

impl CalendarMonth {
    /// Build the grid for `requested` (clamped to the current month).
    pub fn build(
        requested: Option<YearMonth>,
        today: NaiveDate,
        entries: &[AvailabilityEntry],
        language: Language,
    ) -> Self {
        let current = YearMonth::of(today);
        let month = requested.filter(|m| *m > current).unwrap_or(current);
        let by_date: HashMap<NaiveDate, &AvailabilityEntry> =
            entries.iter().map(|e| (e.date, e)).collect();

        let days = month
            .days()
            .map(|date| {
                let state = if date < today {
                    DayState::Past
                } else {
                    match by_date.get(&date) {
                        Some(entry) => match entry.price {
                            Some(price) if entry.available => DayState::Available { price },
                            _ => DayState::Booked,
                        },
                        None => DayState::Unknown,
                    }
                };
                DayCell::new(date, state, date == today, language)
            })
            .collect();

        let strings = language.strings();
        Self {
            month,
            title: format!("{} {}", strings.month_name(month.month), month.year),
            weekday_names: strings.weekday_names,
            blank_cells: month.first_day().weekday().num_days_from_sunday() as usize,
            days,
            previous: (month > current).then(|| month.previous()),
            next: month.next(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Link target for the previous month, empty when there is none
    pub fn previous_param(&self) -> String {
        self.previous.map(|m| m.to_string()).unwrap_or_default()
    }

    pub fn next_param(&self) -> String {
        self.next.to_string()
    }
}
