use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthDirection {
    Prev,
    Next,
}

/// The month shown by the calendar grid. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        if !(1..=12).contains(&month) {
            return Err(BookingError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn step(self, direction: MonthDirection) -> Self {
        match direction {
            MonthDirection::Next if self.month == 12 => Self {
                year: self.year + 1,
                month: 1,
            },
            MonthDirection::Next => Self {
                month: self.month + 1,
                ..self
            },
            MonthDirection::Prev if self.month == 1 => Self {
                year: self.year - 1,
                month: 12,
            },
            MonthDirection::Prev => Self {
                month: self.month - 1,
                ..self
            },
        }
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(self) -> u32 {
        first_weekday(self.year, self.month)
    }

    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Zeller's congruence for the 1st of the month, shifted to 0 = Sunday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    let (mut year, mut month) = (year, month as i32);
    if month < 3 {
        month += 12;
        year -= 1;
    }

    let k = year.rem_euclid(100);
    let j = year.div_euclid(100);
    let h = (1 + 13 * (month + 1) / 5 + k + k / 4 + j / 4 + 5 * j).rem_euclid(7);

    ((h + 6) % 7) as u32
}

/// "June 9, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Monday, June 9, 2025"
pub fn format_weekday_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub id: String,
    pub aria_label: String,
    pub available: bool,
    pub selectable: bool,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Day(cell) => Some(cell),
            CalendarCell::Blank => None,
        }
    }
}

/// Lays out one month: leading blanks up to the first weekday, then one cell
/// per day. Availability is checked by day number only.
pub fn render_grid(
    month: YearMonth,
    available_days: &BTreeSet<u32>,
    today: Option<u32>,
) -> Vec<CalendarCell> {
    let first_weekday = month.first_weekday();
    let days_in_month = month.days_in_month();

    let mut cells = Vec::with_capacity((first_weekday + days_in_month) as usize);
    cells.extend((0..first_weekday).map(|_| CalendarCell::Blank));

    for day in 1..=days_in_month {
        let available = available_days.contains(&day);
        let is_today = today == Some(day);
        let date_string = month
            .date(day)
            .map(format_weekday_date)
            .unwrap_or_else(|| format!("{} {}, {}", month.month_name(), day, month.year));

        let aria_label = if is_today {
            format!("{} - Today", date_string)
        } else if available {
            format!("Select {}", date_string)
        } else {
            format!("{} - Not available", date_string)
        };

        cells.push(CalendarCell::Day(DayCell {
            day,
            // month index stays 0-based to keep ids stable for existing page styles
            id: format!("calendar-day-{}-{}-{}", month.year, month.month - 1, day),
            aria_label,
            available,
            selectable: available,
            today: is_today,
        }));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_2025() -> YearMonth {
        YearMonth::new(2025, 6).unwrap()
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn day_counts_match_the_gregorian_calendar() {
        for year in 1600..=2400 {
            for month in 1..=12 {
                let days = days_in_month(year, month);
                assert!(NaiveDate::from_ymd_opt(year, month, days).is_some(), "{}-{}", year, month);
                assert!(NaiveDate::from_ymd_opt(year, month, days + 1).is_none(), "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn zeller_agrees_with_chrono() {
        for year in [1899, 1900, 1999, 2000, 2024, 2025, 2100] {
            for month in 1..=12 {
                let expected = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap()
                    .weekday()
                    .num_days_from_sunday();
                assert_eq!(first_weekday(year, month), expected, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn month_rolls_over_year_boundaries() {
        let december = YearMonth::new(2025, 12).unwrap();
        assert_eq!(december.step(MonthDirection::Next), YearMonth::new(2026, 1).unwrap());

        let january = YearMonth::new(2025, 1).unwrap();
        assert_eq!(january.step(MonthDirection::Prev), YearMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(matches!(
            YearMonth::new(2025, 13),
            Err(BookingError::InvalidMonth { month: 13, .. })
        ));
        assert!(YearMonth::new(2025, 0).is_err());
    }

    #[test]
    fn grid_starts_with_weekday_blanks() {
        // June 1st 2025 is a Sunday, February 1st 2025 a Saturday.
        let available = BTreeSet::new();
        let june = render_grid(june_2025(), &available, None);
        assert_eq!(june.len(), 30);
        assert!(june[0].as_day().is_some());

        let february = render_grid(YearMonth::new(2025, 2).unwrap(), &available, None);
        assert_eq!(february.len(), 6 + 28);
        assert!(february[..6].iter().all(|cell| *cell == CalendarCell::Blank));
    }

    #[test]
    fn day_cells_carry_availability_and_labels() {
        let available: BTreeSet<u32> = [9, 13].into_iter().collect();
        let cells = render_grid(june_2025(), &available, Some(5));

        let ninth = cells.iter().filter_map(CalendarCell::as_day).find(|c| c.day == 9).unwrap();
        assert!(ninth.available && ninth.selectable);
        assert_eq!(ninth.id, "calendar-day-2025-5-9");
        assert_eq!(ninth.aria_label, "Select Monday, June 9, 2025");

        let tenth = cells.iter().filter_map(CalendarCell::as_day).find(|c| c.day == 10).unwrap();
        assert!(!tenth.selectable);
        assert_eq!(tenth.aria_label, "Tuesday, June 10, 2025 - Not available");

        let fifth = cells.iter().filter_map(CalendarCell::as_day).find(|c| c.day == 5).unwrap();
        assert!(fifth.today);
        assert_eq!(fifth.aria_label, "Thursday, June 5, 2025 - Today");
    }

    #[test]
    fn long_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(format_long_date(date), "June 9, 2025");
        assert_eq!(format_weekday_date(date), "Monday, June 9, 2025");
        assert_eq!(june_2025().to_string(), "June 2025");
    }
}
