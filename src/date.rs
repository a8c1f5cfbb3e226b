use chrono::{Datelike, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};

/// two-digit years at or above this value belong to the 1900s, below it to the 2000s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// calendar date without time of day or timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// build from year, month, day; None when the date does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// current UTC calendar date of the given clock
    pub fn today(time_provider: &SafeTimeProvider) -> Self {
        CalendarDate(time_provider.now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// render in one of the accepted input layouts
    ///
    /// Two-digit year layouts only round-trip for years inside the pivot
    /// window (1969..=2068).
    pub fn format(&self, format: DateFormat) -> String {
        let sep = format.separator.as_char();
        let (day, month) = match format.day_month {
            FieldWidth::Flexible => (self.day().to_string(), self.month().to_string()),
            FieldWidth::Padded => (format!("{:02}", self.day()), format!("{:02}", self.month())),
        };
        let year = match format.year {
            YearWidth::Short => format!("{:02}", self.year().rem_euclid(100)),
            YearWidth::Full => format!("{:04}", self.year()),
        };
        format!("{day}{sep}{month}{sep}{year}")
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        CalendarDate(d)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day(), self.month(), self.year())
    }
}

impl FromStr for CalendarDate {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        normalize_date(s)
    }
}

/// separator between day, month and year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Dot,
    Dash,
    Slash,
    Space,
}

impl Separator {
    pub fn as_char(&self) -> char {
        match self {
            Separator::Dot => '.',
            Separator::Dash => '-',
            Separator::Slash => '/',
            Separator::Space => ' ',
        }
    }
}

/// digit count accepted for day and month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// one or two digits (3, 03, 12)
    Flexible,
    /// exactly two digits (03, 12)
    Padded,
}

/// digit count accepted for the year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWidth {
    /// two digits, resolved around `TWO_DIGIT_YEAR_PIVOT`
    Short,
    /// four digits
    Full,
}

/// one accepted day-first input layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub separator: Separator,
    pub day_month: FieldWidth,
    pub year: YearWidth,
}

impl DateFormat {
    pub const fn new(separator: Separator, day_month: FieldWidth, year: YearWidth) -> Self {
        Self { separator, day_month, year }
    }

    /// accepted layouts in match priority order
    ///
    /// Entries never disagree on a valid date: layouts either differ in
    /// separator or year digit count, or the padded layout accepts a subset
    /// of what the flexible layout with the same year width accepts.
    pub const ALL: [DateFormat; 12] = [
        DateFormat::new(Separator::Dot, FieldWidth::Flexible, YearWidth::Short),
        DateFormat::new(Separator::Dot, FieldWidth::Padded, YearWidth::Full),
        DateFormat::new(Separator::Dot, FieldWidth::Flexible, YearWidth::Full),
        DateFormat::new(Separator::Dash, FieldWidth::Flexible, YearWidth::Short),
        DateFormat::new(Separator::Dash, FieldWidth::Padded, YearWidth::Full),
        DateFormat::new(Separator::Dash, FieldWidth::Flexible, YearWidth::Full),
        DateFormat::new(Separator::Slash, FieldWidth::Flexible, YearWidth::Short),
        DateFormat::new(Separator::Slash, FieldWidth::Padded, YearWidth::Full),
        DateFormat::new(Separator::Slash, FieldWidth::Flexible, YearWidth::Full),
        DateFormat::new(Separator::Space, FieldWidth::Flexible, YearWidth::Short),
        DateFormat::new(Separator::Space, FieldWidth::Padded, YearWidth::Full),
        DateFormat::new(Separator::Space, FieldWidth::Flexible, YearWidth::Full),
    ];

    /// human readable layout, e.g. "D.M.YY" or "DD-MM-YYYY"
    pub fn layout(&self) -> String {
        let sep = self.separator.as_char();
        let (day, month) = match self.day_month {
            FieldWidth::Flexible => ("D", "M"),
            FieldWidth::Padded => ("DD", "MM"),
        };
        let year = match self.year {
            YearWidth::Short => "YY",
            YearWidth::Full => "YYYY",
        };
        format!("{day}{sep}{month}{sep}{year}")
    }

    /// parse already-trimmed input against this layout only
    pub fn parse(&self, input: &str) -> Option<CalendarDate> {
        let mut parts = input.split(self.separator.as_char());
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let day_month_ok = |field: &str| match self.day_month {
            FieldWidth::Flexible => (1..=2).contains(&field.len()),
            FieldWidth::Padded => field.len() == 2,
        };
        let year_ok = match self.year {
            YearWidth::Short => year.len() == 2,
            YearWidth::Full => year.len() == 4,
        };
        if !day_month_ok(day) || !day_month_ok(month) || !year_ok {
            return None;
        }

        let day = parse_digits(day)?;
        let month = parse_digits(month)?;
        let year = parse_digits(year)? as i32;
        let year = match self.year {
            YearWidth::Short => resolve_two_digit_year(year),
            YearWidth::Full => year,
        };

        CalendarDate::from_ymd(year, month, day)
    }
}

fn parse_digits(field: &str) -> Option<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// map a two-digit year onto 1969..=2068
pub fn resolve_two_digit_year(yy: i32) -> i32 {
    if yy >= TWO_DIGIT_YEAR_PIVOT {
        1900 + yy
    } else {
        2000 + yy
    }
}

/// parse a day-first date in any accepted layout
///
/// Surrounding whitespace is ignored. Layouts are tried in the order of
/// `DateFormat::ALL` and the first match wins. Impossible calendar dates such
/// as 31.02.2023 match no layout.
pub fn normalize_date(raw: &str) -> Result<CalendarDate> {
    let input = raw.trim();

    DateFormat::ALL
        .iter()
        .find_map(|format| format.parse(input))
        .ok_or_else(|| CalculatorError::InvalidDateFormat {
            input: raw.to_string(),
        })
}
