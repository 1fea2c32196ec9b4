//! Date instants, ranges, and the range-string parser.
//!
//! CV sheets carry human-authored range strings: a semicolon-delimited
//! list of entries, each `"<start>-<end>"`, `"<start>-"` (open end), or a
//! single `"<start>"`. Start and end tokens are `"Mon YYYY"` or a bare
//! `"YYYY"`; day-precision sections use `"D Mon YYYY"`. Bare years and
//! month-years are completed to the first day they denote.

use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;

/// A calendar instant. Month-year strings are completed to the 1st of the
/// month, bare years to January 1st.
pub type Instant = NaiveDate;

/// The current date, used when an open end must resolve to "now" at query
/// time.
pub fn today() -> Instant {
    Utc::now().date_naive()
}

/// Token precision of a section's date strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrecision {
    /// `"Mon YYYY"` or `"YYYY"` (publications, experience, teaching).
    MonthYear,
    /// `"D Mon YYYY"`, `"Mon YYYY"`, or `"YYYY"` (education, news).
    DayMonthYear,
}

/// A context-free date parsing failure; callers attach section/record/
/// field context when mapping into [`crate::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input held no entries after trimming and filtering.
    Empty,
    /// A token did not parse as a date, or a range ran backwards.
    BadToken(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Empty => write!(f, "no date ranges"),
            DateError::BadToken(token) => write!(f, "cannot parse '{}'", token),
        }
    }
}

/// One date range. `end: None` means ongoing — the open end is never
/// stored as a concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Instant,
    pub end: Option<Instant>,
}

impl DateRange {
    /// Whether this range has no recorded end.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

/// The ordered date ranges of one record, sorted descending by start.
///
/// Never empty once built: an input with no entries fails parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSet {
    ranges: Vec<DateRange>,
}

impl DateRangeSet {
    /// Parse a semicolon-delimited list of range strings.
    ///
    /// `accept_present` enables the literal token `present` as an open
    /// end (used only by the Experience section).
    pub fn parse(
        raw: &str,
        precision: DatePrecision,
        accept_present: bool,
    ) -> Result<Self, DateError> {
        let mut ranges = Vec::new();
        for entry in raw.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            ranges.push(parse_range(entry, precision, accept_present)?);
        }
        if ranges.is_empty() {
            return Err(DateError::Empty);
        }
        ranges.sort_by(|a, b| b.start.cmp(&a.start));
        Ok(DateRangeSet { ranges })
    }

    /// The ranges, descending by start.
    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    /// Earliest start over all entries.
    pub fn earliest_start(&self) -> Instant {
        // sorted descending and never empty once built
        self.ranges
            .iter()
            .map(|r| r.start)
            .min()
            .unwrap_or(Instant::MIN)
    }

    /// Latest end over all entries.
    ///
    /// Open entries are excluded from the max — except when the set has
    /// exactly one entry, where an open end reads as `today`. Returns
    /// `None` when several entries exist and all are open.
    pub fn latest_end(&self, today: Instant) -> Option<Instant> {
        match self.ranges.as_slice() {
            [only] => Some(only.end.unwrap_or(today)),
            ranges => ranges.iter().filter_map(|r| r.end).max(),
        }
    }

    /// The end used for chronological ordering: an open-ended set ranks
    /// as of `today`.
    pub fn end_for_ordering(&self, today: Instant) -> Instant {
        self.latest_end(today).unwrap_or(today)
    }

    /// Whether any entry is ongoing.
    pub fn is_ongoing(&self) -> bool {
        self.ranges.iter().any(DateRange::is_open)
    }
}

/// Parse a single instant token, completing bare years and month-years.
pub fn parse_instant(token: &str, precision: DatePrecision) -> Result<Instant, DateError> {
    let words: Vec<&str> = token.split_whitespace().collect();
    let completed = match (precision, words.as_slice()) {
        (_, [year]) => format!("1 Jan {}", year),
        (_, [month, year]) => format!("1 {} {}", month, year),
        (DatePrecision::DayMonthYear, [day, month, year]) => {
            format!("{} {} {}", day, month, year)
        }
        _ => return Err(DateError::BadToken(token.trim().to_string())),
    };
    NaiveDate::parse_from_str(&completed, "%d %b %Y")
        .map_err(|_| DateError::BadToken(token.trim().to_string()))
}

fn parse_range(
    entry: &str,
    precision: DatePrecision,
    accept_present: bool,
) -> Result<DateRange, DateError> {
    let (start, end) = match entry.split_once('-') {
        None => (parse_instant(entry, precision)?, None),
        Some((start_token, end_token)) => {
            let start = parse_instant(start_token, precision)?;
            let end_token = end_token.trim();
            let end = if end_token.is_empty() || (accept_present && end_token == "present") {
                None
            } else {
                Some(parse_instant(end_token, precision)?)
            };
            (start, end)
        }
    };
    if let Some(end) = end
        && end < start
    {
        return Err(DateError::BadToken(entry.to_string()));
    }
    Ok(DateRange { start, end })
}

/// Year component helper for sort keys and citations.
pub fn year_of(instant: Instant) -> i32 {
    instant.year()
}
