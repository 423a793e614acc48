//! Ordering and validation of time-ranged CV records
//!
//! Experience and education entries carry a start and end month/year as
//! free text from the form, plus an "ongoing" flag. Listings show them most
//! recent first. Month values outside 1-12 are tolerated and fall back to a
//! year-only key instead of being rejected.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A time span as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    #[serde(default)]
    pub start_month: Option<String>,
    #[serde(default)]
    pub start_year: Option<String>,
    #[serde(default)]
    pub end_month: Option<String>,
    #[serde(default)]
    pub end_year: Option<String>,
    #[serde(default)]
    pub is_current: bool,
}

impl TimeSpan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, month: Option<&str>, year: Option<&str>) -> Self {
        self.start_month = month.map(str::to_string);
        self.start_year = year.map(str::to_string);
        self
    }

    pub fn with_end(mut self, month: Option<&str>, year: Option<&str>) -> Self {
        self.end_month = month.map(str::to_string);
        self.end_year = year.map(str::to_string);
        self
    }

    pub fn with_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    /// Comparable start key, see [`to_key`]
    pub fn start_key(&self) -> Option<i64> {
        to_key(self.start_month.as_deref(), self.start_year.as_deref())
    }

    /// Comparable end key; ongoing spans end at [`EndKey::Open`]
    pub fn end_key(&self) -> EndKey {
        if self.is_current {
            return EndKey::Open;
        }
        match to_key(self.end_month.as_deref(), self.end_year.as_deref()) {
            Some(key) => EndKey::At(key),
            None => EndKey::Missing,
        }
    }

    /// Whether the span carries any usable date at all
    pub fn has_time_info(&self) -> bool {
        self.start_key().is_some() || self.end_key() != EndKey::Missing
    }

    /// Form hint for this span, see [`period_warning`]
    pub fn warning(&self) -> Option<PeriodWarning> {
        period_warning(
            self.start_month.as_deref(),
            self.start_year.as_deref(),
            self.end_month.as_deref(),
            self.end_year.as_deref(),
            self.is_current,
        )
    }
}

/// End of a span for ordering purposes.
///
/// Variant order is the comparison order: a missing end sorts below every
/// concrete end, an ongoing span above all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EndKey {
    Missing,
    At(i64),
    Open,
}

fn parse_number(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Collapse a month/year pair into `year * 12 + month`.
///
/// `None` when the year is absent, not a number, or too large for a key. A
/// month that is absent, unparseable or outside 1-12 counts as 0.
pub fn to_key(month: Option<&str>, year: Option<&str>) -> Option<i64> {
    let year = parse_number(year?)?;
    let month = month
        .and_then(parse_number)
        .filter(|m| (1..=12).contains(m))
        .unwrap_or(0);
    year.checked_mul(12)?.checked_add(month)
}

/// Order two spans most recent first.
///
/// Spans without any date sort last and are equal among themselves. Otherwise
/// the later end wins (ongoing beats any date, a missing end loses to any
/// date), then the later start. Suitable for `sort_by`.
pub fn compare_by_period(a: &TimeSpan, b: &TimeSpan) -> Ordering {
    match (a.has_time_info(), b.has_time_info()) {
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        (true, true) => {}
    }
    b.end_key()
        .cmp(&a.end_key())
        .then_with(|| b.start_key().cmp(&a.start_key()))
}

/// Stable sort, most recent first
pub fn sort_by_period(spans: &mut [TimeSpan]) {
    spans.sort_by(compare_by_period);
}

/// A problem with the dates entered for a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodWarning {
    EndBeforeStart,
    StartMissing,
}

impl fmt::Display for PeriodWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodWarning::EndBeforeStart => write!(f, "End date is before start date"),
            PeriodWarning::StartMissing => write!(f, "Start date is missing"),
        }
    }
}

/// Check the dates of a span as the user types them.
///
/// Ongoing spans never warn.
pub fn period_warning(
    start_month: Option<&str>,
    start_year: Option<&str>,
    end_month: Option<&str>,
    end_year: Option<&str>,
    is_current: bool,
) -> Option<PeriodWarning> {
    if is_current {
        return None;
    }
    let start = to_key(start_month, start_year);
    let end = to_key(end_month, end_year)?;
    match start {
        Some(start) if end < start => Some(PeriodWarning::EndBeforeStart),
        Some(_) => None,
        None => Some(PeriodWarning::StartMissing),
    }
}
