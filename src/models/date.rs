//! Birth date normalization
//!
//! Browsers and locales submit dates in different textual shapes: Chrome
//! sends ISO dates, Safari users tend to type US dates, and some regions
//! use the European day-first order. [`normalize`] tries each supported
//! format in a fixed order and keeps the first one that yields a real
//! calendar date.
//!
//! Slash dates whose first two groups are both `<= 12` always resolve as US
//! dates, so `05/04/1990` is May 4th. Existing clients depend on this order.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::error::{ValidationError, ValidationErrorKind, ValidationResult};

static ISO_REGEX: OnceLock<Regex> = OnceLock::new();
static SLASH_REGEX: OnceLock<Regex> = OnceLock::new();

fn iso_regex() -> &'static Regex {
    ISO_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("Invalid ISO date regex pattern")
    })
}

/// Shared by the US and European formats; only the group meaning differs.
fn slash_regex() -> &'static Regex {
    SLASH_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("Invalid slash date regex pattern")
    })
}

/// A validated Gregorian calendar date without a time component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts, returning `None` for impossible dates
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
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

    /// Render as `YYYY-MM-DD`
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

/// Textual date formats accepted from clients, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `MM/DD/YYYY`
    Us,
    /// `DD/MM/YYYY`
    European,
}

impl DateFormat {
    /// Every supported format, in resolution order
    pub const ALL: [DateFormat; 3] = [DateFormat::Iso, DateFormat::Us, DateFormat::European];

    /// Human-readable pattern label
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::Us => "MM/DD/YYYY",
            DateFormat::European => "DD/MM/YYYY",
        }
    }

    /// Labels of all formats joined for error messages
    pub fn supported_labels() -> String {
        Self::ALL
            .iter()
            .map(DateFormat::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse the whole input with this format
    ///
    /// Returns `None` when the text does not have this shape or names a date
    /// that does not exist.
    pub fn parse(&self, input: &str) -> Option<CalendarDate> {
        let (year, month, day) = match self {
            DateFormat::Iso => {
                let caps = iso_regex().captures(input)?;
                (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
            },
            DateFormat::Us => {
                let caps = slash_regex().captures(input)?;
                (caps[3].parse().ok()?, caps[1].parse().ok()?, caps[2].parse().ok()?)
            },
            DateFormat::European => {
                let caps = slash_regex().captures(input)?;
                (caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?)
            },
        };

        CalendarDate::from_ymd(year, month, day)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalize a raw birth date into a calendar date
///
/// `None` stands for an absent or non-string value. Empty input fails with
/// [`ValidationErrorKind::EmptyInput`]; anything else that no format accepts
/// fails with [`ValidationErrorKind::InvalidFormat`] carrying the raw text.
pub fn normalize(raw: Option<&str>) -> ValidationResult<CalendarDate> {
    normalize_with_format(raw).map(|(date, _)| date)
}

/// Like [`normalize`], also reporting which format matched
pub fn normalize_with_format(raw: Option<&str>) -> ValidationResult<(CalendarDate, DateFormat)> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(ValidationError::new(
                ValidationErrorKind::EmptyInput,
                "birth_date",
            ))
        },
    };

    let trimmed = raw.trim();
    for format in DateFormat::ALL {
        if let Some(date) = format.parse(trimmed) {
            tracing::debug!(input = %raw, format = %format, date = %date, "Birth date normalized");
            return Ok((date, format));
        }
    }

    Err(ValidationError::with_context(
        ValidationErrorKind::InvalidFormat {
            raw: raw.to_string(),
        },
        "birth_date",
        "No supported date format matched",
    ))
}
