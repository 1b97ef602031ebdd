//! `DD-MM-YYYY` date parsing.
//!
//! Day and month values outside the calendar roll over the same way a
//! normalizing calendar would: `32-05-1967` is the 1st of June 1967 and
//! `00-01-2000` is the last day of 1999.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("invalid format `{0}`: expected format: DD-MM-YYYY")]
    Format(String),

    #[error("invalid number `{part}` in `{input}`")]
    Number { input: String, part: String },

    #[error("date `{0}` is out of range")]
    OutOfRange(String),
}

/// Parse a `DD-MM-YYYY` date.
pub fn parse(s: &str) -> Result<NaiveDate, DateParseError> {
    let input = s.trim();
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(DateParseError::Format(input.to_string()));
    }

    let number = |part: &str| {
        part.parse::<i64>().map_err(|_| DateParseError::Number {
            input: input.to_string(),
            part: part.to_string(),
        })
    };

    let day = number(parts[0])?;
    let month = number(parts[1])?;
    let year = number(parts[2])?;

    normalize(year, month, day).ok_or_else(|| DateParseError::OutOfRange(input.to_string()))
}

fn normalize(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)
}
