// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for clock times and date ids.

use crate::error::ParseError;
use chrono::{Datelike, NaiveDate};

/// Parse a 24-hour `HH:MM` clock time into decimal hours.
///
/// `24:00` is accepted as the end-of-day marker used by the schedule grid.
pub fn parse_clock(value: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidTime(value.to_string());

    let (hour, minute) = value.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty()
        || hour.len() > 2
        || minute.len() != 2
        || !hour.bytes().all(|b| b.is_ascii_digit())
        || !minute.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
        return Err(invalid());
    }

    Ok(f64::from(hour) + f64::from(minute) / 60.0)
}

/// Parse a `MMDDYYYY` date id.
pub fn parse_date_id(id: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate(id.to_string());

    if id.len() != 8 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let month: u32 = id[0..2].parse().map_err(|_| invalid())?;
    let day: u32 = id[2..4].parse().map_err(|_| invalid())?;
    let year: i32 = id[4..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Format a date as a `MMDDYYYY` id.
pub fn format_date_id(date: NaiveDate) -> String {
    format!("{:02}{:02}{:04}", date.month(), date.day(), date.year())
}

/// Human-readable date, e.g. "November 27th, 2025".
pub fn date_display_name(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Normalize keypad input into `HH:MM` form.
///
/// Non-digits are dropped; more than four digits is rejected with `None` so
/// the caller keeps its previous value.
pub fn format_time_input(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 4 {
        return None;
    }
    if digits.len() > 2 {
        Some(format!("{}:{}", &digits[..2], &digits[2..]))
    } else {
        Some(digits)
    }
}
