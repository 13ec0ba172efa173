//! Date arithmetic: differences between dates and ages.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::tools::{ToolError, ToolResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ToolError::InvalidDate)
}

/// Calendar distance between two ordered dates.
#[derive(Debug, PartialEq, Eq)]
pub struct Span {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Splits the distance from `from` to `to` (`from <= to`) into whole months
/// and remaining days. Month steps clamp to the end of shorter months, so
/// Jan 31 plus one month is the last day of February.
pub fn span(from: NaiveDate, to: NaiveDate) -> Span {
    let mut total_months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut anchor = add_months(from, total_months);
    while total_months > 0 && anchor.is_none_or(|date| date > to) {
        total_months -= 1;
        anchor = add_months(from, total_months);
    }
    let days = anchor.map(|date| (to - date).num_days()).unwrap_or_default();

    Span {
        years: total_months / 12,
        months: total_months % 12,
        days: days as i32,
    }
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let months = u32::try_from(months).ok()?;
    date.checked_add_months(Months::new(months))
}

pub fn difference(start: &str, end: &str) -> ToolResult {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    let total_days = (end - start).num_days();
    let (from, to) = if start <= end { (start, end) } else { (end, start) };
    let span = span(from, to);
    let abs_days = total_days.abs();

    Ok(format!(
        "{total_days} days\n{} weeks, {} days\n{} years, {} months, {} days",
        abs_days / 7,
        abs_days % 7,
        span.years,
        span.months,
        span.days
    ))
}

pub fn age(birth_date: &str, on: Option<&str>) -> ToolResult {
    let birth = parse_date(birth_date)?;
    let on = match on.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };
    if birth > on {
        return Err(ToolError::InvalidDate);
    }

    let span = span(birth, on);
    Ok(format!(
        "{} years, {} months, {} days",
        span.years, span.months, span.days
    ))
}
