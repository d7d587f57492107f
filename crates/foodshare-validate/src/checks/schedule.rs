//! Start and end date-time inputs.

use chrono::NaiveDateTime;
use foodshare_model::{DATE_TIME_FORMAT, FieldName};

use super::CheckResult;
use crate::issue::Issue;
use crate::patterns::DATE_TIME_REGEX;

/// Parse a `YYYY-MM-DD HH:mm` value; `None` unless both the shape and the
/// calendar date-time are valid.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    if !DATE_TIME_REGEX.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT).ok()
}

pub fn check_start_date(start: &str) -> CheckResult {
    if start.is_empty() {
        return Err(Issue::StartDateMissing);
    }
    if parse_date_time(start).is_none() {
        return Err(Issue::DateFormat {
            field: FieldName::StartDate,
            value: start.to_string(),
        });
    }
    Ok(())
}

/// Check an end date, re-checking the start date first.
pub fn check_end_date(end: &str, start: &str) -> CheckResult {
    end_date_given_start(end, start, check_start_date(start).is_ok())
}

/// Check an end date against an already computed start-date verdict.
pub fn end_date_given_start(end: &str, start: &str, start_valid: bool) -> CheckResult {
    if end.is_empty() {
        return Err(Issue::EndDateMissing);
    }
    let Some(end_at) = parse_date_time(end) else {
        return Err(Issue::DateFormat {
            field: FieldName::EndDate,
            value: end.to_string(),
        });
    };
    let start_at = match parse_date_time(start) {
        Some(start_at) if start_valid => start_at,
        _ => return Err(Issue::StartDateRejected),
    };
    if start_at >= end_at {
        return Err(Issue::DatesNotOrdered);
    }
    Ok(())
}
