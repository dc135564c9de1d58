//! Calendar helpers for open dates.
//!
//! Extractors emit open dates as free text. Anything that does not match one
//! of the accepted layouts is treated as unknown rather than rejected.

use chrono::{Datelike, Months, NaiveDate};

/// Layouts that carry a full day component.
const FULL_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m-%d-%Y"];

/// Parse an extracted open date.
///
/// Accepts `YYYY-MM-DD`, `MM-DD-YYYY`, and the month-only `MM/YYYY` and
/// `YYYY-MM` (which resolve to the first of the month). Returns `None` for
/// blank text, the `Unknown` marker, or anything unparseable.
pub fn parse_open_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = raw?.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("unknown") {
        return None;
    }

    for format in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    // chrono refuses to build a date without a day, so pin month-only input to day 1
    if let Some((month, year)) = text.split_once('/') {
        return first_of_month(year, month);
    }
    if let Some((year, month)) = text.split_once('-') {
        return first_of_month(year, month);
    }

    None
}

fn first_of_month(year: &str, month: &str) -> Option<NaiveDate> {
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Move `date` back by whole calendar months, clamping to the month end
/// (2024-02-29 minus 24 months is 2022-02-28).
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Move `date` forward by whole calendar months, clamping to the month end.
pub fn months_after(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Number of complete calendar months from `from` to `to`.
///
/// Zero when `to` is not after `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }

    let span = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    let mut months = span.max(0) as u32;
    if months_after(from, months) > to {
        months -= 1;
    }
    months
}
