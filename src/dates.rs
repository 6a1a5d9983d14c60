use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// ISO 8601 week key, e.g. `2025-W27`. The year component is the ISO
/// week-year, which differs from the calendar year around January 1.
pub fn week_key(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

pub fn parse_week_key(key: &str) -> Option<(i32, u32)> {
    let (year, week) = key.split_once("-W")?;
    let year: i32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;
    if !(1..=53).contains(&week) {
        return None;
    }
    Some((year, week))
}

/// Parses the date portion of a backend value, tolerating a trailing
/// time suffix (`2025-03-09T19:00:00` or `2025-03-09 19:00:00`).
pub fn parse_date_only(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(days_from_monday)).unwrap_or(date)
}

pub fn sundays_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if current.weekday() == Weekday::Sun {
            count += 1;
        }
        let Some(next) = current.succ_opt() else { break };
        current = next;
    }
    count
}
