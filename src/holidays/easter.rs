use chrono::{Datelike, NaiveDate, Weekday};

/// Gregorian Easter Sunday (anonymous/Meeus-Jones-Butcher computus).
/// Exact for any year in the Gregorian calendar.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("computus yields a valid March/April date")
}

/// Date of the `nth` occurrence of `weekday` in `month` (1-12), or `None`
/// when the month has fewer than `nth` such weekdays. A `None` means "no
/// occurrence this year", not an error.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: u8) -> Option<NaiveDate> {
    if nth == 0 || nth > 5 {
        return None;
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    let day = 1 + offset + (nth as u32 - 1) * 7;
    NaiveDate::from_ymd_opt(year, month, day)
}
