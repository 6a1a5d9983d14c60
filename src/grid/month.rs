use chrono::{Datelike, NaiveDate, Weekday};

use crate::dates::week_key;
use crate::holidays::{CalculatedHoliday, HolidayService};

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<GridWeek>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridWeek {
    pub iso_week: u32,
    pub week_key: String,
    pub days: Vec<DayCell>,
}

/// One grid cell. Cells before the 1st and after the last day of the month
/// are placeholders (`date: None`) — never adjacent-month dates.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub holidays: Vec<CalculatedHoliday>,
}

impl DayCell {
    fn placeholder() -> Self {
        Self { date: None, is_today: false, holidays: Vec::new() }
    }

    /// First holiday for compact badge display.
    pub fn primary_holiday(&self) -> Option<&CalculatedHoliday> {
        self.holidays.first()
    }

    /// How many holidays the badge count hides beyond the primary.
    pub fn extra_holiday_count(&self) -> usize {
        self.holidays.len().saturating_sub(1)
    }
}

/// Builds the Monday-first week rows for a month. Each row's ISO week
/// number comes from its first real day; `num_days_from_monday` is the
/// only place the rules' Sunday-first weekday numbering meets the
/// display ordering.
pub fn build_month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    holidays: &HolidayService,
) -> MonthGrid {
    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthGrid { year, month, weeks: Vec::new() };
    };

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    let Some(last_day) = next_month_first.and_then(|d| d.pred_opt()) else {
        return MonthGrid { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut current_days: Vec<DayCell> = Vec::new();

    let leading = first_day.weekday().num_days_from_monday();
    for _ in 0..leading {
        current_days.push(DayCell::placeholder());
    }

    let mut current_date = first_day;
    while current_date <= last_day {
        current_days.push(DayCell {
            date: Some(current_date),
            is_today: current_date == today,
            holidays: holidays.holidays_for_date(current_date),
        });

        if current_date.weekday() == Weekday::Sun {
            push_week(&mut weeks, std::mem::take(&mut current_days));
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    if !current_days.is_empty() {
        while current_days.len() < 7 {
            current_days.push(DayCell::placeholder());
        }
        push_week(&mut weeks, current_days);
    }

    MonthGrid { year, month, weeks }
}

fn push_week(weeks: &mut Vec<GridWeek>, days: Vec<DayCell>) {
    // every row contains at least one real day by construction
    let Some(first_real) = days.iter().find_map(|c| c.date) else {
        return;
    };
    weeks.push(GridWeek {
        iso_week: first_real.iso_week().week(),
        week_key: week_key(first_real),
        days,
    });
}
