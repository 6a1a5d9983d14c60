use chrono::{Datelike, Months, NaiveDate};

use crate::dates::sundays_between;
use crate::model::{DevotionLesson, ScheduleEntry, Series};

/// Visible timeline span: five months behind the viewed month through six
/// months ahead, a twelve-month window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineWindow {
    pub fn around(viewed_month: NaiveDate) -> Option<Self> {
        let month_start = NaiveDate::from_ymd_opt(viewed_month.year(), viewed_month.month(), 1)?;
        let start = month_start.checked_sub_months(Months::new(5))?;
        let end = month_start
            .checked_add_months(Months::new(7))?
            .pred_opt()?;
        Some(Self { start, end })
    }

    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Fractional horizontal position of a date, clamped to `[0, 100]`.
    pub fn position_pct(&self, date: NaiveDate) -> f64 {
        let days = (date - self.start).num_days() as f64;
        (days / self.total_days() as f64 * 100.0).clamp(0.0, 100.0)
    }

    fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpan {
    pub series_id: String,
    pub title: String,
    pub start_pct: f64,
    pub end_pct: f64,
}

/// Projects each dated series onto the window. Series without both dates,
/// or entirely outside the window, are not rendered.
pub fn project_series(series: &[Series], viewed_month: NaiveDate) -> Vec<SeriesSpan> {
    let Some(window) = TimelineWindow::around(viewed_month) else {
        return Vec::new();
    };

    series
        .iter()
        .filter_map(|s| {
            let (start, end) = s.window()?;
            if !window.overlaps(start, end) {
                return None;
            }
            Some(SeriesSpan {
                series_id: s.id.clone(),
                title: s.title.clone(),
                start_pct: window.position_pct(start),
                end_pct: window.position_pct(end),
            })
        })
        .collect()
}

/// Sermons placed in a series versus the Sundays its date range offers.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesProgress {
    pub placed: usize,
    pub sundays_available: Option<u32>,
}

pub fn series_progress<'a>(
    series: &Series,
    sermons: impl IntoIterator<Item = &'a ScheduleEntry>,
) -> SeriesProgress {
    let placed = sermons
        .into_iter()
        .filter(|s| s.in_series(&series.id))
        .count();
    let sundays_available = series.window().map(|(start, end)| sundays_between(start, end));
    SeriesProgress { placed, sundays_available }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonProgress {
    pub completed: usize,
    pub total: usize,
}

pub fn lesson_progress<'a>(
    series_id: &str,
    lessons: impl IntoIterator<Item = &'a DevotionLesson>,
) -> LessonProgress {
    let mut completed = 0;
    let mut total = 0;
    for lesson in lessons.into_iter().filter(|l| l.in_series(series_id)) {
        total += 1;
        if lesson.prepared {
            completed += 1;
        }
    }
    LessonProgress { completed, total }
}
