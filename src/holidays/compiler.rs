use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::dates::{date_key, week_key};
use crate::holidays::easter::{easter_sunday, nth_weekday_of_month};
use crate::holidays::lunar::loy_krathong;
use crate::holidays::rules::{HolidayRule, LunarKind, RuleKind};

/// A rule resolved to a concrete date for one year. Ephemeral — rebuilt on
/// every compile, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedHoliday {
    pub rule: HolidayRule,
    pub date: NaiveDate,
    pub date_key: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct YearHolidayIndex {
    pub year: i32,
    pub by_date: HashMap<String, Vec<CalculatedHoliday>>,
    pub by_week: HashMap<String, Vec<CalculatedHoliday>>,
}

/// Resolves a rule for a year. `None` is a defined "no occurrence this
/// year" outcome, not an error.
pub fn resolve_rule(rule: &HolidayRule, year: i32) -> Option<NaiveDate> {
    match &rule.kind {
        RuleKind::Fixed { month, day } => NaiveDate::from_ymd_opt(year, *month, *day),
        RuleKind::NthWeekday { month, weekday, nth } => {
            nth_weekday_of_month(year, *month, *weekday, *nth)
        }
        RuleKind::EasterOffset { days } => {
            easter_sunday(year).checked_add_signed(Duration::days(*days))
        }
        RuleKind::Lunar { kind: LunarKind::LoyKrathong } => loy_krathong(year),
        RuleKind::OneTime { year: rule_year, date } => (*rule_year == year).then_some(*date),
    }
}

/// Expands the rule table for one year into date-key and ISO-week-key
/// indexes. Pure: identical inputs always produce an identical index.
pub fn compile_year(year: i32, rules: &[HolidayRule]) -> YearHolidayIndex {
    let mut index = YearHolidayIndex { year, ..Default::default() };

    for rule in rules {
        let Some(date) = resolve_rule(rule, year) else { continue };
        if date.year() != year {
            continue;
        }

        let holiday = CalculatedHoliday {
            rule: rule.clone(),
            date,
            date_key: date_key(date),
        };

        index
            .by_date
            .entry(holiday.date_key.clone())
            .or_default()
            .push(holiday.clone());
        index.by_week.entry(week_key(date)).or_default().push(holiday);
    }

    index
}
