use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::dates::parse_week_key;
use crate::holidays::compiler::{compile_year, CalculatedHoliday, YearHolidayIndex};
use crate::holidays::rules::{builtin_rules, CustomHolidayDraft, HolidayRule};
use crate::storage::holiday_store::HolidayStore;

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingHoliday {
    pub holiday: CalculatedHoliday,
    pub days_away: i64,
    pub weeks_away: i64,
}

/// Holiday query façade. Owns the rule table (built-ins plus customs), a
/// compiled-index cache for the anchor year ± 1, and the durable store.
/// Any rule-table mutation invalidates the whole cache; years outside the
/// window are compiled on demand and not retained.
pub struct HolidayService {
    builtins: Vec<HolidayRule>,
    custom: HashMap<String, HolidayRule>,
    cache: HashMap<i32, YearHolidayIndex>,
    anchor_year: i32,
    store: HolidayStore,
}

impl HolidayService {
    pub fn new(store: HolidayStore, anchor_year: i32) -> Self {
        let custom = store.load_all().unwrap_or_else(|err| {
            tracing::warn!("Failed to load custom holidays, starting empty: {}", err);
            HashMap::new()
        });

        let mut service = Self {
            builtins: builtin_rules(),
            custom,
            cache: HashMap::new(),
            anchor_year,
            store,
        };
        service.rebuild_cache();
        service
    }

    pub fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    pub fn set_anchor_year(&mut self, year: i32) {
        if year != self.anchor_year {
            self.anchor_year = year;
            self.rebuild_cache();
        }
    }

    fn all_rules(&self) -> Vec<HolidayRule> {
        let mut rules = self.builtins.clone();
        rules.extend(self.custom.values().cloned());
        rules
    }

    fn rebuild_cache(&mut self) {
        let rules = self.all_rules();
        self.cache.clear();
        for year in (self.anchor_year - 1)..=(self.anchor_year + 1) {
            self.cache.insert(year, compile_year(year, &rules));
        }
        tracing::info!(
            "Compiled holiday cache for {}..={}",
            self.anchor_year - 1,
            self.anchor_year + 1
        );
    }

    fn index_for_year(&self, year: i32) -> YearHolidayIndex {
        match self.cache.get(&year) {
            Some(index) => index.clone(),
            None => compile_year(year, &self.all_rules()),
        }
    }

    pub fn holidays_for_date(&self, date: NaiveDate) -> Vec<CalculatedHoliday> {
        let key = crate::dates::date_key(date);
        if let Some(index) = self.cache.get(&date.year()) {
            return index.by_date.get(&key).cloned().unwrap_or_default();
        }
        compile_year(date.year(), &self.all_rules())
            .by_date
            .remove(&key)
            .unwrap_or_default()
    }

    /// Lookup by ISO week key (`YYYY-Wnn`). The first and last ISO weeks of
    /// a week-year can contain dates from the adjacent calendar year, so
    /// those lookups merge both years' indexes.
    pub fn holidays_for_week(&self, week_key: &str) -> Vec<CalculatedHoliday> {
        let Some((iso_year, week)) = parse_week_key(week_key) else {
            return Vec::new();
        };

        let mut years = vec![iso_year];
        if week == 1 {
            years.insert(0, iso_year - 1);
        } else if week >= 52 {
            years.push(iso_year + 1);
        }

        let mut holidays = Vec::new();
        for year in years {
            let index = self.index_for_year(year);
            if let Some(found) = index.by_week.get(week_key) {
                holidays.extend(found.iter().cloned());
            }
        }
        holidays
    }

    /// Holidays in `[today, today + weeks_ahead * 7]` inclusive, ascending,
    /// with day/week distances attached. Spans the year boundary.
    pub fn upcoming(&self, today: NaiveDate, weeks_ahead: u32) -> Vec<UpcomingHoliday> {
        let Some(end) = today.checked_add_signed(Duration::weeks(weeks_ahead as i64)) else {
            return Vec::new();
        };

        let mut upcoming = Vec::new();
        for year in [today.year(), today.year() + 1] {
            let index = self.index_for_year(year);
            for holiday in index.by_date.into_values().flatten() {
                if holiday.date >= today && holiday.date <= end {
                    let days_away = (holiday.date - today).num_days();
                    upcoming.push(UpcomingHoliday {
                        days_away,
                        weeks_away: days_away / 7,
                        holiday,
                    });
                }
            }
        }
        upcoming.sort_by(|a, b| {
            a.holiday
                .date
                .cmp(&b.holiday.date)
                .then_with(|| a.holiday.rule.id.cmp(&b.holiday.rule.id))
        });
        upcoming
    }

    /// Full-year expansion for the management UI, sorted by date.
    pub fn holidays_for_year(&self, year: i32) -> Vec<CalculatedHoliday> {
        let mut holidays: Vec<CalculatedHoliday> = self
            .index_for_year(year)
            .by_date
            .into_values()
            .flatten()
            .collect();
        holidays.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.rule.id.cmp(&b.rule.id)));
        holidays
    }

    pub fn custom_holidays(&self) -> Vec<&HolidayRule> {
        let mut rules: Vec<&HolidayRule> = self.custom.values().collect();
        rules.sort_by(|a, b| a.id.cmp(&b.id));
        rules
    }

    /// Adds a custom holiday and persists it best-effort: a store failure
    /// is logged and the in-memory rule stays authoritative for the session.
    pub fn add_custom_holiday(&mut self, draft: CustomHolidayDraft) -> HolidayRule {
        let rule = HolidayRule::custom(draft);
        self.custom.insert(rule.id.clone(), rule.clone());
        if let Err(err) = self.store.store_rule(&rule) {
            tracing::warn!("Failed to persist custom holiday {}: {}", rule.id, err);
        }
        self.rebuild_cache();
        rule
    }

    /// No-op when the id is unknown.
    pub fn delete_custom_holiday(&mut self, id: &str) {
        if self.custom.remove(id).is_none() {
            return;
        }
        if let Err(err) = self.store.delete_rule(id) {
            tracing::warn!("Failed to delete persisted custom holiday {}: {}", id, err);
        }
        self.rebuild_cache();
    }
}
