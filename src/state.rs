use chrono::NaiveDate;
use std::collections::HashMap;

use crate::model::{DevotionLesson, EnglishClass, ScheduleEntry, Series};
use crate::schedule::binder::{bind_events, BindFilters, BoundEvent, CalendarView};

/// In-memory planner state: cached copies of the backend collections plus
/// the active view and filters. The backend owns the data; mutations go
/// through explicit save calls with optimistic updates rolled back on
/// failure.
pub struct PlannerState {
    pub sermons: HashMap<String, ScheduleEntry>,
    pub devotions: HashMap<String, DevotionLesson>,
    pub classes: HashMap<String, EnglishClass>,
    pub series: HashMap<String, Series>,
    pub view: CalendarView,
    pub filters: BindFilters,
}

impl PlannerState {
    pub fn new() -> Self {
        Self {
            sermons: HashMap::new(),
            devotions: HashMap::new(),
            classes: HashMap::new(),
            series: HashMap::new(),
            view: CalendarView::Combined,
            filters: BindFilters::default(),
        }
    }

    pub fn add_sermon(&mut self, entry: ScheduleEntry) {
        self.sermons.insert(entry.id.clone(), entry);
    }

    pub fn remove_sermon(&mut self, id: &str) {
        self.sermons.remove(id);
    }

    pub fn replace_sermons(&mut self, entries: Vec<ScheduleEntry>) {
        self.sermons = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
    }

    pub fn replace_devotions(&mut self, lessons: Vec<DevotionLesson>) {
        self.devotions = lessons.into_iter().map(|l| (l.id.clone(), l)).collect();
    }

    pub fn replace_classes(&mut self, classes: Vec<EnglishClass>) {
        self.classes = classes.into_iter().map(|c| (c.id.clone(), c)).collect();
    }

    pub fn replace_series(&mut self, series: Vec<Series>) {
        self.series = series.into_iter().map(|s| (s.id.clone(), s)).collect();
    }

    /// Date-bucketed events for the active view and filters.
    pub fn bind(&self) -> HashMap<NaiveDate, Vec<BoundEvent>> {
        bind_events(
            self.view,
            self.sermons.values(),
            self.devotions.values(),
            self.classes.values(),
            &self.filters,
        )
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<BoundEvent> {
        self.bind().remove(&date).unwrap_or_default()
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
