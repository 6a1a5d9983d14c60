use chrono::NaiveDate;
use std::collections::HashMap;

use crate::model::{DevotionLesson, EnglishClass, ScheduleEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Sermons,
    Devotions,
    English,
    Combined,
}

/// Source tag so the renderer and the drop coordinator can branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Sermon,
    Devotion,
    English,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundEvent {
    pub kind: EventKind,
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindFilters {
    pub preacher: Option<String>,
    pub lesson_type: Option<String>,
}

impl CalendarView {
    fn includes(self, kind: EventKind) -> bool {
        match self {
            CalendarView::Combined => true,
            CalendarView::Sermons => kind == EventKind::Sermon,
            CalendarView::Devotions => kind == EventKind::Devotion,
            CalendarView::English => kind == EventKind::English,
        }
    }
}

fn matches_filter(value: Option<&str>, filter: &Option<String>) -> bool {
    match filter {
        Some(wanted) => value == Some(wanted.as_str()),
        None => true,
    }
}

/// Buckets every displayable event under its date. Entries without a date
/// never appear; cancelled English classes are excluded; per-date order is
/// sermons, then devotions, then English.
pub fn bind_events<'a>(
    view: CalendarView,
    sermons: impl IntoIterator<Item = &'a ScheduleEntry>,
    devotions: impl IntoIterator<Item = &'a DevotionLesson>,
    classes: impl IntoIterator<Item = &'a EnglishClass>,
    filters: &BindFilters,
) -> HashMap<NaiveDate, Vec<BoundEvent>> {
    let mut bound: HashMap<NaiveDate, Vec<BoundEvent>> = HashMap::new();

    if view.includes(EventKind::Sermon) {
        for sermon in sermons {
            let Some(date) = sermon.date else { continue };
            if !matches_filter(sermon.preacher.as_deref(), &filters.preacher) {
                continue;
            }
            if !matches_filter(sermon.lesson_type.as_deref(), &filters.lesson_type) {
                continue;
            }
            bound.entry(date).or_default().push(BoundEvent {
                kind: EventKind::Sermon,
                id: sermon.id.clone(),
                title: sermon.name.clone(),
                date,
            });
        }
    }

    if view.includes(EventKind::Devotion) {
        for lesson in devotions {
            let Some(date) = lesson.scheduled_date else { continue };
            bound.entry(date).or_default().push(BoundEvent {
                kind: EventKind::Devotion,
                id: lesson.id.clone(),
                title: lesson.title.clone(),
                date,
            });
        }
    }

    if view.includes(EventKind::English) {
        for class in classes {
            let Some(date) = class.class_date else { continue };
            if class.is_cancelled() {
                continue;
            }
            bound.entry(date).or_default().push(BoundEvent {
                kind: EventKind::English,
                id: class.id.clone(),
                title: class.title.clone(),
                date,
            });
        }
    }

    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassStatus, ReviewMetadata, SermonStatus};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_sermon(id: &str, sermon_date: Option<NaiveDate>, preacher: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: id.to_string(),
            name: format!("Sermon {}", id),
            lesson_type: Some("Sermon".to_string()),
            preacher: Some(preacher.to_string()),
            date: sermon_date,
            status: SermonStatus::Draft,
            series_id: None,
            content: None,
            review: ReviewMetadata::default(),
        }
    }

    fn create_lesson(id: &str, scheduled: Option<NaiveDate>) -> DevotionLesson {
        DevotionLesson {
            id: id.to_string(),
            title: format!("Lesson {}", id),
            week_number: 1,
            lesson_number: 1,
            scheduled_date: scheduled,
            prepared: false,
            series_id: None,
        }
    }

    fn create_class(id: &str, class_date: Option<NaiveDate>, status: ClassStatus) -> EnglishClass {
        EnglishClass {
            id: id.to_string(),
            title: format!("Class {}", id),
            lesson_number: 1,
            class_date,
            status,
            series_id: None,
        }
    }

    #[test]
    fn dateless_entries_never_appear() {
        let sermons = [create_sermon("s1", None, "Daniel")];
        let devotions = [create_lesson("d1", None)];
        let classes = [create_class("e1", None, ClassStatus::Scheduled)];

        let bound = bind_events(
            CalendarView::Combined,
            &sermons,
            &devotions,
            &classes,
            &BindFilters::default(),
        );

        assert!(bound.is_empty());
    }

    #[test]
    fn combined_view_orders_sources_per_date() {
        let day = date(2025, 3, 9);
        let sermons = [create_sermon("s1", Some(day), "Daniel")];
        let devotions = [create_lesson("d1", Some(day))];
        let classes = [create_class("e1", Some(day), ClassStatus::Scheduled)];

        let bound = bind_events(
            CalendarView::Combined,
            &sermons,
            &devotions,
            &classes,
            &BindFilters::default(),
        );

        let kinds: Vec<EventKind> = bound[&day].iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Sermon, EventKind::Devotion, EventKind::English]);
    }

    #[test]
    fn single_source_views_exclude_other_kinds() {
        let day = date(2025, 3, 9);
        let sermons = [create_sermon("s1", Some(day), "Daniel")];
        let devotions = [create_lesson("d1", Some(day))];
        let classes = [create_class("e1", Some(day), ClassStatus::Scheduled)];

        let bound = bind_events(
            CalendarView::Devotions,
            &sermons,
            &devotions,
            &classes,
            &BindFilters::default(),
        );

        assert_eq!(bound[&day].len(), 1);
        assert_eq!(bound[&day][0].kind, EventKind::Devotion);
    }

    #[test]
    fn preacher_filter_excludes_non_matching_sermons() {
        let day = date(2025, 3, 9);
        let sermons = [
            create_sermon("s1", Some(day), "Daniel"),
            create_sermon("s2", Some(day), "Mark"),
        ];
        let filters = BindFilters {
            preacher: Some("Daniel".to_string()),
            lesson_type: None,
        };

        let bound = bind_events(CalendarView::Sermons, &sermons, [], [], &filters);

        assert_eq!(bound[&day].len(), 1);
        assert_eq!(bound[&day][0].id, "s1");
    }

    #[test]
    fn preacher_filter_excludes_sermons_without_preacher() {
        let day = date(2025, 3, 9);
        let mut sermon = create_sermon("s1", Some(day), "Daniel");
        sermon.preacher = None;
        let filters = BindFilters {
            preacher: Some("Daniel".to_string()),
            lesson_type: None,
        };

        let bound = bind_events(CalendarView::Sermons, &[sermon], [], [], &filters);

        assert!(bound.is_empty());
    }

    #[test]
    fn lesson_type_filter_excludes_non_matching_sermons() {
        let day = date(2025, 3, 9);
        let mut study = create_sermon("s1", Some(day), "Daniel");
        study.lesson_type = Some("Bible Study".to_string());
        let sermon = create_sermon("s2", Some(day), "Daniel");
        let filters = BindFilters {
            preacher: None,
            lesson_type: Some("Sermon".to_string()),
        };

        let bound = bind_events(CalendarView::Sermons, &[study, sermon], [], [], &filters);

        assert_eq!(bound[&day].len(), 1);
        assert_eq!(bound[&day][0].id, "s2");
    }

    #[test]
    fn cancelled_classes_are_excluded() {
        let day = date(2025, 3, 9);
        let classes = [
            create_class("e1", Some(day), ClassStatus::Cancelled),
            create_class("e2", Some(day), ClassStatus::Scheduled),
        ];

        let bound = bind_events(CalendarView::English, [], [], &classes, &BindFilters::default());

        assert_eq!(bound[&day].len(), 1);
        assert_eq!(bound[&day][0].id, "e2");
    }
}
