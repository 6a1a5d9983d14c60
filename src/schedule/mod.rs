pub mod binder;
pub mod optimistic;
pub mod reschedule;
pub mod shift;
pub mod timeline;

pub use binder::{bind_events, BindFilters, BoundEvent, CalendarView, EventKind};
pub use optimistic::PendingWrite;
pub use reschedule::{handle_drop, DropOutcome, RescheduleError};
pub use shift::{apply_shift, plan_shift, ShiftScope};
pub use timeline::{
    lesson_progress, project_series, series_progress, LessonProgress, SeriesProgress, SeriesSpan,
    TimelineWindow,
};
