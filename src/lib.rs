pub mod api;
pub mod dates;
pub mod grid;
pub mod holidays;
pub mod model;
pub mod schedule;
pub mod state;
pub mod storage;

pub use holidays::{CalculatedHoliday, HolidayRule, HolidayService, RuleKind};
pub use model::{DevotionLesson, EnglishClass, ScheduleEntry, Series};
pub use schedule::{CalendarView, DropOutcome, EventKind, ShiftScope};
pub use state::PlannerState;
