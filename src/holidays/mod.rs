pub mod compiler;
pub mod easter;
pub mod lunar;
pub mod rules;
pub mod service;

pub use compiler::{compile_year, CalculatedHoliday, YearHolidayIndex};
pub use rules::{builtin_rules, CustomHolidayDraft, HolidayColor, HolidayRule, LunarKind, RuleKind};
pub use service::{HolidayService, UpcomingHoliday};
