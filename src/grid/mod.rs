pub mod month;

pub use month::{build_month_grid, DayCell, GridWeek, MonthGrid};
