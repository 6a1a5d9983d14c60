pub mod config;
pub mod holiday_store;

pub use config::{Config, ConfigError};
pub use holiday_store::{HolidayStore, StoreError};
