use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevotionLesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub week_number: u32,
    #[serde(default)]
    pub lesson_number: u32,
    /// Backend values may arrive with a time suffix; only the date portion
    /// is kept.
    #[serde(default, with = "crate::model::date_only")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default)]
    pub prepared: bool,
    #[serde(default)]
    pub series_id: Option<String>,
}

impl DevotionLesson {
    pub fn is_scheduled(&self) -> bool {
        self.scheduled_date.is_some()
    }

    pub fn in_series(&self, series_id: &str) -> bool {
        self.series_id.as_deref() == Some(series_id)
    }
}
