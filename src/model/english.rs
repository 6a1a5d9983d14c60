use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnglishClass {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lesson_number: u32,
    #[serde(default, with = "crate::model::date_only")]
    pub class_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ClassStatus,
    #[serde(default)]
    pub series_id: Option<String>,
}

impl EnglishClass {
    pub fn is_scheduled(&self) -> bool {
        self.class_date.is_some()
    }

    /// Cancelled classes stay in the backing store but never show on the
    /// calendar.
    pub fn is_cancelled(&self) -> bool {
        self.status == ClassStatus::Cancelled
    }
}
