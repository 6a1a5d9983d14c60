use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SermonStatus {
    #[default]
    Draft,
    #[serde(rename = "in progress")]
    InProgress,
    Complete,
    #[serde(rename = "Ready to Preach")]
    ReadyToPreach,
    #[serde(rename = "archive")]
    Archive,
}

/// Review metadata backfilled by hand or from AI suggestions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewMetadata {
    pub notes: Option<String>,
    pub rating: Option<u8>,
    pub primary_text: Option<String>,
    pub theme: Option<String>,
    pub audience: Option<String>,
    pub season: Option<String>,
    pub key_takeaway: Option<String>,
    pub hashtags: Vec<String>,
    pub information_added: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lesson_type: Option<String>,
    #[serde(default)]
    pub preacher: Option<String>,
    /// `None` means unscheduled; an unscheduled entry never appears in
    /// date-bucketed views.
    #[serde(default, rename = "sermon_date", with = "crate::model::date_only")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: SermonStatus,
    #[serde(default)]
    pub series_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub review: ReviewMetadata,
}

impl ScheduleEntry {
    pub fn is_scheduled(&self) -> bool {
        self.date.is_some()
    }

    pub fn in_series(&self, series_id: &str) -> bool {
        self.series_id.as_deref() == Some(series_id)
    }
}

/// Partial update for `PUT /schedule/{id}` — absent fields are untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sermon_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SermonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewMetadata>,
}

impl EntryPatch {
    pub fn date(date: NaiveDate) -> Self {
        Self { sermon_date: Some(date), ..Default::default() }
    }
}
