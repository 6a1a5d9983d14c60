pub mod devotion;
pub mod english;
pub mod series;
pub mod sermon;

pub use devotion::DevotionLesson;
pub use english::{ClassStatus, EnglishClass};
pub use series::Series;
pub use sermon::{EntryPatch, ReviewMetadata, ScheduleEntry, SermonStatus};

/// Serde helpers for optional date fields whose backend values may carry a
/// time suffix. Bucketing is date-only, so the time portion is dropped at
/// the deserialization boundary.
pub(crate) mod date_only {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::dates::parse_date_only;

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&crate::dates::date_key(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => parse_date_only(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
