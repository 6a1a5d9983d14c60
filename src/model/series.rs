use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub title: String,
    #[serde(default, with = "crate::model::date_only")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "crate::model::date_only")]
    pub end_date: Option<NaiveDate>,
}

impl Series {
    /// A series needs both endpoints before it can be placed on a timeline.
    pub fn window(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn window_requires_both_dates() {
        let mut series = Series {
            id: "john-10".to_string(),
            title: "The Good Shepherd".to_string(),
            start_date: Some(date(2025, 3, 2)),
            end_date: None,
        };
        assert_eq!(series.window(), None);

        series.end_date = Some(date(2025, 4, 20));
        assert_eq!(series.window(), Some((date(2025, 3, 2), date(2025, 4, 20))));
    }
}
