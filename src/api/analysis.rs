use serde::{Deserialize, Serialize};

use crate::model::{ReviewMetadata, ScheduleEntry};

/// Option lists handed to the analyzer so its suggestions stay inside the
/// vocabulary the team already uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    pub series: Vec<String>,
    pub themes: Vec<String>,
    pub audiences: Vec<String>,
    pub seasons: Vec<String>,
    pub lesson_types: Vec<String>,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub title: String,
    pub content: String,
    pub options: AnalyzeOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSuggestions {
    pub theme: Option<String>,
    pub audience: Option<String>,
    pub season: Option<String>,
    pub lesson_type: Option<String>,
    pub primary_text: Option<String>,
    pub key_takeaway: Option<String>,
    pub hashtags: Vec<String>,
}

/// Merges suggestions into review metadata. Existing values always win;
/// suggested hashtags are appended after the existing ones, deduplicated.
pub fn merge_suggestions(review: &ReviewMetadata, suggestions: &AnalysisSuggestions) -> ReviewMetadata {
    let mut hashtags = review.hashtags.clone();
    for tag in &suggestions.hashtags {
        if !hashtags.contains(tag) {
            hashtags.push(tag.clone());
        }
    }

    ReviewMetadata {
        notes: review.notes.clone(),
        rating: review.rating,
        primary_text: review.primary_text.clone().or_else(|| suggestions.primary_text.clone()),
        theme: review.theme.clone().or_else(|| suggestions.theme.clone()),
        audience: review.audience.clone().or_else(|| suggestions.audience.clone()),
        season: review.season.clone().or_else(|| suggestions.season.clone()),
        key_takeaway: review
            .key_takeaway
            .clone()
            .or_else(|| suggestions.key_takeaway.clone()),
        hashtags,
        information_added: review.information_added,
    }
}

/// Applies suggestions to a whole entry: the lesson type fills in only when
/// the entry has none, and the review fields merge existing-first.
pub fn apply_suggestions(entry: &mut ScheduleEntry, suggestions: &AnalysisSuggestions) {
    if entry.lesson_type.is_none() {
        entry.lesson_type = suggestions.lesson_type.clone();
    }
    entry.review = merge_suggestions(&entry.review, suggestions);
}
