use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::api::analysis::{AnalyzeRequest, AnalysisSuggestions};
use crate::model::{DevotionLesson, EnglishClass, EntryPatch, ScheduleEntry, Series};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Authentication failed")]
    AuthenticationFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateUpdate {
    pub id: String,
    #[serde(rename = "sermon_date")]
    pub new_date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct BatchUpdateRequest<'a> {
    updates: &'a [DateUpdate],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DevotionCascadeRequest<'a> {
    from_lesson_id: &'a str,
    new_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnglishCascadeRequest<'a> {
    from_class_id: &'a str,
    new_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CascadeResult {
    pub rescheduled: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanMonthRequest {
    pub series_id: String,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanMonthResult {
    pub created: u32,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlannerApi: Send + Sync {
    async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>, ApiError>;
    async fn create_entry(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, ApiError>;
    async fn update_entry(&self, id: &str, patch: &EntryPatch) -> Result<(), ApiError>;
    async fn delete_entry(&self, id: &str) -> Result<(), ApiError>;
    async fn batch_update_dates(&self, updates: &[DateUpdate]) -> Result<(), ApiError>;

    async fn fetch_series(&self) -> Result<Vec<Series>, ApiError>;
    async fn create_series(&self, series: &Series) -> Result<Series, ApiError>;
    async fn update_series(&self, id: &str, series: &Series) -> Result<(), ApiError>;

    async fn fetch_devotion_series(&self) -> Result<Vec<Series>, ApiError>;
    async fn create_devotion_series(&self, series: &Series) -> Result<Series, ApiError>;
    async fn fetch_devotion_lessons(&self) -> Result<Vec<DevotionLesson>, ApiError>;
    async fn create_devotion_lesson(
        &self,
        lesson: &DevotionLesson,
    ) -> Result<DevotionLesson, ApiError>;
    async fn update_devotion_lesson(
        &self,
        id: &str,
        lesson: &DevotionLesson,
    ) -> Result<(), ApiError>;
    async fn plan_devotion_month(
        &self,
        request: &PlanMonthRequest,
    ) -> Result<PlanMonthResult, ApiError>;
    async fn cascade_reschedule_devotions(
        &self,
        from_lesson_id: &str,
        new_date: NaiveDate,
    ) -> Result<CascadeResult, ApiError>;

    async fn fetch_english_classes(&self) -> Result<Vec<EnglishClass>, ApiError>;
    async fn create_english_class(&self, class: &EnglishClass) -> Result<EnglishClass, ApiError>;
    async fn update_english_class(&self, id: &str, class: &EnglishClass) -> Result<(), ApiError>;
    async fn plan_english_month(
        &self,
        request: &PlanMonthRequest,
    ) -> Result<PlanMonthResult, ApiError>;
    async fn cascade_reschedule_english(
        &self,
        from_class_id: &str,
        new_date: NaiveDate,
    ) -> Result<CascadeResult, ApiError>;

    async fn analyze_sermon(&self, request: &AnalyzeRequest)
        -> Result<AnalysisSuggestions, ApiError>;
}

pub struct HttpPlannerClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPlannerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(
        response: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();

        if status == 401 {
            tracing::error!("Authentication failed: {}", context);
            return Err(ApiError::AuthenticationFailed);
        }

        if status == 404 {
            tracing::error!("Not found: {}", context);
            return Err(ApiError::NotFound(context.to_string()));
        }

        if status == 429 {
            tracing::warn!("Rate limit exceeded: {}", context);
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("{} failed. Status: {}, Body: {}", context, status, body);
            return Err(ApiError::RequestError(format!("Status {}: {}", status, body)));
        }

        Ok(response)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = Self::check_status(response, context).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlannerApi for HttpPlannerClient {
    async fn fetch_schedule(&self) -> Result<Vec<ScheduleEntry>, ApiError> {
        let entries: Vec<ScheduleEntry> = self.get_json("/schedule", "fetch schedule").await?;
        tracing::info!("Fetched {} schedule entries", entries.len());
        Ok(entries)
    }

    async fn create_entry(&self, entry: &ScheduleEntry) -> Result<ScheduleEntry, ApiError> {
        tracing::info!("Creating schedule entry: {}", entry.name);
        let response = self
            .client
            .post(self.url("/schedule"))
            .json(entry)
            .send()
            .await?;
        let response = Self::check_status(response, "create entry").await?;
        Ok(response.json().await?)
    }

    async fn update_entry(&self, id: &str, patch: &EntryPatch) -> Result<(), ApiError> {
        tracing::info!("Updating schedule entry {}", id);
        let response = self
            .client
            .put(self.url(&format!("/schedule/{}", id)))
            .json(patch)
            .send()
            .await?;
        Self::check_status(response, "update entry").await?;
        Ok(())
    }

    async fn delete_entry(&self, id: &str) -> Result<(), ApiError> {
        tracing::info!("Deleting schedule entry {}", id);
        let response = self
            .client
            .delete(self.url(&format!("/schedule/{}", id)))
            .send()
            .await?;
        Self::check_status(response, "delete entry").await?;
        Ok(())
    }

    async fn batch_update_dates(&self, updates: &[DateUpdate]) -> Result<(), ApiError> {
        tracing::info!("Batch updating {} entry dates", updates.len());
        let response = self
            .client
            .post(self.url("/schedule/batch-update"))
            .json(&BatchUpdateRequest { updates })
            .send()
            .await?;
        Self::check_status(response, "batch update").await?;
        Ok(())
    }

    async fn fetch_series(&self) -> Result<Vec<Series>, ApiError> {
        self.get_json("/series", "fetch series").await
    }

    async fn create_series(&self, series: &Series) -> Result<Series, ApiError> {
        let response = self
            .client
            .post(self.url("/series"))
            .json(series)
            .send()
            .await?;
        let response = Self::check_status(response, "create series").await?;
        Ok(response.json().await?)
    }

    async fn update_series(&self, id: &str, series: &Series) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/series/{}", id)))
            .json(series)
            .send()
            .await?;
        Self::check_status(response, "update series").await?;
        Ok(())
    }

    async fn fetch_devotion_series(&self) -> Result<Vec<Series>, ApiError> {
        self.get_json("/devotions/series", "fetch devotion series").await
    }

    async fn create_devotion_series(&self, series: &Series) -> Result<Series, ApiError> {
        let response = self
            .client
            .post(self.url("/devotions/series"))
            .json(series)
            .send()
            .await?;
        let response = Self::check_status(response, "create devotion series").await?;
        Ok(response.json().await?)
    }

    async fn fetch_devotion_lessons(&self) -> Result<Vec<DevotionLesson>, ApiError> {
        let lessons: Vec<DevotionLesson> =
            self.get_json("/devotions/lessons", "fetch devotion lessons").await?;
        tracing::info!("Fetched {} devotion lessons", lessons.len());
        Ok(lessons)
    }

    async fn create_devotion_lesson(
        &self,
        lesson: &DevotionLesson,
    ) -> Result<DevotionLesson, ApiError> {
        let response = self
            .client
            .post(self.url("/devotions/lessons"))
            .json(lesson)
            .send()
            .await?;
        let response = Self::check_status(response, "create devotion lesson").await?;
        Ok(response.json().await?)
    }

    async fn update_devotion_lesson(
        &self,
        id: &str,
        lesson: &DevotionLesson,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/devotions/lessons/{}", id)))
            .json(lesson)
            .send()
            .await?;
        Self::check_status(response, "update devotion lesson").await?;
        Ok(())
    }

    async fn plan_devotion_month(
        &self,
        request: &PlanMonthRequest,
    ) -> Result<PlanMonthResult, ApiError> {
        let response = self
            .client
            .post(self.url("/devotions/plan-month"))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response, "plan devotion month").await?;
        Ok(response.json().await?)
    }

    async fn cascade_reschedule_devotions(
        &self,
        from_lesson_id: &str,
        new_date: NaiveDate,
    ) -> Result<CascadeResult, ApiError> {
        tracing::info!(
            "Cascade rescheduling devotions from {} to {}",
            from_lesson_id,
            new_date
        );
        let response = self
            .client
            .post(self.url("/devotions/cascade-reschedule"))
            .json(&DevotionCascadeRequest { from_lesson_id, new_date })
            .send()
            .await?;
        let response = Self::check_status(response, "cascade reschedule devotions").await?;
        let result: CascadeResult = response.json().await?;
        tracing::info!("Server rescheduled {} devotion lessons", result.rescheduled);
        Ok(result)
    }

    async fn fetch_english_classes(&self) -> Result<Vec<EnglishClass>, ApiError> {
        let classes: Vec<EnglishClass> =
            self.get_json("/english/classes", "fetch english classes").await?;
        tracing::info!("Fetched {} english classes", classes.len());
        Ok(classes)
    }

    async fn create_english_class(&self, class: &EnglishClass) -> Result<EnglishClass, ApiError> {
        let response = self
            .client
            .post(self.url("/english/classes"))
            .json(class)
            .send()
            .await?;
        let response = Self::check_status(response, "create english class").await?;
        Ok(response.json().await?)
    }

    async fn update_english_class(&self, id: &str, class: &EnglishClass) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/english/classes/{}", id)))
            .json(class)
            .send()
            .await?;
        Self::check_status(response, "update english class").await?;
        Ok(())
    }

    async fn plan_english_month(
        &self,
        request: &PlanMonthRequest,
    ) -> Result<PlanMonthResult, ApiError> {
        let response = self
            .client
            .post(self.url("/english/plan-month"))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response, "plan english month").await?;
        Ok(response.json().await?)
    }

    async fn cascade_reschedule_english(
        &self,
        from_class_id: &str,
        new_date: NaiveDate,
    ) -> Result<CascadeResult, ApiError> {
        tracing::info!(
            "Cascade rescheduling english classes from {} to {}",
            from_class_id,
            new_date
        );
        let response = self
            .client
            .post(self.url("/english/cascade-reschedule"))
            .json(&EnglishCascadeRequest { from_class_id, new_date })
            .send()
            .await?;
        let response = Self::check_status(response, "cascade reschedule english").await?;
        let result: CascadeResult = response.json().await?;
        tracing::info!("Server rescheduled {} english classes", result.rescheduled);
        Ok(result)
    }

    async fn analyze_sermon(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalysisSuggestions, ApiError> {
        tracing::info!("Requesting analysis for: {}", request.title);
        let response = self
            .client
            .post(self.url("/analyze-sermon"))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response, "analyze sermon").await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::analysis::AnalyzeOptions;
    use crate::model::SermonStatus;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    async fn client_for(server: &MockServer) -> HttpPlannerClient {
        HttpPlannerClient::new(server.uri())
    }

    #[test]
    fn client_can_override_base_url() {
        let client = HttpPlannerClient::new("http://localhost:3001/api".to_string())
            .with_base_url("http://localhost:8080".to_string());
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn fetch_schedule_parses_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "s1",
                    "name": "The Good Shepherd",
                    "preacher": "Daniel",
                    "sermon_date": "2025-03-09T00:00:00",
                    "status": "Draft"
                }
            ])))
            .mount(&server)
            .await;

        let entries = client_for(&server).await.fetch_schedule().await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, Some(date(2025, 3, 9)));
        assert_eq!(entries[0].status, SermonStatus::Draft);
    }

    #[tokio::test]
    async fn batch_update_sends_expected_body() {
        let server = MockServer::start().await;
        let updates = vec![
            DateUpdate { id: "s1".to_string(), new_date: date(2025, 3, 16) },
            DateUpdate { id: "s2".to_string(), new_date: date(2025, 3, 23) },
        ];
        Mock::given(method("POST"))
            .and(path("/schedule/batch-update"))
            .and(body_json(serde_json::json!({
                "updates": [
                    { "id": "s1", "sermon_date": "2025-03-16" },
                    { "id": "s2", "sermon_date": "2025-03-23" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .batch_update_dates(&updates)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn cascade_reschedule_parses_count() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/devotions/cascade-reschedule"))
            .and(body_json(serde_json::json!({
                "fromLessonId": "d1",
                "newDate": "2025-04-02"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "rescheduled": 5 })),
            )
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .cascade_reschedule_devotions("d1", date(2025, 4, 2))
            .await
            .unwrap();

        assert_eq!(result.rescheduled, 5);
    }

    #[tokio::test]
    async fn update_entry_puts_partial_patch() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/schedule/s1"))
            .and(body_json(serde_json::json!({ "sermon_date": "2025-03-16" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .update_entry("s1", &EntryPatch::date(date(2025, 3, 16)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn analyze_sermon_returns_suggestions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze-sermon"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "theme": "Grace",
                "hashtags": ["#grace", "#john10"]
            })))
            .mount(&server)
            .await;

        let request = AnalyzeRequest {
            title: "The Good Shepherd".to_string(),
            content: "I am the good shepherd...".to_string(),
            options: AnalyzeOptions::default(),
        };
        let suggestions = client_for(&server)
            .await
            .analyze_sermon(&request)
            .await
            .unwrap();

        assert_eq!(suggestions.theme.as_deref(), Some("Grace"));
        assert_eq!(suggestions.hashtags, vec!["#grace", "#john10"]);
    }

    #[tokio::test]
    async fn not_found_maps_to_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/schedule/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .await
            .update_entry("missing", &EntryPatch::date(date(2025, 3, 16)))
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client_for(&server).await.fetch_schedule().await;

        assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = client_for(&server).await.fetch_schedule().await;

        match result {
            Err(ApiError::RequestError(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("expected RequestError, got {:?}", other.map(|v| v.len())),
        }
    }
}
