//! HTTP store talking to the assessments endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};

use skillsync_core::error::ApiError;
use skillsync_core::model::{Assessment, AssessmentId};
use skillsync_core::traits::{Acknowledgement, AssessmentStore};

use crate::protocol::{decode_list, decode_read, Request};

/// Store backed by a single POST endpoint.
///
/// No retries and, unless one is configured, no request timeout: a failure
/// of any kind surfaces as an `ApiError` on the first attempt.
pub struct HttpStore {
    endpoint: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            timeout,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: Request<'_>) -> Result<Value, ApiError> {
        let envelope = request.envelope();
        debug!(url = %self.endpoint, operation = %request.operation(), "API request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "API error");
                match self.timeout {
                    Some(t) if e.is_timeout() => ApiError::Timeout(t.as_secs()),
                    _ => ApiError::Network(e.to_string()),
                }
            })?;

        let status = response.status().as_u16();
        debug!(status, "API response status");

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status, %body, "API error");
            return Err(ApiError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            error!(error = %e, "API response is not JSON");
            ApiError::Decode(e.to_string())
        })?;
        debug!(%body, "API response data");
        Ok(body)
    }

    async fn acknowledge(&self, request: Request<'_>) -> Result<Acknowledgement, ApiError> {
        let body = self.post(request).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AssessmentStore for HttpStore {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Assessment>, ApiError> {
        decode_list(self.post(Request::List).await?)
    }

    #[instrument(skip(self))]
    async fn read(&self, id: &AssessmentId) -> Result<Option<Assessment>, ApiError> {
        decode_read(self.post(Request::Read(id)).await?)
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn create(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
        self.acknowledge(Request::Create(record)).await
    }

    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn update(&self, record: &Assessment) -> Result<Acknowledgement, ApiError> {
        self.acknowledge(Request::Update(record)).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &AssessmentId) -> Result<Acknowledgement, ApiError> {
        self.acknowledge(Request::Delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skillsync_core::model::SkillLevel;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH: &str = "/Prod/skills-assessments";

    fn store(server: &MockServer) -> HttpStore {
        HttpStore::new(format!("{}{PATH}", server.uri()), None).unwrap()
    }

    #[tokio::test]
    async fn list_unwraps_server_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PATH))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"operation": "list"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Skill-Assessments": [
                    {"SkillAssessmentId": "SA_1", "Employee": "Jane", "Skill": "Go",
                     "Current": "Beginner", "Target": "Advanced"},
                    {"SkillAssessmentId": "SA_2", "Employee": "Raj", "Skill": "SQL",
                     "Current": "Advanced", "Target": "Expert"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = store(&server).list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].employee, "Raj");
        assert_eq!(records[1].target, SkillLevel::Expert);
    }

    #[tokio::test]
    async fn create_posts_full_record() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PATH))
            .and(body_json(json!({
                "operation": "create",
                "SkillAssessmentId": "SA_1_x",
                "Employee": "Jane",
                "Skill": "Go",
                "Current": "Beginner",
                "Target": "Advanced"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Created", "SkillAssessmentId": "SA_1_x"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let record = Assessment {
            id: "SA_1_x".into(),
            employee: "Jane".into(),
            skill: "Go".into(),
            current: SkillLevel::Beginner,
            target: SkillLevel::Advanced,
        };
        let ack = store(&server).create(&record).await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Created"));
        assert_eq!(ack.id, Some(record.id));
    }

    #[tokio::test]
    async fn read_and_delete_send_the_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({"operation": "read", "SkillAssessmentId": "SA_7"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({"operation": "delete", "SkillAssessmentId": "SA_7"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Deleted"})))
            .expect(1)
            .mount(&server)
            .await;

        let store = store(&server);
        let id = AssessmentId::new("SA_7");
        assert_eq!(store.read(&id).await.unwrap(), None);
        let ack = store.delete(&id).await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Deleted"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error_and_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server)
            .await;

        let err = store(&server).list().await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = store(&server).list().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let store = HttpStore::new("http://127.0.0.1:9/skills", None).unwrap();
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
