//! HTTP client for the backend's remote-procedure endpoint.
//!
//! Every call is a `POST {base}/rest/v1/rpc/{function}` with the named
//! arguments as a JSON object. The project key goes in the `apikey` header;
//! the bearer token is the signed-in user's access token when there is one.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use url::Url;

use crate::authoring::ModuleSubmission;
use crate::config::BackendConfig;
use crate::error::{TimelyError, TimelyResult};
use crate::event_id::EventId;
use crate::guest::Guest;
use crate::remote::EventBackend;
use crate::remote::protocol::{
    CreateMultipleChoiceModule, GetEventGuests, GetEventHomepageData, HomepageRow, RpcCall,
    RpcError, RpcFunction,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct Backend {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    access_token: Option<String>,
    timeout: Duration,
}

impl Backend {
    pub fn new(mut base_url: Url, api_key: impl Into<String>) -> Self {
        // Url::join replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Backend {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &BackendConfig) -> TimelyResult<Self> {
        let api_key = config.anon_key.clone().ok_or_else(|| {
            TimelyError::Config(
                "backend.anon_key is not set (config file or TIMELY_BACKEND__ANON_KEY)".into(),
            )
        })?;

        let mut backend = Backend::new(config.base_url()?, api_key).with_timeout(config.timeout()?);
        backend.access_token = config.access_token.clone();
        Ok(backend)
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call a typed remote function and return its decoded result.
    pub async fn call<C: RpcCall>(&self, call: C) -> TimelyResult<C::Response> {
        timeout(self.timeout, self.call_raw(C::function(), call))
            .await
            .map_err(|_| TimelyError::BackendTimeout(self.timeout.as_secs()))?
    }

    fn endpoint(&self, function: RpcFunction) -> TimelyResult<Url> {
        self.base_url
            .join(&format!("rest/v1/rpc/{}", function.name()))
            .map_err(|e| TimelyError::Config(format!("Invalid backend url: {e}")))
    }

    async fn call_raw<P: Serialize, R: DeserializeOwned>(
        &self,
        function: RpcFunction,
        params: P,
    ) -> TimelyResult<R> {
        let url = self.endpoint(function)?;
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);

        tracing::debug!(function = function.name(), "calling backend");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
            .json(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TimelyError::Backend(format!(
                "{} failed with {}: {}",
                function.name(),
                status,
                error_message(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            TimelyError::Serialization(format!(
                "Failed to parse {} response: {}",
                function.name(),
                e
            ))
        })
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<RpcError>(body) {
        Ok(RpcError {
            message: Some(message),
            hint: Some(hint),
            ..
        }) => format!("{message} ({hint})"),
        Ok(RpcError {
            message: Some(message),
            ..
        }) => message,
        _ if body.is_empty() => "no response body".to_string(),
        _ => body.to_string(),
    }
}

#[async_trait]
impl EventBackend for Backend {
    async fn homepage_rows(&self, event_id: &EventId) -> TimelyResult<Vec<HomepageRow>> {
        self.call(GetEventHomepageData::new(event_id)).await
    }

    async fn event_guests(&self, event_id: &EventId) -> TimelyResult<Vec<Guest>> {
        self.call(GetEventGuests::new(event_id)).await
    }

    async fn create_module(
        &self,
        event_id: &EventId,
        submission: &ModuleSubmission,
    ) -> TimelyResult<String> {
        self.call(CreateMultipleChoiceModule::new(event_id, submission))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> Backend {
        Backend::new(Url::parse(&server.uri()).unwrap(), "anon-key")
    }

    fn event() -> EventId {
        EventId::parse("evt-7").unwrap()
    }

    #[tokio::test]
    async fn homepage_call_posts_named_arguments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/rpc/get_event_homepage_data"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .and(body_json(json!({ "p_event_id": "evt-7" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "event_image": null,
                "welcome_title": "Hi",
                "modules": [{ "id": "m", "type": "list", "content": { "items": ["a"] } }]
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let rows = backend(&server).homepage_rows(&event()).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].welcome_title.as_deref(), Some("Hi"));
        assert_eq!(rows[0].modules.as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn access_token_replaces_anon_bearer() {
        let server = MockServer::start().await;
        Mock::given(path("/rest/v1/rpc/get_event_guests"))
            .and(header("authorization", "Bearer user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "g1", "first_name": "Ada", "email": "ada@example.com" }
            ])))
            .mount(&server)
            .await;

        let guests = backend(&server)
            .with_access_token("user-token")
            .event_guests(&event())
            .await
            .unwrap();

        assert_eq!(guests[0].display_name(), "Ada");
    }

    #[tokio::test]
    async fn base_path_is_kept_when_joining() {
        let server = MockServer::start().await;
        Mock::given(path("/project/rest/v1/rpc/get_event_homepage_data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let base = Url::parse(&format!("{}/project", server.uri())).unwrap();
        let rows = Backend::new(base, "k").homepage_rows(&event()).await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn error_status_surfaces_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "PGRST202",
                "message": "Could not find the function",
                "hint": null
            })))
            .mount(&server)
            .await;

        let err = backend(&server).homepage_rows(&event()).await.unwrap_err();

        match err {
            TimelyError::Backend(msg) => {
                assert!(msg.contains("get_event_homepage_data"), "{msg}");
                assert!(msg.contains("Could not find the function"), "{msg}");
            }
            other => panic!("Expected backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_a_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = backend(&server).homepage_rows(&event()).await.unwrap_err();
        assert!(matches!(err, TimelyError::Serialization(_)));
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = backend(&server)
            .with_timeout(Duration::from_millis(50))
            .homepage_rows(&event())
            .await
            .unwrap_err();

        assert!(matches!(err, TimelyError::BackendTimeout(_)));
    }

    #[tokio::test]
    async fn create_module_sends_formatted_schedule() {
        let server = MockServer::start().await;
        Mock::given(path("/rest/v1/rpc/create_multiple_choice_module"))
            .and(body_json(json!({
                "p_event_id": "evt-7",
                "p_question": "Dinner?",
                "p_options": ["Fish", "Pasta"],
                "p_date": "2025-03-20",
                "p_time": "09:05",
                "p_guest_ids": ["g1"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!("mod-123")))
            .expect(1)
            .mount(&server)
            .await;

        let submission = ModuleSubmission {
            question: "Dinner?".into(),
            options: vec!["Fish".into(), "Pasta".into()],
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            guest_ids: vec!["g1".into()],
        };

        let id = backend(&server)
            .create_module(&event(), &submission)
            .await
            .unwrap();

        assert_eq!(id, "mod-123");
    }
}
