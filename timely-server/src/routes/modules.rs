//! Module authoring endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::Serialize;

use timely_core::EventId;
use timely_core::authoring::ModuleSubmission;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/events/{id}/modules", post(create_module))
}

#[derive(Serialize)]
pub struct CreatedModule {
    pub id: String,
}

/// POST /events/:id/modules - Store a multiple choice module
async fn create_module(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(submission): Json<ModuleSubmission>,
) -> Result<(StatusCode, Json<CreatedModule>), AppError> {
    let event_id = EventId::parse(&event_id)?;
    submission.validate()?;

    let id = state.backend().create_module(&event_id, &submission).await?;
    tracing::info!(event = %event_id, module = %id, guests = submission.guest_ids.len(), "module created");

    Ok((StatusCode::CREATED, Json(CreatedModule { id })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use timely_core::config::HomepageDefaults;
    use timely_core::remote::memory::MemoryBackend;

    use crate::routes::app;
    use crate::routes::test_support::send;
    use crate::state::AppState;

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn submission() -> Value {
        json!({
            "question": "Which session?",
            "options": ["Morning", "Afternoon"],
            "date": "2026-05-01",
            "time": "09:30",
            "guestIds": ["g1", "g2"],
        })
    }

    #[tokio::test]
    async fn creates_module_through_backend() {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::with_backend(backend.clone(), HomepageDefaults::default());

        let (status, body) = send(app(state), post_json("/events/evt-1/modules", submission())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "module-1");

        let created = backend.created_modules();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0.as_str(), "evt-1");
        assert_eq!(created[0].1.options, ["Morning", "Afternoon"]);
        assert_eq!(created[0].1.time_string(), "09:30");
    }

    #[tokio::test]
    async fn incomplete_submission_is_rejected() {
        let backend = Arc::new(MemoryBackend::new());
        let state = AppState::with_backend(backend.clone(), HomepageDefaults::default());
        let mut body = submission();
        body["guestIds"] = json!([]);

        let (status, response) = send(app(state), post_json("/events/evt-1/modules", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Invalid input: no guests selected");
        assert!(backend.created_modules().is_empty());
    }

    #[tokio::test]
    async fn malformed_time_is_a_client_error() {
        let state = AppState::with_backend(Arc::new(MemoryBackend::new()), HomepageDefaults::default());
        let mut body = submission();
        body["time"] = json!("half past nine");

        let (status, _) = send(app(state), post_json("/events/evt-1/modules", body)).await;

        assert!(status.is_client_error());
    }
}
