use axum::{Json, Router, extract::Query, routing::get};
use serde::Deserialize;

use timely_core::render::VideoSource;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/video", get(classify))
}

#[derive(Deserialize)]
pub struct VideoQuery {
    #[serde(default)]
    pub url: String,
}

/// GET /video?url= - How a video module's link would be shown
async fn classify(Query(query): Query<VideoQuery>) -> Json<VideoSource> {
    Json(VideoSource::classify(&query.url))
}
