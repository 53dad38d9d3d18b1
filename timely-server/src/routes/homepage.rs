//! Resolved homepage endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use timely_core::EventId;
use timely_core::homepage::HomepageDocument;
use timely_core::render::{self, RenderNode};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/{id}/homepage", get(get_homepage))
        .route("/events/{id}/homepage/render", get(render_homepage))
}

/// GET /events/:id/homepage - The defaulted homepage document
async fn get_homepage(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<HomepageDocument>, AppError> {
    let event_id = EventId::parse(&event_id)?;
    Ok(Json(state.resolver().resolve(&event_id).await))
}

/// GET /events/:id/homepage/render - The homepage as a node sequence
async fn render_homepage(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<RenderNode>>, AppError> {
    let event_id = EventId::parse(&event_id)?;
    let resolver = state.resolver();
    let document = resolver.resolve(&event_id).await;

    Ok(Json(render::render(&document, resolver.defaults())))
}
