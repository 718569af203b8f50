//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use iljeong_core::{Event, EventDraft};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/{id}", put(update_event).delete(delete_event))
}

/// Wire shape of the list endpoint: `{"events": [...]}`.
#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// GET /api/events - List all events
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let events = state
        .events
        .read()
        .map_err(|_| anyhow::anyhow!("Event store lock poisoned"))?
        .clone();

    Ok(Json(EventsResponse { events }))
}

/// POST /api/events - Create an event under a server-assigned id
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    // Ids are always minted here; an id on the draft is ignored.
    let event = draft.into_event(Uuid::new_v4().to_string());

    let mut events = state
        .events
        .write()
        .map_err(|_| anyhow::anyhow!("Event store lock poisoned"))?;
    events.push(event.clone());

    info!("Created event {}: {}", event.id, event.title);

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/:id - Replace an event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    let mut events = state
        .events
        .write()
        .map_err(|_| anyhow::anyhow!("Event store lock poisoned"))?;

    let Some(stored) = events.iter_mut().find(|event| event.id == id) else {
        return Err(AppError::not_found(&id));
    };

    // The path id wins over whatever id the draft carries.
    *stored = draft.into_event(id);

    info!("Updated event {}: {}", stored.id, stored.title);

    Ok(Json(stored.clone()))
}

/// DELETE /api/events/:id - Remove an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut events = state
        .events
        .write()
        .map_err(|_| anyhow::anyhow!("Event store lock poisoned"))?;

    let before = events.len();
    events.retain(|event| event.id != id);

    if events.len() == before {
        return Err(AppError::not_found(&id));
    }

    info!("Deleted event {}", id);

    Ok(StatusCode::NO_CONTENT)
}
