use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::{
    analytics::{AnalyticsSummary, aggregate},
    database::{
        HACKATHON, HACKATHON_ID, MENTORS, PARTICIPANTS, PROJECTS, PUBLIC_STATS, PUBLIC_STATS_ID,
        STREAMED_COLLECTIONS, TEAMS, get_document, stream_collection,
    },
    error::AppError,
    state::AppState,
};

/// `GET /api/{collection}`: every document of a streamed collection as a
/// JSON array. Unknown collection names get a 404 with an empty object.
pub async fn collection_handler(
    State(state): State<Arc<AppState>>,
    Path(collection): Path<String>,
) -> Result<Response, AppError> {
    if !STREAMED_COLLECTIONS.contains(&collection.as_str()) {
        return Ok((StatusCode::NOT_FOUND, Json(json!({}))).into_response());
    }

    let documents = stream_collection(&state.redis_connection, &collection).await?;
    debug!("Streamed {} documents from {collection}", documents.len());

    Ok(Json(documents).into_response())
}

/// `GET /api/public_stats`: the `public_stats/main` singleton.
pub async fn public_stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    singleton_response(&state, PUBLIC_STATS, PUBLIC_STATS_ID).await
}

/// `GET /api/hackathon`: the `hackathon/info` singleton.
pub async fn hackathon_handler(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    singleton_response(&state, HACKATHON, HACKATHON_ID).await
}

/// `GET /api/analytics`: the aggregated dashboard summary. The four input
/// collections are re-fetched in full on every request; a store failure
/// surfaces as a 500 before any aggregation happens.
pub async fn analytics_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let connection = &state.redis_connection;

    let participants = stream_collection(connection, PARTICIPANTS).await?;
    let teams = stream_collection(connection, TEAMS).await?;
    let projects = stream_collection(connection, PROJECTS).await?;
    let mentors = stream_collection(connection, MENTORS).await?;

    Ok(Json(aggregate(&participants, &teams, &projects, &mentors)))
}

async fn singleton_response(
    state: &AppState,
    collection: &str,
    id: &str,
) -> Result<Response, AppError> {
    match get_document(&state.redis_connection, collection, id).await? {
        Some(document) => Ok(Json(document).into_response()),
        None => Ok((StatusCode::NOT_FOUND, Json(json!({}))).into_response()),
    }
}
