use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use grove_nearest::geo_point::GeoPoint;
use grove_nearest::match_request::{MatchRequest, MatchResult};
use grove_nearest::resolver::MatchStrategy;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct NearestMatch {
    pub tree: GeoPoint,
    /// `{ "lat": 0, "lng": 0 }` when no waypoint matched.
    pub wp: GeoPoint,
}

impl From<MatchResult> for NearestMatch {
    fn from(result: MatchResult) -> Self {
        NearestMatch {
            tree: result.tree,
            wp: result.nearest.unwrap_or_default(),
        }
    }
}

pub struct NearestResponse(Vec<NearestMatch>);

impl IntoResponse for NearestResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

async fn resolve(
    state: &AppState,
    body: Result<Json<MatchRequest>, JsonRejection>,
    strategy: MatchStrategy,
) -> Result<NearestResponse, ApiError> {
    let Json(request) = body?;

    let results = state.resolver.nearest_waypoints(&request, strategy).await?;

    Ok(NearestResponse(
        results.into_iter().map(NearestMatch::from).collect(),
    ))
}

/// Nearest waypoint per tree by great-circle distance.
pub async fn nearest_v1_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<NearestResponse, ApiError> {
    resolve(&state, body, MatchStrategy::GreatCircle).await
}

/// Nearest waypoint per tree by the routing engine's travel cost.
pub async fn nearest_v2_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<NearestResponse, ApiError> {
    resolve(&state, body, state.matrix_strategy).await
}
