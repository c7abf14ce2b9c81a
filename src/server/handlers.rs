use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use super::AppState;
use crate::error::ProxyError;
use crate::models::{
    EventsParams, OddsQuery, Snapshot, SnapshotParams, SportSummary, UpstreamMeta, UpstreamResult,
};
use crate::normalize::{normalize_snapshot, summarize_sports};

const SPORTS_NOTE: &str =
    "Use /events?sport=<key> to list events and /snapshot?sport=<key>&eventId=<id> for odds";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SportsResponse {
    ok: bool,
    default_sport: String,
    sports: Vec<SportSummary>,
    meta: UpstreamMeta,
    note: &'static str,
}

#[derive(Debug, Serialize)]
struct SnapshotResponse {
    ok: bool,
    meta: UpstreamMeta,
    query: OddsQuery,
    snapshot: Snapshot,
}

/// `GET /`
pub async fn health() -> &'static str {
    "Odds API Proxy running"
}

/// `GET /sports`
pub async fn handle_sports(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let result = state.client.fetch_sports().await?;
    if result.error {
        return Ok(upstream_failure(result));
    }

    let sports = summarize_sports(&result.data.into_value());
    info!("Listed {} sports", sports.len());

    Ok(Json(SportsResponse {
        ok: true,
        default_sport: state.default_sport.to_string(),
        sports,
        meta: result.meta,
        note: SPORTS_NOTE,
    })
    .into_response())
}

/// `GET /events?sport=`
pub async fn handle_events(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ProxyError> {
    let Query(pairs) = query?;
    let sport = EventsParams::from_pairs(pairs).sport_or(&state.default_sport);

    debug!("Listing events for {}", sport);

    let result = state.client.fetch_events(&sport).await?;
    let status = if result.error {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    Ok((status, Json(result)).into_response())
}

/// `GET /snapshot?sport=&regions=&markets=&oddsFormat=&bookmakers=&eventId=&eventIds=`
pub async fn handle_snapshot(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ProxyError> {
    let Query(pairs) = query?;
    let query = OddsQuery::resolve(SnapshotParams::from_pairs(pairs), &state.default_sport);

    info!(
        "Snapshot | sport: {} | event: {} | markets: {}",
        query.sport,
        query.event_id.as_deref().unwrap_or("*"),
        query.markets
    );

    let result = state.client.fetch_odds(&query).await?;
    if result.error {
        return Ok(upstream_failure(result));
    }

    let UpstreamResult { meta, data, .. } = result;

    Ok(Json(SnapshotResponse {
        ok: true,
        meta,
        query,
        snapshot: normalize_snapshot(data.into_value()),
    })
    .into_response())
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "path": uri.path(),
        })),
    )
        .into_response()
}

fn upstream_failure(result: UpstreamResult) -> Response {
    (StatusCode::BAD_GATEWAY, Json(result)).into_response()
}
