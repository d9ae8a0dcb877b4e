//! JSON endpoints.

use actix_web::{get, http::StatusCode, web::Query, HttpResponse};
use serde::{Deserialize, Serialize};

use super::{load_roster, SharedState};
use crate::roster::{ResolvedRoster, RosterError};

/// `live` or `fallback`.
pub const ROSTER_SOURCE_HEADER: &str = "X-Roster-Source";
/// Kind of the failure that was degraded around, when there was one.
pub const ROSTER_ERROR_HEADER: &str = "X-Roster-Error";

#[derive(Serialize)]
struct Health {
    ok: bool,
    roster_backend: &'static str,
}

#[derive(Deserialize)]
pub(super) struct SessionQuery {
    number: Option<String>,
}

/// Status for a roster response: data is always sent, but unreadable rows are a 500.
pub fn status_for(error: Option<&RosterError>) -> StatusCode {
    match error {
        Some(RosterError::DecodeFailed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

/// JSON participant array with the origin (and failure kind, if any) in headers.
pub fn roster_response(roster: &ResolvedRoster) -> HttpResponse {
    let mut response = HttpResponse::build(status_for(roster.error.as_ref()));
    response.insert_header((ROSTER_SOURCE_HEADER, roster.origin.as_str()));
    if let Some(e) = &roster.error {
        response.insert_header((ROSTER_ERROR_HEADER, e.kind()));
    }
    response.json(&roster.participants)
}

/// Liveness plus which roster backend this instance reads from.
#[get("/api/health")]
pub(super) async fn api_health(state: SharedState) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        ok: true,
        roster_backend: state.roster.source.backend(),
    })
}

/// Browsers ask for it on every page load; there is no icon.
#[get("/favicon.ico")]
pub(super) async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Participants signed up for session `number`.
#[get("/api/get-data")]
pub(super) async fn api_get_data(state: SharedState, query: Query<SessionQuery>) -> HttpResponse {
    let Some(session) = query.number.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Number not provided in the query" }));
    };

    roster_response(&load_roster(&state, session).await)
}
