//! HTTP layer: roster API, schedule page, health.

mod api;
mod page;

use actix_web::web::{self, Data};

use crate::roster::{self, ResolvedRoster, RosterFetcher};

pub use api::{roster_response, status_for, ROSTER_ERROR_HEADER, ROSTER_SOURCE_HEADER};

/// Shared state: how to fetch rosters and which session the page shows by default.
pub struct AppState {
    pub roster: RosterFetcher,
    pub default_session: String,
}

pub type SharedState = Data<AppState>;

/// Register all routes except static files.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(page::index)
        .service(api::api_get_data)
        .service(api::api_health)
        .service(api::favicon);
}

/// Fetch a session's roster and degrade to the fallback list on failure.
async fn load_roster(state: &AppState, session: &str) -> ResolvedRoster {
    let result = state.roster.fetch(session).await;
    roster::resolve(session, result)
}
