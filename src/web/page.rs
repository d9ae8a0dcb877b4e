//! Server-rendered schedule page.

use actix_web::{get, web::Query, HttpResponse};
use askama::Template;
use serde::Deserialize;

use super::{load_roster, SharedState};
use crate::logic::{format_schedule, schedule_for};
use crate::models::Participant;

/// Highest score selectable for a team in one round.
const MAX_SCORE: u8 = 16;

#[derive(Deserialize)]
pub(super) struct PageQuery {
    number: Option<String>,
    /// 1-based round to show; anything unparsable shows round 1.
    round: Option<String>,
}

/// One round split into the two "vs" columns.
struct RoundColumns {
    label: String,
    left: Vec<String>,
    right: Vec<String>,
    resting: Vec<String>,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    participants: Vec<Participant>,
    players: Vec<String>,
    error: Option<String>,
    current: Option<RoundColumns>,
    round_number: usize,
    round_count: usize,
    prev_href: Option<String>,
    next_href: Option<String>,
    scores: Vec<u8>,
}

/// Pager link for `round` of `session`, with both values query-encoded.
fn round_href(session: &str, round: usize) -> Option<String> {
    let round = round.to_string();
    match serde_urlencoded::to_string(&[("number", session), ("round", round.as_str())]) {
        Ok(query) => Some(format!("/?{}", query)),
        Err(e) => {
            log::warn!("Session {}: cannot build pager link: {}", session, e);
            None
        }
    }
}

#[get("/")]
pub(super) async fn index(state: SharedState, query: Query<PageQuery>) -> HttpResponse {
    let session = query
        .number
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(state.default_session.as_str())
        .to_string();

    let roster = load_roster(&state, &session).await;
    let participants = roster.participants;
    let players: Vec<String> = participants.iter().map(Participant::display_name).collect();

    let mut template = IndexTemplate {
        participants,
        players,
        error: None,
        current: None,
        round_number: 0,
        round_count: 0,
        prev_href: None,
        next_href: None,
        scores: (0..=MAX_SCORE).collect(),
    };

    match schedule_for(&template.participants) {
        Ok(rounds) => {
            let views = format_schedule(&rounds);
            let count = views.len();
            let number = query
                .round
                .as_deref()
                .and_then(|r| r.trim().parse::<usize>().ok())
                .unwrap_or(1)
                .clamp(1, count.max(1));
            template.round_number = number;
            template.round_count = count;
            template.prev_href = (number > 1)
                .then(|| round_href(&session, number - 1))
                .flatten();
            template.next_href = (number < count)
                .then(|| round_href(&session, number + 1))
                .flatten();
            template.current = views.into_iter().nth(number - 1).map(|view| RoundColumns {
                label: view.label,
                left: view.rows.iter().map(|[l, _]| l.clone()).collect(),
                right: view.rows.iter().map(|[_, r]| r.clone()).collect(),
                resting: view.resting,
            });
        }
        Err(e) => {
            log::warn!("Session {}: no schedule: {}", session, e);
            template.error = Some(e.to_string());
        }
    }

    match template.render() {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("Rendering schedule page failed: {}", e);
            HttpResponse::InternalServerError().body("render error")
        }
    }
}
