//! Roster fetching: who signed up for a session, with an explicit failure kind
//! for every way that can go wrong, and the fallback policy applied on top.

mod fallback;
pub mod repo;

use std::time::Duration;

use sqlx::MySqlPool;

use crate::models::{Participant, MIN_PARTICIPANTS};

pub use fallback::fallback_roster;

/// Errors that can occur while fetching a roster.
#[derive(Debug)]
pub enum RosterError {
    /// The query (or acquiring a connection for it) did not finish in time.
    Timeout(Duration),
    /// Connectivity or SQL failure.
    QueryFailed(sqlx::Error),
    /// Rows came back but did not have the expected shape.
    DecodeFailed(sqlx::Error),
    /// No database is configured for this deployment.
    NotConfigured,
    /// The query succeeded with a different number of rows than configured.
    UnexpectedRowCount {
        expected: usize,
        found: usize,
        participants: Vec<Participant>,
    },
}

impl RosterError {
    /// Classify a database error; pool acquisition timeouts count as `Timeout`.
    pub fn from_sqlx(err: sqlx::Error, timeout: Duration) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => RosterError::Timeout(timeout),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => RosterError::DecodeFailed(err),
            other => RosterError::QueryFailed(other),
        }
    }

    /// Stable snake_case name, used in logs and response headers.
    pub fn kind(&self) -> &'static str {
        match self {
            RosterError::Timeout(_) => "timeout",
            RosterError::QueryFailed(_) => "query_failed",
            RosterError::DecodeFailed(_) => "decode_failed",
            RosterError::NotConfigured => "not_configured",
            RosterError::UnexpectedRowCount { .. } => "unexpected_row_count",
        }
    }
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Timeout(t) => write!(f, "Roster fetch timed out after {} ms", t.as_millis()),
            RosterError::QueryFailed(e) => write!(f, "Roster query failed: {}", e),
            RosterError::DecodeFailed(e) => write!(f, "Roster rows could not be read: {}", e),
            RosterError::NotConfigured => write!(f, "No roster database configured"),
            RosterError::UnexpectedRowCount { expected, found, .. } => {
                write!(f, "Expected {} roster rows, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::QueryFailed(e) | RosterError::DecodeFailed(e) => Some(e),
            _ => None,
        }
    }
}

/// Where roster rows come from.
#[derive(Clone, Debug)]
pub enum RosterSource {
    /// Club database; connections are opened on first use.
    MySql(MySqlPool),
    /// An explicitly supplied list.
    Fixed(Vec<Participant>),
    /// No database configured; every fetch fails with `NotConfigured`.
    Unconfigured,
}

impl RosterSource {
    /// Short name for health output.
    pub fn backend(&self) -> &'static str {
        match self {
            RosterSource::MySql(_) => "mysql",
            RosterSource::Fixed(_) => "fixed",
            RosterSource::Unconfigured => "unconfigured",
        }
    }
}

/// Fetches the roster for a session with a bounded wait.
#[derive(Clone, Debug)]
pub struct RosterFetcher {
    pub source: RosterSource,
    /// Row count the session is supposed to have, if known.
    pub expected_count: Option<usize>,
    pub timeout: Duration,
}

impl RosterFetcher {
    pub fn new(source: RosterSource, timeout: Duration) -> Self {
        Self {
            source,
            expected_count: None,
            timeout,
        }
    }

    pub fn with_expected_count(mut self, expected_count: Option<usize>) -> Self {
        self.expected_count = expected_count;
        self
    }

    /// Participants for `session`, in confirmation order.
    pub async fn fetch(&self, session: &str) -> Result<Vec<Participant>, RosterError> {
        let participants: Vec<Participant> = match &self.source {
            RosterSource::Fixed(list) => list.clone(),
            RosterSource::Unconfigured => return Err(RosterError::NotConfigured),
            RosterSource::MySql(pool) => {
                let rows = tokio::time::timeout(
                    self.timeout,
                    repo::list_session_participants(pool, session),
                )
                .await
                .map_err(|_| RosterError::Timeout(self.timeout))?
                .map_err(|e| RosterError::from_sqlx(e, self.timeout))?;
                rows.into_iter().map(Participant::from).collect()
            }
        };

        if let Some(expected) = self.expected_count {
            if participants.len() != expected {
                return Err(RosterError::UnexpectedRowCount {
                    expected,
                    found: participants.len(),
                    participants,
                });
            }
        }
        Ok(participants)
    }
}

/// Whether the served participants are the session's own or the fixed fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RosterOrigin {
    Live,
    Fallback,
}

impl RosterOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterOrigin::Live => "live",
            RosterOrigin::Fallback => "fallback",
        }
    }
}

/// Roster after the fallback policy: always has participants to show.
#[derive(Debug)]
pub struct ResolvedRoster {
    pub participants: Vec<Participant>,
    pub origin: RosterOrigin,
    /// The failure that was degraded around, if any.
    pub error: Option<RosterError>,
}

/// Apply the fallback policy to a fetch result and log what happened.
///
/// A row-count mismatch keeps the real rows as long as there are enough of them for a
/// court; every other failure serves [`fallback_roster`].
pub fn resolve(session: &str, result: Result<Vec<Participant>, RosterError>) -> ResolvedRoster {
    match result {
        Ok(participants) => ResolvedRoster {
            participants,
            origin: RosterOrigin::Live,
            error: None,
        },
        Err(RosterError::UnexpectedRowCount {
            expected,
            found,
            participants,
        }) if found >= MIN_PARTICIPANTS => {
            log::warn!(
                "Session {}: expected {} roster rows, got {}; serving them anyway",
                session,
                expected,
                found
            );
            ResolvedRoster {
                participants: participants.clone(),
                origin: RosterOrigin::Live,
                error: Some(RosterError::UnexpectedRowCount {
                    expected,
                    found,
                    participants,
                }),
            }
        }
        Err(e) => {
            match &e {
                RosterError::NotConfigured => {
                    log::debug!("Session {}: no database configured; serving fallback roster", session)
                }
                RosterError::DecodeFailed(_) => {
                    log::error!("Session {}: {} ({}); serving fallback roster", session, e, e.kind())
                }
                _ => log::warn!("Session {}: {} ({}); serving fallback roster", session, e, e.kind()),
            }
            ResolvedRoster {
                participants: fallback_roster(),
                origin: RosterOrigin::Fallback,
                error: Some(e),
            }
        }
    }
}
