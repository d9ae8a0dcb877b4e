//! Roster query against the club database.

use sqlx::MySqlPool;

use crate::models::Participant;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile: Option<String>,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            mobile: row.mobile.filter(|m| !m.trim().is_empty()),
        }
    }
}

/// Members confirmed as substitutes for one session slot, earliest confirmation first.
pub const SQL_LIST_SESSION_PARTICIPANTS: &str = r#"
SELECT
    CAST(b.medlemsid AS SIGNED) AS id,
    b.fornavn AS first_name,
    b.etternavn AS last_name,
    b.mobil AS mobile
FROM vikarer a
JOIN medlemmer b ON a.medlemsid = b.medlemsid
WHERE a.timeid = ?
ORDER BY a.bekreftelsestidspunkt
"#;

pub async fn list_session_participants(
    pool: &MySqlPool,
    session: &str,
) -> sqlx::Result<Vec<ParticipantRow>> {
    sqlx::query_as::<_, ParticipantRow>(SQL_LIST_SESSION_PARTICIPANTS)
        .bind(session)
        .fetch_all(pool)
        .await
}
