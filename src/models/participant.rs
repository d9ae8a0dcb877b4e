//! Participant fetched from the club roster.

use serde::{Deserialize, Serialize};

/// Member id as stored in the club database.
pub type ParticipantId = i64;

/// A member signed up for a session. Immutable once fetched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub first_name: String,
    pub last_name: String,
    /// Contact number; not every member has one on file.
    #[serde(default)]
    pub mobile: Option<String>,
}

impl Participant {
    pub fn new(id: ParticipantId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            mobile: None,
        }
    }

    /// Name shown in the schedule: first name plus last-name initial, e.g. "Lars F.".
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        match self.last_name.trim().chars().next() {
            Some(initial) => format!("{} {}.", first, initial),
            None => first.to_string(),
        }
    }
}
