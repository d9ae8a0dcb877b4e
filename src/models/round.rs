//! Round (two doubles teams plus the players sitting out) and ScheduleError.

use serde::{Deserialize, Serialize};

/// Fewest players that can fill one doubles court.
pub const MIN_PARTICIPANTS: usize = 4;

/// One scheduling unit: 2v2 on court, everyone else resting.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub team_a: Vec<String>,
    pub team_b: Vec<String>,
    /// Players not on court this round, in roster order.
    pub resting: Vec<String>,
}

impl Round {
    /// Number of players accounted for in this round.
    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len() + self.resting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `name` plays (is on either team) this round.
    pub fn is_playing(&self, name: &str) -> bool {
        self.team_a.iter().chain(&self.team_b).any(|n| n == name)
    }
}

/// Rounds in play order.
pub type Schedule = Vec<Round>;

/// Errors that can occur while building a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Fewer players than one court needs.
    NotEnoughPlayers { required: usize, found: usize },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NotEnoughPlayers { required, found } => write!(
                f,
                "Need at least {} players to make a schedule (found {})",
                required, found
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}
