//! Americano tennis schedule web app: library with models, schedule logic,
//! roster fetching and the HTTP layer.

pub mod config;
pub mod logic;
pub mod models;
pub mod roster;
pub mod web;

pub use config::Config;
pub use logic::{format_schedule, generate_rounds, rest_counts, schedule_for, RoundView};
pub use models::{Participant, ParticipantId, Round, Schedule, ScheduleError, MIN_PARTICIPANTS};
pub use roster::{
    fallback_roster, resolve, ResolvedRoster, RosterError, RosterFetcher, RosterOrigin,
    RosterSource,
};
