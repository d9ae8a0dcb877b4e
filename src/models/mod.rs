//! Data structures for the Americano schedule: participants and rounds.

mod participant;
mod round;

pub use participant::{Participant, ParticipantId};
pub use round::{Round, Schedule, ScheduleError, MIN_PARTICIPANTS};
