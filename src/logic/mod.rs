//! Schedule logic: round generation and page formatting.

mod format;
mod rounds;

pub use format::{format_schedule, RoundView};
pub use rounds::{generate_rounds, rest_counts, schedule_for};
