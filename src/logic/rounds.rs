//! Americano round generation.

use crate::models::{Participant, Round, Schedule, ScheduleError, MIN_PARTICIPANTS};

/// One round expressed as roster positions.
struct Slots {
    team_a: [usize; 2],
    team_b: [usize; 2],
    resting: Vec<usize>,
}

fn check_size(n: usize) -> Result<(), ScheduleError> {
    if n < MIN_PARTICIPANTS {
        return Err(ScheduleError::NotEnoughPlayers {
            required: MIN_PARTICIPANTS,
            found: n,
        });
    }
    Ok(())
}

/// Positions for every round of an `n`-player schedule (`n >= 4`).
fn slots(n: usize) -> Vec<Slots> {
    if n == MIN_PARTICIPANTS {
        return [(1, 2, 3), (2, 1, 3), (3, 1, 2)]
            .into_iter()
            .map(|(partner, b1, b2)| Slots {
                team_a: [0, partner],
                team_b: [b1, b2],
                resting: Vec::new(),
            })
            .collect();
    }

    (0..n)
        .map(|i| {
            // Distinct because n > 4.
            let window = [i, (i + 1) % n, (i + 2) % n, (i + 3) % n];
            Slots {
                team_a: [window[0], window[1]],
                team_b: [window[2], window[3]],
                resting: (0..n).filter(|k| !window.contains(k)).collect(),
            }
        })
        .collect()
}

/// Generate the rounds for an ordered list of display names.
///
/// 1. Exactly 4 players: the three ways to split them into two pairs, nobody rests.
/// 2. Otherwise one round per player: round `i` puts `names[i]`, `names[i+1]` against
///    `names[i+2]`, `names[i+3]` (indices mod N); the rest sit out in roster order.
///
/// Output depends only on the input order. When N is not a multiple of 4 some players
/// rest more often than others over the whole schedule; see [`rest_counts`].
pub fn generate_rounds<S: AsRef<str>>(names: &[S]) -> Result<Schedule, ScheduleError> {
    check_size(names.len())?;

    let name = |i: &usize| names[*i].as_ref().to_string();
    Ok(slots(names.len())
        .into_iter()
        .map(|s| Round {
            team_a: s.team_a.iter().map(name).collect(),
            team_b: s.team_b.iter().map(name).collect(),
            resting: s.resting.iter().map(name).collect(),
        })
        .collect())
}

/// Map participants to display names (roster order kept) and generate their rounds.
pub fn schedule_for(participants: &[Participant]) -> Result<Schedule, ScheduleError> {
    let names: Vec<String> = participants.iter().map(Participant::display_name).collect();
    generate_rounds(&names)
}

/// How many rounds each roster position sits out over the schedule for `names`.
///
/// One entry per input position, so players sharing a display name are counted apart.
pub fn rest_counts<S: AsRef<str>>(names: &[S]) -> Result<Vec<(String, usize)>, ScheduleError> {
    check_size(names.len())?;

    let mut counts: Vec<(String, usize)> = names
        .iter()
        .map(|n| (n.as_ref().to_string(), 0))
        .collect();
    for s in slots(names.len()) {
        for k in s.resting {
            counts[k].1 += 1;
        }
    }
    Ok(counts)
}
