//! Reshape rounds into the two-column "A vs B" rows the page renders.

use crate::models::Round;
use serde::Serialize;

/// One round ready for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundView {
    /// "Round 1", "Round 2", ...
    pub label: String,
    /// Left/right cells: team A's i-th player next to team B's i-th player.
    pub rows: Vec<[String; 2]>,
    pub resting: Vec<String>,
}

/// Format rounds for the two-column "vs" view.
///
/// A round's slots are walked two at a time (team A with team B, then resting with
/// nothing), and a pair of rows is emitted only when both slots in a step are non-empty.
pub fn format_schedule(rounds: &[Round]) -> Vec<RoundView> {
    rounds
        .iter()
        .enumerate()
        .map(|(index, round)| {
            let slots: [&[String]; 3] = [&round.team_a, &round.team_b, &round.resting];
            let mut rows = Vec::new();
            for pair in slots.chunks(2) {
                if let [left, right] = pair {
                    if !left.is_empty() && !right.is_empty() {
                        rows.extend(
                            left.iter()
                                .zip(right.iter())
                                .map(|(l, r)| [l.clone(), r.clone()]),
                        );
                    }
                }
            }
            RoundView {
                label: format!("Round {}", index + 1),
                rows,
                resting: round.resting.clone(),
            }
        })
        .collect()
}
