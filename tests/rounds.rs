//! Integration tests for round generation.

use americano_web::{
    generate_rounds, rest_counts, schedule_for, Participant, Round, ScheduleError,
};
use std::collections::{BTreeSet, HashMap};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("P{i}")).collect()
}

fn pair(a: &str, b: &str) -> BTreeSet<String> {
    [a.to_string(), b.to_string()].into_iter().collect()
}

#[test]
fn four_players_get_three_fixed_rounds() {
    let rounds = generate_rounds(&["Ann", "Bob", "Cal", "Dee"]).unwrap();
    assert_eq!(
        rounds,
        vec![
            Round {
                team_a: vec!["Ann".into(), "Bob".into()],
                team_b: vec!["Cal".into(), "Dee".into()],
                resting: vec![],
            },
            Round {
                team_a: vec!["Ann".into(), "Cal".into()],
                team_b: vec!["Bob".into(), "Dee".into()],
                resting: vec![],
            },
            Round {
                team_a: vec!["Ann".into(), "Dee".into()],
                team_b: vec!["Bob".into(), "Cal".into()],
                resting: vec![],
            },
        ]
    );
}

#[test]
fn four_players_cover_every_split_once() {
    let rounds = generate_rounds(&names(4)).unwrap();
    let splits: BTreeSet<BTreeSet<BTreeSet<String>>> = rounds
        .iter()
        .map(|r| {
            [pair(&r.team_a[0], &r.team_a[1]), pair(&r.team_b[0], &r.team_b[1])]
                .into_iter()
                .collect()
        })
        .collect();
    assert_eq!(splits.len(), 3);
}

#[test]
fn five_players_slide_a_window() {
    let rounds = generate_rounds(&names(5)).unwrap();
    assert_eq!(rounds.len(), 5);
    assert_eq!(rounds[0].team_a, vec!["P0", "P1"]);
    assert_eq!(rounds[0].team_b, vec!["P2", "P3"]);
    assert_eq!(rounds[0].resting, vec!["P4"]);
    assert_eq!(rounds[1].team_a, vec!["P1", "P2"]);
    assert_eq!(rounds[1].team_b, vec!["P3", "P4"]);
    assert_eq!(rounds[1].resting, vec!["P0"]);
    // Wraps around the end of the roster.
    assert_eq!(rounds[4].team_a, vec!["P4", "P0"]);
    assert_eq!(rounds[4].team_b, vec!["P1", "P2"]);
    assert_eq!(rounds[4].resting, vec!["P3"]);
}

#[test]
fn round_sizes_hold_for_larger_rosters() {
    for n in 5..=24 {
        let rounds = generate_rounds(&names(n)).unwrap();
        assert_eq!(rounds.len(), n, "n = {n}");
        for r in &rounds {
            assert_eq!(r.team_a.len(), 2);
            assert_eq!(r.team_b.len(), 2);
            assert_eq!(r.resting.len(), n - 4);
            assert_eq!(r.len(), n);
        }
    }
}

#[test]
fn every_player_plays_exactly_four_rounds() {
    for n in [5, 6, 7, 8, 9, 13] {
        let rounds = generate_rounds(&names(n)).unwrap();
        let mut played: HashMap<&str, usize> = HashMap::new();
        for r in &rounds {
            for name in r.team_a.iter().chain(&r.team_b) {
                *played.entry(name.as_str()).or_default() += 1;
            }
        }
        assert_eq!(played.len(), n);
        assert!(played.values().all(|&c| c == 4), "n = {n}: {played:?}");
    }
}

#[test]
fn generation_is_deterministic() {
    let input = names(11);
    assert_eq!(generate_rounds(&input).unwrap(), generate_rounds(&input).unwrap());
}

#[test]
fn fewer_than_four_players_is_rejected() {
    for n in 0..4 {
        assert_eq!(
            generate_rounds(&names(n)),
            Err(ScheduleError::NotEnoughPlayers { required: 4, found: n })
        );
    }
}

#[test]
fn duplicate_display_names_still_rest() {
    let input = ["Bob D.", "Ann N.", "Cal F.", "Dee A.", "Bob D."];
    let rounds = generate_rounds(&input).unwrap();
    assert_eq!(rounds[0].resting, vec!["Bob D."]);
    assert!(rounds.iter().all(|r| r.len() == 5));
}

#[test]
fn rest_counts_show_the_cyclic_share() {
    let counts = rest_counts(&names(6)).unwrap();
    assert_eq!(counts.len(), 6);
    // 6 rounds, 2 resting each, 4 plays per player: everyone rests twice.
    assert!(counts.iter().all(|(_, c)| *c == 2));
}

#[test]
fn rest_counts_keep_same_named_players_apart() {
    let input = ["Bob D.", "Ann N.", "Cal F.", "Dee A.", "Bob D."];
    let counts = rest_counts(&input).unwrap();
    assert_eq!(counts.len(), 5);
    assert_eq!(counts[0], ("Bob D.".to_string(), 1));
    assert_eq!(counts[4], ("Bob D.".to_string(), 1));
    assert_eq!(counts.iter().map(|(_, c)| c).sum::<usize>(), 5);
}

#[test]
fn rest_counts_need_a_full_court() {
    assert_eq!(
        rest_counts(&names(3)),
        Err(ScheduleError::NotEnoughPlayers { required: 4, found: 3 })
    );
    assert!(rest_counts(&names(4)).unwrap().iter().all(|(_, c)| *c == 0));
}

#[test]
fn schedule_for_uses_display_names() {
    let roster = vec![
        Participant::new(1, "Lars", "Føleide"),
        Participant::new(2, "Anh", "Nguyen Pham"),
        Participant::new(3, "Bob", "Dahl"),
        Participant::new(4, "Alice", "Dahl"),
    ];
    let rounds = schedule_for(&roster).unwrap();
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0].team_a, vec!["Lars F.", "Anh N."]);
    assert_eq!(rounds[0].team_b, vec!["Bob D.", "Alice D."]);
    assert!(rounds[0].is_playing("Alice D."));
}
