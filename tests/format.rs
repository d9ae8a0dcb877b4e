//! Integration tests for the two-column schedule formatting.

use americano_web::{format_schedule, generate_rounds, Round};

#[test]
fn labels_are_one_based() {
    let views = format_schedule(&generate_rounds(&["A", "B", "C", "D", "E"]).unwrap());
    let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, ["Round 1", "Round 2", "Round 3", "Round 4", "Round 5"]);
}

#[test]
fn rows_pair_team_a_with_team_b() {
    let views = format_schedule(&generate_rounds(&["Ann", "Bob", "Cal", "Dee", "Eve"]).unwrap());
    assert_eq!(
        views[0].rows,
        vec![
            ["Ann".to_string(), "Cal".to_string()],
            ["Bob".to_string(), "Dee".to_string()],
        ]
    );
    assert_eq!(views[0].resting, vec!["Eve"]);
}

#[test]
fn resting_never_becomes_a_row() {
    let views = format_schedule(&generate_rounds(&["A", "B", "C", "D", "E", "F", "G"]).unwrap());
    assert!(views.iter().all(|v| v.rows.len() == 2));
}

#[test]
fn empty_team_emits_no_rows() {
    let round = Round {
        team_a: vec!["Ann".into(), "Bob".into()],
        team_b: vec![],
        resting: vec!["Cal".into()],
    };
    let views = format_schedule(&[round]);
    assert_eq!(views[0].label, "Round 1");
    assert!(views[0].rows.is_empty());
}
