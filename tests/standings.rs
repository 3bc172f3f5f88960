//! Integration tests for standings computation.

use score_tracker_web::{compute_standings, GameMatch, MatchStatus, TrackerError};

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// A finished match with the given winner (None = draw).
fn finished(player1: &str, player2: &str, winner: Option<&str>) -> GameMatch {
    let mut m = GameMatch::new(1, player1, player2, "Cup");
    m.status = MatchStatus::Finished;
    m.winner = winner.map(|w| w.to_string());
    m
}

#[test]
fn draw_credits_both_players_one_point() {
    let matches = vec![finished("A", "B", None)];
    let standings = compute_standings(&matches, &roster(&["A", "B"])).unwrap();
    assert_eq!(standings.len(), 2);
    assert!(standings.iter().all(|s| s.points == 1));
}

#[test]
fn win_credits_three_points_and_loser_none() {
    let matches = vec![finished("A", "B", Some("A"))];
    let standings = compute_standings(&matches, &roster(&["A", "B"])).unwrap();
    assert_eq!(standings[0].player_name, "A");
    assert_eq!(standings[0].points, 3);
    assert_eq!(standings[1].player_name, "B");
    assert_eq!(standings[1].points, 0);
}

#[test]
fn player2_win_credits_player2() {
    let matches = vec![finished("A", "B", Some("B"))];
    let standings = compute_standings(&matches, &roster(&["A", "B"])).unwrap();
    assert_eq!(standings[0].player_name, "B");
    assert_eq!(standings[0].points, 3);
}

#[test]
fn ranking_is_descending_with_roster_order_ties() {
    // A beats B, then B and C draw: A 3, B 1, C 1. B ties C but comes first
    // in the roster, so B stays ahead.
    let matches = vec![finished("A", "B", Some("A")), finished("B", "C", None)];
    let standings = compute_standings(&matches, &roster(&["A", "B", "C"])).unwrap();
    let rows: Vec<(&str, i32)> = standings
        .iter()
        .map(|s| (s.player_name.as_str(), s.points))
        .collect();
    assert_eq!(rows, vec![("A", 3), ("B", 1), ("C", 1)]);
}

#[test]
fn roster_player_without_matches_appears_with_zero_points() {
    let matches = vec![finished("A", "B", Some("A"))];
    let standings = compute_standings(&matches, &roster(&["A", "B", "C"])).unwrap();
    assert_eq!(standings.len(), 3);
    let c = standings.iter().find(|s| s.player_name == "C").unwrap();
    assert_eq!(c.points, 0);
}

#[test]
fn unfinished_matches_are_ignored() {
    let mut started = GameMatch::new(1, "A", "B", "Cup");
    started.status = MatchStatus::Started;
    started.player1_score = 5;
    let pending = GameMatch::new(1, "A", "C", "Cup");
    let matches = vec![started, pending, finished("B", "C", Some("C"))];
    let standings = compute_standings(&matches, &roster(&["A", "B", "C"])).unwrap();
    let rows: Vec<(&str, i32)> = standings
        .iter()
        .map(|s| (s.player_name.as_str(), s.points))
        .collect();
    assert_eq!(rows, vec![("C", 3), ("A", 0), ("B", 0)]);
}

#[test]
fn winner_matching_neither_participant_fails() {
    let matches = vec![finished("A", "B", Some("Z"))];
    let result = compute_standings(&matches, &roster(&["A", "B"]));
    assert!(matches!(result, Err(TrackerError::InvalidWinner { .. })));
}

#[test]
fn bad_winner_aborts_without_partial_results() {
    // A valid match before the corrupt one must not leak through.
    let matches = vec![finished("A", "B", Some("A")), finished("A", "B", Some("Z"))];
    assert!(compute_standings(&matches, &roster(&["A", "B"])).is_err());
}

#[test]
fn empty_roster_and_no_matches_yield_empty_standings() {
    let standings = compute_standings(&[], &[]).unwrap();
    assert!(standings.is_empty());
}
