//! Integration tests for round-robin match generation.

use score_tracker_web::{generate_round_robin, MatchStatus, TrackerError};

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn generate_requires_at_least_2_players() {
    assert!(matches!(
        generate_round_robin(&roster(&["A"]), 1, "Cup"),
        Err(TrackerError::InsufficientPlayers)
    ));
    assert!(matches!(
        generate_round_robin(&[], 1, "Cup"),
        Err(TrackerError::InsufficientPlayers)
    ));
}

#[test]
fn three_players_yield_exact_pairs_in_order() {
    let matches = generate_round_robin(&roster(&["A", "B", "C"]), 7, "Cup").unwrap();
    let pairs: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.player1.as_str(), m.player2.as_str()))
        .collect();
    assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    for m in &matches {
        assert_eq!(m.championship_id, 7);
        assert_eq!(m.game, "Cup");
        assert_eq!(m.status, MatchStatus::Pending);
        assert_eq!(m.player1_score, 0);
        assert_eq!(m.player2_score, 0);
        assert_eq!(m.winner, None);
        assert_eq!(m.started_at, None);
        assert_eq!(m.finished_at, None);
    }
}

#[test]
fn n_players_yield_n_choose_2_matches_without_repeats() {
    for n in 2..=10usize {
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let matches = generate_round_robin(&names, 1, "Cup").unwrap();
        assert_eq!(matches.len(), n * (n - 1) / 2);

        let mut seen = std::collections::HashSet::new();
        for m in &matches {
            assert_ne!(m.player1, m.player2, "player paired with itself");
            // Unordered pair: normalize before checking for repeats.
            let key = if m.player1 < m.player2 {
                (m.player1.clone(), m.player2.clone())
            } else {
                (m.player2.clone(), m.player1.clone())
            };
            assert!(seen.insert(key), "pair repeated");
            assert!(names.contains(&m.player1));
            assert!(names.contains(&m.player2));
        }
    }
}

#[test]
fn generation_is_deterministic_for_the_same_roster() {
    let names = roster(&["D", "A", "C", "B"]);
    let first = generate_round_robin(&names, 1, "Cup").unwrap();
    let second = generate_round_robin(&names, 1, "Cup").unwrap();
    let pairs = |ms: &[score_tracker_web::GameMatch]| {
        ms.iter()
            .map(|m| (m.player1.clone(), m.player2.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(pairs(&first), pairs(&second));
}
