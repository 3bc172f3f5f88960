//! Standings: aggregate points over finished matches into a ranking.

use crate::models::{GameMatch, MatchStatus, Standing, TrackerError};
use std::collections::HashMap;

/// Compute the ranking for one championship.
///
/// Only matches with status `finished` count; pending and started matches are
/// filtered out here, so callers may pass the full match list. Per finished
/// match: a draw (`winner` absent) gives both participants +1, otherwise the
/// winner gets +3 and the loser 0. A recorded winner matching neither
/// participant aborts the whole computation with `InvalidWinner` rather than
/// producing a partially wrong ranking.
///
/// Every roster name appears exactly once in the output, players without any
/// finished match included at 0 points. The result is sorted descending by
/// points with a stable sort, so equal-point players keep their roster order.
pub fn compute_standings(
    matches: &[GameMatch],
    roster: &[String],
) -> Result<Vec<Standing>, TrackerError> {
    let mut points: HashMap<&str, i32> = HashMap::new();

    for m in matches.iter().filter(|m| m.status == MatchStatus::Finished) {
        match m.winner.as_deref() {
            None => {
                *points.entry(m.player1.as_str()).or_insert(0) += 1;
                *points.entry(m.player2.as_str()).or_insert(0) += 1;
            }
            Some(w) if w == m.player1 => {
                *points.entry(m.player1.as_str()).or_insert(0) += 3;
            }
            Some(w) if w == m.player2 => {
                *points.entry(m.player2.as_str()).or_insert(0) += 3;
            }
            Some(w) => {
                return Err(TrackerError::InvalidWinner {
                    winner: w.to_string(),
                })
            }
        }
    }

    let mut standings: Vec<Standing> = roster
        .iter()
        .map(|name| Standing {
            player_name: name.clone(),
            points: points.get(name.as_str()).copied().unwrap_or(0),
        })
        .collect();

    // Stable sort: ties keep roster order, no secondary key.
    standings.sort_by(|a, b| b.points.cmp(&a.points));

    Ok(standings)
}
