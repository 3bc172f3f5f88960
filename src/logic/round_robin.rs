//! Round-robin match generation: every player meets every other player once.

use crate::models::{ChampionshipId, GameMatch, TrackerError};

/// Generate the full single-leg round robin for a roster.
///
/// For every unordered pair `{i, j}` with `i < j` in the roster order, emits
/// one pending match at 0-0 with `player1 = players[i]` and
/// `player2 = players[j]`. `n` players yield exactly `n*(n-1)/2` matches, in
/// an order fully determined by the roster order.
///
/// The caller supplies a deduplicated roster and is responsible for checking
/// that the championship has no matches yet; this function is pure and does
/// not look at existing state.
pub fn generate_round_robin(
    players: &[String],
    championship_id: ChampionshipId,
    game: &str,
) -> Result<Vec<GameMatch>, TrackerError> {
    if players.len() < 2 {
        return Err(TrackerError::InsufficientPlayers);
    }

    let mut matches = Vec::with_capacity(players.len() * (players.len() - 1) / 2);
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            matches.push(GameMatch::new(
                championship_id,
                players[i].clone(),
                players[j].clone(),
                game,
            ));
        }
    }

    Ok(matches)
}
