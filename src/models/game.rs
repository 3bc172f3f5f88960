//! Match and MatchStatus.

use crate::models::championship::ChampionshipId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = u32;

/// Lifecycle of a match. Transitions are pending -> started -> finished,
/// each gated on the previous state.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Started,
    Finished,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Started => write!(f, "started"),
            MatchStatus::Finished => write!(f, "finished"),
        }
    }
}

/// A single match between two players of a championship.
///
/// Participants are referenced by player name, not id. `winner` is `None`
/// until the match finishes, and stays `None` for a draw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub championship_id: ChampionshipId,
    pub player1: String,
    pub player2: String,
    /// Display label for what is being played (the championship name for
    /// generated matches).
    pub game: String,
    pub status: MatchStatus,
    pub player1_score: i32,
    pub player2_score: i32,
    pub winner: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl GameMatch {
    /// Create a new pending match at 0-0. The store assigns the real id at
    /// insert.
    pub fn new(
        championship_id: ChampionshipId,
        player1: impl Into<String>,
        player2: impl Into<String>,
        game: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            championship_id,
            player1: player1.into(),
            player2: player2.into(),
            game: game.into(),
            status: MatchStatus::Pending,
            player1_score: 0,
            player2_score: 0,
            winner: None,
            started_at: None,
            finished_at: None,
            created_at: Utc::now(),
        }
    }
}
