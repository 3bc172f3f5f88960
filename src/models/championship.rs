//! Championship and the shared error type.

use crate::models::game::{GameMatch, MatchId, MatchStatus};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a championship.
pub type ChampionshipId = u32;

/// Errors that can occur during tracker operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrackerError {
    /// Fewer than 2 players available (finalize or match generation).
    InsufficientPlayers,
    /// The championship already has generated matches.
    AlreadyGenerated,
    /// A finished match records a winner that is neither participant.
    InvalidWinner { winner: String },
    /// A match's two participants are the same name.
    DistinctPlayersViolation,
    /// Championship name (or player name) missing or empty.
    NameRequired,
    /// Championship is already finalized.
    AlreadyFinalized,
    /// Championship must be finalized before generating matches.
    NotFinalized,
    /// A player with this name already exists (names are unique labels).
    DuplicatePlayerName,
    ChampionshipNotFound(ChampionshipId),
    PlayerNotFound(PlayerId),
    /// A match participant name does not match any known player.
    PlayerNameNotFound(String),
    /// A match participant is not linked to the match's championship.
    PlayerNotInChampionship(String),
    MatchNotFound(MatchId),
    /// The match is not in the status this transition requires.
    InvalidMatchStatus { required: MatchStatus },
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::InsufficientPlayers => {
                write!(f, "At least 2 players are required")
            }
            TrackerError::AlreadyGenerated => {
                write!(f, "Matches already exist for this championship")
            }
            TrackerError::InvalidWinner { winner } => {
                write!(f, "Recorded winner '{}' is not a participant of the match", winner)
            }
            TrackerError::DistinctPlayersViolation => write!(f, "Players must be different"),
            TrackerError::NameRequired => write!(f, "Name is required"),
            TrackerError::AlreadyFinalized => write!(f, "Championship is already finalized"),
            TrackerError::NotFinalized => {
                write!(f, "Championship must be finalized before generating matches")
            }
            TrackerError::DuplicatePlayerName => {
                write!(f, "A player with this name already exists")
            }
            TrackerError::ChampionshipNotFound(_) => write!(f, "Championship not found"),
            TrackerError::PlayerNotFound(_) => write!(f, "Player not found"),
            TrackerError::PlayerNameNotFound(name) => write!(f, "Player '{}' not found", name),
            TrackerError::PlayerNotInChampionship(name) => {
                write!(f, "Player '{}' is not in this championship", name)
            }
            TrackerError::MatchNotFound(_) => write!(f, "Match not found"),
            TrackerError::InvalidMatchStatus { required } => {
                write!(f, "Match must be in {} status for this action", required)
            }
        }
    }
}

/// Lifecycle of a championship. Finalizing is one-way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionshipStatus {
    /// Roster still open; players can be added and removed.
    #[default]
    Draft,
    /// Roster locked; matches can be generated.
    Finalized,
}

/// A championship: a named round-robin competition over a player roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    pub id: ChampionshipId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ChampionshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Linked players; embedded on single-entity reads, omitted on lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
    /// Matches of this championship; embedded on single-entity reads only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<GameMatch>>,
}

impl Championship {
    /// Create a new draft championship. The store assigns the real id at insert.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            status: ChampionshipStatus::Draft,
            created_at: now,
            updated_at: now,
            players: None,
            matches: None,
        }
    }
}
