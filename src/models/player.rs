//! Player and Standing data structures.

use crate::models::championship::Championship;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a player.
pub type PlayerId = u32;

/// A player. The name doubles as the display label that matches reference
/// their participants by, so it must stay unique.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Championships this player is enrolled in; embedded on reads, omitted
    /// when the player is itself embedded inside a championship.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub championships: Option<Vec<Championship>>,
}

impl Player {
    /// Create a new player. The store assigns the real id at insert.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: name.into(),
            created_at: now,
            updated_at: now,
            championships: None,
        }
    }
}

/// One row of a championship's ranking: player name plus aggregated points.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_name: String,
    pub points: i32,
}
