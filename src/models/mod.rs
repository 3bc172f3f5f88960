//! Data structures for the score tracker: championships, players, matches.

mod championship;
mod game;
mod player;

pub use championship::{Championship, ChampionshipId, ChampionshipStatus, TrackerError};
pub use game::{GameMatch, MatchId, MatchStatus};
pub use player::{Player, PlayerId, Standing};
