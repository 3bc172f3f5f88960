//! Championship score tracker: library with models, logic, and the store.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{compute_standings, generate_round_robin};
pub use models::{
    Championship, ChampionshipId, ChampionshipStatus, GameMatch, MatchId, MatchStatus, Player,
    PlayerId, Standing, TrackerError,
};
pub use store::Store;
