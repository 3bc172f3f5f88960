//! In-memory relational store: championships, players, matches, and the
//! player/championship join set.
//!
//! The binary wraps one `Store` in `web::Data<RwLock<_>>`; each request takes
//! a single guard, so a precondition check and the mutation it guards (e.g.
//! "no matches exist yet" before a bulk insert) are atomic per request.

use crate::logic::{compute_standings, generate_round_robin};
use crate::models::{
    Championship, ChampionshipId, ChampionshipStatus, GameMatch, MatchId, MatchStatus, Player,
    PlayerId, Standing, TrackerError,
};
use chrono::Utc;

/// All tracker state. IDs are 1-based and assigned at insert, per entity kind.
#[derive(Debug, Default)]
pub struct Store {
    championships: Vec<Championship>,
    players: Vec<Player>,
    matches: Vec<GameMatch>,
    /// Join set: (player_id, championship_id), in enrollment order. The
    /// enrollment order doubles as the roster order for standings tie-breaks.
    links: Vec<(PlayerId, ChampionshipId)>,
    next_championship_id: ChampionshipId,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Store {
    pub fn new() -> Self {
        Self {
            next_championship_id: 1,
            next_player_id: 1,
            next_match_id: 1,
            ..Self::default()
        }
    }

    // ---- championships ----

    /// Create a draft championship. Name must be non-empty.
    pub fn create_championship(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<Championship, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::NameRequired);
        }
        let mut championship = Championship::new(name, description);
        championship.id = self.next_championship_id;
        self.next_championship_id += 1;
        self.championships.push(championship.clone());
        Ok(championship)
    }

    /// All championships, newest first, without embedded relations.
    pub fn list_championships(&self) -> Vec<Championship> {
        self.championships.iter().rev().cloned().collect()
    }

    /// One championship with its players and matches embedded.
    pub fn get_championship(&self, id: ChampionshipId) -> Result<Championship, TrackerError> {
        let mut championship = self
            .championships
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(TrackerError::ChampionshipNotFound(id))?;
        championship.players = Some(self.players_of(id));
        championship.matches = Some(self.matches_of(id));
        Ok(championship)
    }

    /// Update name and/or description. Status is not updatable here:
    /// finalizing is one-way and goes through `finalize_championship`.
    pub fn update_championship(
        &mut self,
        id: ChampionshipId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Championship, TrackerError> {
        let championship = self
            .championships
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TrackerError::ChampionshipNotFound(id))?;
        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(TrackerError::NameRequired);
            }
            championship.name = name.to_string();
        }
        if let Some(description) = description {
            championship.description = description.to_string();
        }
        championship.updated_at = Utc::now();
        Ok(championship.clone())
    }

    /// Remove a championship and its join entries. Matches are kept: they are
    /// never deleted once created.
    pub fn delete_championship(&mut self, id: ChampionshipId) -> Result<(), TrackerError> {
        if !self.championships.iter().any(|c| c.id == id) {
            return Err(TrackerError::ChampionshipNotFound(id));
        }
        self.championships.retain(|c| c.id != id);
        self.links.retain(|&(_, cid)| cid != id);
        Ok(())
    }

    /// Finalize: one-way draft -> finalized, requires at least 2 linked
    /// players.
    pub fn finalize_championship(
        &mut self,
        id: ChampionshipId,
    ) -> Result<Championship, TrackerError> {
        let player_count = self.links.iter().filter(|&&(_, cid)| cid == id).count();
        let championship = self
            .championships
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TrackerError::ChampionshipNotFound(id))?;
        if championship.status == ChampionshipStatus::Finalized {
            return Err(TrackerError::AlreadyFinalized);
        }
        if player_count < 2 {
            return Err(TrackerError::InsufficientPlayers);
        }
        championship.status = ChampionshipStatus::Finalized;
        championship.updated_at = Utc::now();
        Ok(championship.clone())
    }

    /// Current ranking of a championship, from its finished matches.
    pub fn standings(&self, id: ChampionshipId) -> Result<Vec<Standing>, TrackerError> {
        if !self.championships.iter().any(|c| c.id == id) {
            return Err(TrackerError::ChampionshipNotFound(id));
        }
        let roster = self.roster_of(id);
        let matches = self.matches_of(id);
        compute_standings(&matches, &roster)
    }

    /// Generate the round robin for a finalized championship and persist it
    /// as one batch. Rejected if any match already exists for it.
    pub fn generate_matches(
        &mut self,
        id: ChampionshipId,
    ) -> Result<Vec<GameMatch>, TrackerError> {
        let championship = self
            .championships
            .iter()
            .find(|c| c.id == id)
            .ok_or(TrackerError::ChampionshipNotFound(id))?;
        if championship.status != ChampionshipStatus::Finalized {
            return Err(TrackerError::NotFinalized);
        }
        let roster = self.roster_of(id);
        if roster.len() < 2 {
            return Err(TrackerError::InsufficientPlayers);
        }
        if self.matches.iter().any(|m| m.championship_id == id) {
            return Err(TrackerError::AlreadyGenerated);
        }

        let game = championship.name.clone();
        let mut generated = generate_round_robin(&roster, id, &game)?;
        for m in &mut generated {
            m.id = self.next_match_id;
            self.next_match_id += 1;
        }
        self.matches.extend(generated.iter().cloned());
        Ok(generated)
    }

    // ---- players ----

    /// Create a player, optionally enrolling them in championships. All
    /// listed championships must exist. Names are unique labels.
    pub fn create_player(
        &mut self,
        name: &str,
        championship_ids: &[ChampionshipId],
    ) -> Result<Player, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::NameRequired);
        }
        if self.players.iter().any(|p| p.name == name) {
            return Err(TrackerError::DuplicatePlayerName);
        }
        for &cid in championship_ids {
            if !self.championships.iter().any(|c| c.id == cid) {
                return Err(TrackerError::ChampionshipNotFound(cid));
            }
        }
        let mut player = Player::new(name);
        player.id = self.next_player_id;
        self.next_player_id += 1;
        self.players.push(player.clone());
        for &cid in championship_ids {
            if !self.links.contains(&(player.id, cid)) {
                self.links.push((player.id, cid));
            }
        }
        self.get_player(player.id)
    }

    /// All players, newest first, with championships embedded. Optionally
    /// filtered to one championship's roster.
    pub fn list_players(&self, championship_id: Option<ChampionshipId>) -> Vec<Player> {
        self.players
            .iter()
            .rev()
            .filter(|p| match championship_id {
                Some(cid) => self.links.contains(&(p.id, cid)),
                None => true,
            })
            .map(|p| {
                let mut p = p.clone();
                p.championships = Some(self.championships_of(p.id));
                p
            })
            .collect()
    }

    /// One player with championships embedded.
    pub fn get_player(&self, id: PlayerId) -> Result<Player, TrackerError> {
        let mut player = self
            .players
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(TrackerError::PlayerNotFound(id))?;
        player.championships = Some(self.championships_of(id));
        Ok(player)
    }

    /// Update a player. When `championship_ids` is present (even empty) the
    /// join set is replaced wholesale.
    pub fn update_player(
        &mut self,
        id: PlayerId,
        name: Option<&str>,
        championship_ids: Option<&[ChampionshipId]>,
    ) -> Result<Player, TrackerError> {
        if !self.players.iter().any(|p| p.id == id) {
            return Err(TrackerError::PlayerNotFound(id));
        }
        if let Some(ids) = championship_ids {
            for &cid in ids {
                if !self.championships.iter().any(|c| c.id == cid) {
                    return Err(TrackerError::ChampionshipNotFound(cid));
                }
            }
        }
        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(TrackerError::NameRequired);
            }
            if self.players.iter().any(|p| p.id != id && p.name == name) {
                return Err(TrackerError::DuplicatePlayerName);
            }
            let player = self
                .players
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(TrackerError::PlayerNotFound(id))?;
            player.name = name.to_string();
            player.updated_at = Utc::now();
        }
        if let Some(ids) = championship_ids {
            self.links.retain(|&(pid, _)| pid != id);
            for &cid in ids {
                if !self.links.contains(&(id, cid)) {
                    self.links.push((id, cid));
                }
            }
            if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
                player.updated_at = Utc::now();
            }
        }
        self.get_player(id)
    }

    /// Remove a player and their join entries.
    pub fn delete_player(&mut self, id: PlayerId) -> Result<(), TrackerError> {
        if !self.players.iter().any(|p| p.id == id) {
            return Err(TrackerError::PlayerNotFound(id));
        }
        self.players.retain(|p| p.id != id);
        self.links.retain(|&(pid, _)| pid != id);
        Ok(())
    }

    // ---- matches ----

    /// Create a single match by hand (outside of bulk generation). Both
    /// participants must be distinct, existing players enrolled in the
    /// championship. `game` defaults to the championship name.
    pub fn create_match(
        &mut self,
        championship_id: ChampionshipId,
        player1: &str,
        player2: &str,
        game: Option<&str>,
    ) -> Result<GameMatch, TrackerError> {
        let championship = self
            .championships
            .iter()
            .find(|c| c.id == championship_id)
            .ok_or(TrackerError::ChampionshipNotFound(championship_id))?;
        if player1 == player2 {
            return Err(TrackerError::DistinctPlayersViolation);
        }
        for name in [player1, player2] {
            let player = self
                .players
                .iter()
                .find(|p| p.name == name)
                .ok_or_else(|| TrackerError::PlayerNameNotFound(name.to_string()))?;
            if !self.links.contains(&(player.id, championship_id)) {
                return Err(TrackerError::PlayerNotInChampionship(name.to_string()));
            }
        }
        let game = game.unwrap_or(&championship.name).to_string();
        let mut m = GameMatch::new(championship_id, player1, player2, game);
        m.id = self.next_match_id;
        self.next_match_id += 1;
        self.matches.push(m.clone());
        Ok(m)
    }

    /// All matches, newest first, optionally filtered by championship.
    pub fn list_matches(&self, championship_id: Option<ChampionshipId>) -> Vec<GameMatch> {
        self.matches
            .iter()
            .rev()
            .filter(|m| championship_id.map_or(true, |cid| m.championship_id == cid))
            .cloned()
            .collect()
    }

    pub fn get_match(&self, id: MatchId) -> Result<GameMatch, TrackerError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(TrackerError::MatchNotFound(id))
    }

    /// Start a pending match: stamps `started_at`.
    pub fn start_match(&mut self, id: MatchId) -> Result<GameMatch, TrackerError> {
        let m = self.get_match_mut(id)?;
        if m.status != MatchStatus::Pending {
            return Err(TrackerError::InvalidMatchStatus {
                required: MatchStatus::Pending,
            });
        }
        m.status = MatchStatus::Started;
        m.started_at = Some(Utc::now());
        Ok(m.clone())
    }

    /// Update the running score of a started match.
    pub fn update_match_score(
        &mut self,
        id: MatchId,
        player1_score: i32,
        player2_score: i32,
    ) -> Result<GameMatch, TrackerError> {
        let m = self.get_match_mut(id)?;
        if m.status != MatchStatus::Started {
            return Err(TrackerError::InvalidMatchStatus {
                required: MatchStatus::Started,
            });
        }
        m.player1_score = player1_score;
        m.player2_score = player2_score;
        Ok(m.clone())
    }

    /// Finish a started match: the winner is derived from the score, with an
    /// equal score recorded as a draw (`winner` stays `None`).
    pub fn finish_match(&mut self, id: MatchId) -> Result<GameMatch, TrackerError> {
        let m = self.get_match_mut(id)?;
        if m.status != MatchStatus::Started {
            return Err(TrackerError::InvalidMatchStatus {
                required: MatchStatus::Started,
            });
        }
        m.winner = if m.player1_score > m.player2_score {
            Some(m.player1.clone())
        } else if m.player2_score > m.player1_score {
            Some(m.player2.clone())
        } else {
            None
        };
        m.status = MatchStatus::Finished;
        m.finished_at = Some(Utc::now());
        Ok(m.clone())
    }

    // ---- helpers ----

    fn get_match_mut(&mut self, id: MatchId) -> Result<&mut GameMatch, TrackerError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(TrackerError::MatchNotFound(id))
    }

    /// Player names linked to a championship, in enrollment order.
    fn roster_of(&self, id: ChampionshipId) -> Vec<String> {
        self.links
            .iter()
            .filter(|&&(_, cid)| cid == id)
            .filter_map(|&(pid, _)| self.players.iter().find(|p| p.id == pid))
            .map(|p| p.name.clone())
            .collect()
    }

    /// Players linked to a championship, without back-embedded relations.
    fn players_of(&self, id: ChampionshipId) -> Vec<Player> {
        self.links
            .iter()
            .filter(|&&(_, cid)| cid == id)
            .filter_map(|&(pid, _)| self.players.iter().find(|p| p.id == pid))
            .cloned()
            .collect()
    }

    fn matches_of(&self, id: ChampionshipId) -> Vec<GameMatch> {
        self.matches
            .iter()
            .filter(|m| m.championship_id == id)
            .cloned()
            .collect()
    }

    /// Championships a player is enrolled in, without embedded relations.
    fn championships_of(&self, id: PlayerId) -> Vec<Championship> {
        self.links
            .iter()
            .filter(|&&(pid, _)| pid == id)
            .filter_map(|&(_, cid)| self.championships.iter().find(|c| c.id == cid))
            .cloned()
            .collect()
    }
}
