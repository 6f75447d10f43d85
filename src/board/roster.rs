//! The roster: single source of truth for score data
//!
//! Order is load order. The roster is replaced wholesale on reload and
//! mutated in place on a bump; the core never deletes individual players.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerRecord};
use crate::consts::FINISH_LINE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    /// Score that maps to progress 1.0; fixed for the roster's lifetime
    finish_line: f64,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(FINISH_LINE)
    }
}

impl Roster {
    /// Create an empty roster with the given finish line
    pub fn new(finish_line: f64) -> Self {
        Self {
            players: Vec::new(),
            finish_line,
        }
    }

    /// Build a roster directly from records
    pub fn from_records<I>(finish_line: f64, records: I) -> Self
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        let mut roster = Self::new(finish_line);
        roster.load(records);
        roster
    }

    pub fn finish_line(&self) -> f64 {
        self.finish_line
    }

    /// Replace every player with fresh instances built from `records`.
    ///
    /// Blank names are dropped, unparsable scores become 0, and a repeated
    /// name replaces the earlier record. Never fails.
    pub fn load<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        let mut players: Vec<Player> = Vec::new();
        let mut dropped = 0usize;

        for record in records {
            let name = record.name.trim();
            if name.is_empty() {
                dropped += 1;
                continue;
            }
            if let Some(pos) = players.iter().position(|p| p.name == name) {
                log::warn!("Duplicate player '{}' in roster, keeping the later record", name);
                players.remove(pos);
            }
            players.push(Player::new(
                name,
                record.score.value(),
                record.avatar_ref.trim(),
            ));
        }

        if dropped > 0 {
            log::debug!("Dropped {} roster record(s) with a blank name", dropped);
        }

        self.players = players;
        self.recompute_targets();
        log::info!("Loaded {} players", self.players.len());
    }

    /// Add `delta` to the named player's score, clamping at 0.
    ///
    /// Returns false (and changes nothing) when no player matches.
    pub fn bump(&mut self, name: &str, delta: f64) -> bool {
        let name = name.trim();
        let Some(player) = self.players.iter_mut().find(|p| p.name == name) else {
            log::debug!("Ignoring bump for unknown player '{}'", name);
            return false;
        };

        let next = player.score + delta;
        player.score = if next.is_finite() { next.max(0.0) } else { player.score };
        log::debug!("{} -> {}", player.name, player.score);
        self.recompute_targets();
        true
    }

    /// Recompute every player's progress target from its score
    pub fn recompute_targets(&mut self) {
        let finish_line = self.finish_line;
        for player in &mut self.players {
            player.retarget(finish_line);
        }
    }

    /// Send every racer back to the start line
    pub fn reset_progress(&mut self) {
        for player in &mut self.players {
            super::progress::reset(player);
        }
    }

    /// Records in roster order, for persisting
    pub fn records(&self) -> Vec<PlayerRecord> {
        self.players.iter().map(Player::to_record).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players.iter().find(|p| p.name == name)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
