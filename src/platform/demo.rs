//! Demo input feed
//!
//! Stands in for a live input surface: every `interval` ticks it bumps a
//! random player by +1 (or occasionally -1). Seeded, so a given seed always
//! produces the same sequence for the same roster.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::board::{Command, Roster};

/// Chance that a demo bump is an increment
const INCREMENT_CHANCE: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct DemoFeed {
    rng: Pcg32,
    interval: u64,
    countdown: u64,
}

impl DemoFeed {
    pub fn new(seed: u64, interval: u64) -> Self {
        let interval = interval.max(1);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            interval,
            countdown: interval,
        }
    }

    /// Command for this tick, if one is due
    pub fn next(&mut self, roster: &Roster) -> Option<Command> {
        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval;

        if roster.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..roster.len());
        let delta = if self.rng.random_bool(INCREMENT_CHANCE) {
            1.0
        } else {
            -1.0
        };
        let name = roster.players()[index].name.clone();
        Some(Command::bump(name, delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlayerRecord;

    fn roster() -> Roster {
        Roster::from_records(
            100.0,
            vec![
                PlayerRecord::new("A", 1.0, ""),
                PlayerRecord::new("B", 2.0, ""),
                PlayerRecord::new("C", 3.0, ""),
            ],
        )
    }

    #[test]
    fn test_fires_on_interval() {
        let roster = roster();
        let mut feed = DemoFeed::new(7, 3);
        let fired: Vec<bool> = (0..9).map(|_| feed.next(&roster).is_some()).collect();
        assert_eq!(
            fired,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn test_same_seed_same_commands() {
        let roster = roster();
        let mut a = DemoFeed::new(42, 1);
        let mut b = DemoFeed::new(42, 1);
        for _ in 0..50 {
            assert_eq!(a.next(&roster), b.next(&roster));
        }
    }

    #[test]
    fn test_empty_roster_is_quiet() {
        let mut feed = DemoFeed::new(1, 1);
        assert!(feed.next(&Roster::default()).is_none());
    }
}
