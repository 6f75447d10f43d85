//! Leaderboard ordering
//!
//! Highest score first, ties broken by case-insensitive name. The sort is
//! stable, so exact duplicates keep roster order.

use std::cmp::Ordering;

use super::player::Player;
use super::roster::Roster;

/// Compare two players for leaderboard order
pub fn leaderboard_order(a: &Player, b: &Player) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Players sorted for the leaderboard; never mutates the roster
pub fn rank(roster: &Roster) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = roster.iter().collect();
    sorted.sort_by(|a, b| leaderboard_order(a, b));
    sorted
}

/// Sorted players paired with their 1-based rank
pub fn rank_positions(roster: &Roster) -> Vec<(usize, &Player)> {
    rank(roster)
        .into_iter()
        .enumerate()
        .map(|(i, p)| (i + 1, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PlayerRecord;
    use proptest::prelude::*;

    fn names<'a>(players: &[&'a Player]) -> Vec<&'a str> {
        players.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_rank_scenario() {
        let roster = Roster::from_records(
            100.0,
            vec![
                PlayerRecord::new("A", 40.0, ""),
                PlayerRecord::new("B", 40.0, ""),
                PlayerRecord::new("C", 90.0, ""),
            ],
        );
        assert_eq!(names(&rank(&roster)), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_tie_break_ignores_case() {
        let roster = Roster::from_records(
            100.0,
            vec![
                PlayerRecord::new("bob", 10.0, ""),
                PlayerRecord::new("Alice", 10.0, ""),
                PlayerRecord::new("carl", 10.0, ""),
                PlayerRecord::new("Ben", 10.0, ""),
            ],
        );
        assert_eq!(names(&rank(&roster)), vec!["Alice", "Ben", "bob", "carl"]);
    }

    #[test]
    fn test_case_only_duplicates_keep_roster_order() {
        let roster = Roster::from_records(
            100.0,
            vec![
                PlayerRecord::new("sam", 5.0, ""),
                PlayerRecord::new("Sam", 5.0, ""),
                PlayerRecord::new("SAM", 5.0, ""),
            ],
        );
        assert_eq!(names(&rank(&roster)), vec!["sam", "Sam", "SAM"]);
    }

    #[test]
    fn test_rank_positions_are_one_based() {
        let roster = Roster::from_records(
            100.0,
            vec![PlayerRecord::new("A", 1.0, ""), PlayerRecord::new("B", 2.0, "")],
        );
        let positions: Vec<(usize, &str)> = rank_positions(&roster)
            .into_iter()
            .map(|(r, p)| (r, p.name.as_str()))
            .collect();
        assert_eq!(positions, vec![(1, "B"), (2, "A")]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&Roster::default()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_rank_sorted_and_idempotent(
            entries in proptest::collection::vec(("[a-dA-D]{1,3}", 0u32..20), 0..24)
        ) {
            let roster = Roster::from_records(
                100.0,
                entries.iter().map(|(n, s)| PlayerRecord::new(n.as_str(), *s as f64, "")),
            );
            let first = rank(&roster);
            let second = rank(&roster);
            prop_assert_eq!(names(&first), names(&second));
            prop_assert_eq!(first.len(), roster.len());

            for pair in first.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.score >= b.score);
                if a.score == b.score {
                    prop_assert!(a.name.to_lowercase() <= b.name.to_lowercase());
                }
            }

            // Equal keys keep roster order
            let index_of = |p: &Player| roster.iter().position(|q| q.name == p.name).unwrap();
            for pair in first.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if leaderboard_order(a, b) == Ordering::Equal {
                    prop_assert!(index_of(a) < index_of(b));
                }
            }
        }
    }
}
