//! A drafted squad: starting eleven, bench and remaining budget.

use crate::budget::Budget;
use crate::catalog::{Player, PlayerId};
use crate::constraints;
use crate::solution::Solution;

/// Fifteen players borrowed from a catalog, split 11 + 4, together with
/// the funds left after buying them.
#[derive(Debug, Clone, PartialEq)]
pub struct Squad<'a> {
    pub starting: Vec<&'a Player>,
    pub bench: Vec<&'a Player>,
    pub budget: Budget,
}

impl<'a> Squad<'a> {
    pub fn new(starting: Vec<&'a Player>, bench: Vec<&'a Player>, budget: Budget) -> Self {
        Self {
            starting,
            bench,
            budget,
        }
    }

    /// Points scored by the starting eleven. The bench does not score.
    pub fn score(&self) -> i64 {
        score(&self.starting)
    }

    /// All fifteen players, starters first.
    pub fn players(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.starting.iter().chain(&self.bench).copied()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players().any(|p| p.id() == id)
    }

    /// Total price of all fifteen players.
    pub fn total_price(&self) -> f64 {
        self.players().map(Player::price).sum()
    }

    /// Whether every squad invariant holds.
    pub fn is_feasible(&self) -> bool {
        constraints::is_feasible(&self.starting, &self.bench)
    }

    pub fn to_solution(&self) -> Solution {
        Solution {
            starting: self.starting.iter().map(|p| p.id()).collect(),
            bench: self.bench.iter().map(|p| p.id()).collect(),
        }
    }
}

/// Sum of points over `players`.
pub fn score(players: &[&Player]) -> i64 {
    players.iter().map(|p| i64::from(p.points())).sum()
}

/// Whether `candidate` may replace `incumbent` in `squad` under the club cap.
///
/// A same-club swap leaves every club count unchanged and is always allowed.
pub(crate) fn club_allows_swap<'a>(
    squad: impl IntoIterator<Item = &'a Player>,
    incumbent: &Player,
    candidate: &Player,
) -> bool {
    incumbent.club() == candidate.club() || constraints::club_ok(squad, candidate.club())
}
