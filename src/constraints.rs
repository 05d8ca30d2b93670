//! League rules and the pure predicates that check them.
//!
//! These are the strict rules the heuristics maintain at every step. The
//! post-hoc [`validator`](crate::validator) applies a looser club rule and
//! must not be confused with this module.

use std::collections::{HashMap, HashSet};

use crate::budget::Budget;
use crate::catalog::{Player, Position};
use crate::error::{DraftError, Result};

/// Spending cap for a full squad, in currency units.
pub const MAX_BUDGET: f64 = 100.0;

pub const SQUAD_SIZE: usize = 15;
pub const STARTING_SIZE: usize = 11;
pub const BENCH_SIZE: usize = 4;

/// Maximum number of players a squad may hold from one club.
pub const MAX_PER_CLUB: usize = 2;

/// Required number of players at `position` in a full squad.
pub fn squad_quota(position: Position) -> usize {
    match position {
        Position::Goalkeeper => 2,
        Position::Defender => 5,
        Position::Midfielder => 5,
        Position::Forward => 3,
    }
}

/// Inclusive `(min, max)` count of `position` in a starting eleven.
pub fn formation_bounds(position: Position) -> (usize, usize) {
    match position {
        Position::Goalkeeper => (1, 1),
        Position::Defender => (3, 5),
        Position::Midfielder => (2, 5),
        Position::Forward => (1, 3),
    }
}

/// Number of players in `players` belonging to `club`.
pub fn club_count<'a>(players: impl IntoIterator<Item = &'a Player>, club: &str) -> usize {
    players.into_iter().filter(|p| p.club() == club).count()
}

/// Whether one more player from `club` may join `selected`.
///
/// Call before adding the candidate.
pub fn club_ok<'a>(selected: impl IntoIterator<Item = &'a Player>, club: &str) -> bool {
    club_count(selected, club) < MAX_PER_CLUB
}

/// Player count per position, indexed by [`Position::index`].
pub fn position_counts<'a>(players: impl IntoIterator<Item = &'a Player>) -> [usize; 4] {
    let mut counts = [0; 4];
    for p in players {
        counts[p.position().index()] += 1;
    }
    counts
}

/// Checks the GK2/DEF5/MID5/FW3 squad quotas.
pub fn check_squad_quotas<'a>(players: impl IntoIterator<Item = &'a Player>) -> Result<()> {
    let counts = position_counts(players);
    for position in Position::ALL {
        let expected = squad_quota(position);
        let found = counts[position.index()];
        if found != expected {
            return Err(DraftError::QuotaMismatch {
                position,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Whether `starting` is a legal eleven (1 GK, 3-5 DEF, 2-5 MID, 1-3 FW).
pub fn formation_ok(starting: &[&Player]) -> bool {
    if starting.len() != STARTING_SIZE {
        return false;
    }
    let counts = position_counts(starting.iter().copied());
    Position::ALL.iter().all(|&pos| {
        let (min, max) = formation_bounds(pos);
        (min..=max).contains(&counts[pos.index()])
    })
}

/// Checks every squad invariant the heuristics maintain.
///
/// Fifteen distinct players split 11 + 4, squad quotas, club cap, spend
/// within [`MAX_BUDGET`] and a legal starting formation.
pub fn is_feasible(starting: &[&Player], bench: &[&Player]) -> bool {
    if starting.len() != STARTING_SIZE || bench.len() != BENCH_SIZE {
        return false;
    }
    let all: Vec<&Player> = starting.iter().chain(bench).copied().collect();

    let ids: HashSet<_> = all.iter().map(|p| p.id()).collect();
    if ids.len() != SQUAD_SIZE {
        return false;
    }
    if check_squad_quotas(all.iter().copied()).is_err() {
        return false;
    }

    let mut per_club: HashMap<&str, usize> = HashMap::new();
    for p in &all {
        *per_club.entry(p.club()).or_default() += 1;
    }
    if per_club.values().any(|&n| n > MAX_PER_CLUB) {
        return false;
    }

    !Budget::after_spending(MAX_BUDGET, all.iter().copied()).is_overdrawn() && formation_ok(starting)
}
