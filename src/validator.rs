//! Post-hoc solution validator.
//!
//! Recomputes price and score of a submitted solution straight from the
//! catalog and lists every rule it breaks. It is intentionally independent
//! of [`constraints`](crate::constraints) and applies a looser club rule:
//! a club is only reported once it has more than
//! [`VALIDATOR_MAX_PER_CLUB`] players, while the heuristics never exceed
//! [`MAX_PER_CLUB`](crate::constraints::MAX_PER_CLUB).

use std::collections::BTreeMap;
use std::fmt;

use crate::budget::cap_units;
use crate::catalog::{Catalog, PlayerId, Position};
use crate::constraints::{formation_bounds, squad_quota, BENCH_SIZE, MAX_BUDGET, STARTING_SIZE};
use crate::solution::Solution;

/// Most players per club the validator accepts.
pub const VALIDATOR_MAX_PER_CLUB: usize = 3;

/// A broken rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    UnknownPlayer(PlayerId),
    StartingSize { found: usize },
    BenchSize { found: usize },
    OverBudget { price: f64 },
    ClubOverLimit { club: String, count: usize },
    StartingPosition { position: Position, count: usize },
    BenchGoalkeepers { count: usize },
    SquadPosition { position: Position, count: usize },
}

fn position_name(position: Position) -> &'static str {
    match position {
        Position::Goalkeeper => "goalkeepers",
        Position::Defender => "defenders",
        Position::Midfielder => "midfielders",
        Position::Forward => "forwards",
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownPlayer(id) => write!(f, "Unknown player {id}"),
            Violation::StartingSize { found } => {
                write!(f, "Wrong number of players in the first team ({found})")
            }
            Violation::BenchSize { found } => {
                write!(f, "Wrong number of players on the bench ({found})")
            }
            Violation::OverBudget { price } => write!(f, "Over the budget ({price:.1})"),
            Violation::ClubOverLimit { club, count } => {
                write!(f, "Too many players from {club} ({count})")
            }
            Violation::StartingPosition { position, count } => write!(
                f,
                "Wrong number of {} in the first team ({count})",
                position_name(*position)
            ),
            Violation::BenchGoalkeepers { count } => {
                write!(f, "Wrong number of goalkeepers on the bench ({count})")
            }
            Violation::SquadPosition { position, count } => write!(
                f,
                "Wrong number of {} in the 15-player squad ({count})",
                position_name(*position)
            ),
        }
    }
}

/// Outcome of validating one solution.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Total price of all listed players.
    pub price: f64,
    /// Points of the starting eleven.
    pub score: i64,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.violations {
            writeln!(f, "{v}")?;
        }
        writeln!(f, "Price: {:.1}", self.price)?;
        write!(f, "Score: {}", self.score)
    }
}

/// Checks `solution` against the league rules using `catalog` data.
pub fn validate(catalog: &Catalog, solution: &Solution) -> ValidationReport {
    let mut violations = Vec::new();
    let mut price_units = 0i64;
    let mut price = 0.0;
    let mut score = 0i64;
    let mut clubs: BTreeMap<&str, usize> = BTreeMap::new();
    let mut starting_counts = [0usize; 4];
    let mut bench_counts = [0usize; 4];

    for (ids, counts, scores) in [
        (&solution.starting, &mut starting_counts, true),
        (&solution.bench, &mut bench_counts, false),
    ] {
        for &id in ids {
            let Some(player) = catalog.get(id) else {
                violations.push(Violation::UnknownPlayer(id));
                continue;
            };
            price += player.price();
            price_units += player.cost();
            if scores {
                score += i64::from(player.points());
            }
            *clubs.entry(player.club()).or_default() += 1;
            counts[player.position().index()] += 1;
        }
    }

    if solution.starting.len() != STARTING_SIZE {
        violations.push(Violation::StartingSize {
            found: solution.starting.len(),
        });
    }
    if solution.bench.len() != BENCH_SIZE {
        violations.push(Violation::BenchSize {
            found: solution.bench.len(),
        });
    }
    if price_units > cap_units(MAX_BUDGET) {
        violations.push(Violation::OverBudget { price });
    }
    for (club, &count) in &clubs {
        if count > VALIDATOR_MAX_PER_CLUB {
            violations.push(Violation::ClubOverLimit {
                club: club.to_string(),
                count,
            });
        }
    }
    for position in Position::ALL {
        let count = starting_counts[position.index()];
        let (min, max) = formation_bounds(position);
        if !(min..=max).contains(&count) {
            violations.push(Violation::StartingPosition { position, count });
        }
    }
    let bench_keepers = bench_counts[Position::Goalkeeper.index()];
    if bench_keepers != 1 {
        violations.push(Violation::BenchGoalkeepers {
            count: bench_keepers,
        });
    }
    for position in Position::ALL {
        let count = starting_counts[position.index()] + bench_counts[position.index()];
        if count != squad_quota(position) {
            violations.push(Violation::SquadPosition { position, count });
        }
    }

    ValidationReport {
        price,
        score,
        violations,
    }
}
