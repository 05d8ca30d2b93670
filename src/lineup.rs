//! Starting-eleven selection.
//!
//! Splits a complete squad into eleven starters and four substitutes by
//! forced inclusion, in this order:
//!
//! 1. the better of the two goalkeepers starts, the other is benched;
//! 2. the best forward starts;
//! 3. the best three defenders start;
//! 4. the six best remaining players start, whatever their position.
//!
//! Everything else goes to the bench. With squad quotas GK2/DEF5/MID5/FW3
//! this always yields a legal formation; the result is checked anyway.

use crate::budget::Budget;
use crate::catalog::{Player, Position};
use crate::constraints::{self, BENCH_SIZE, STARTING_SIZE};
use crate::error::Result;
use crate::index::ranking_order;
use crate::squad::Squad;

/// Number of defenders forced into the eleven.
const FORCED_DEFENDERS: usize = 3;

/// Splits `selected` into starters and bench.
///
/// # Errors
///
/// Returns [`DraftError::QuotaMismatch`](crate::DraftError::QuotaMismatch)
/// if `selected` does not meet the squad quotas.
///
/// # Panics
///
/// Panics if the split is not a legal formation, which quota-satisfying
/// input cannot produce.
pub fn select_starting_11<'a>(selected: &[&'a Player], budget: Budget) -> Result<Squad<'a>> {
    constraints::check_squad_quotas(selected.iter().copied())?;

    let mut ranked: Vec<&'a Player> = selected.to_vec();
    ranked.sort_by(|a, b| ranking_order(a, b));

    let mut starting = Vec::with_capacity(STARTING_SIZE);
    let mut bench = Vec::with_capacity(BENCH_SIZE);

    let mut keepers = ranked.iter().filter(|p| p.position() == Position::Goalkeeper);
    starting.extend(keepers.next().copied());
    bench.extend(keepers.copied());

    starting.extend(
        ranked
            .iter()
            .filter(|p| p.position() == Position::Forward)
            .take(1)
            .copied(),
    );
    starting.extend(
        ranked
            .iter()
            .filter(|p| p.position() == Position::Defender)
            .take(FORCED_DEFENDERS)
            .copied(),
    );

    let forced = starting.clone();
    let mut rest = ranked
        .iter()
        .filter(|p| p.position() != Position::Goalkeeper && !forced.contains(*p))
        .copied();
    starting.extend(rest.by_ref().take(STARTING_SIZE - forced.len()));
    bench.extend(rest);

    assert!(
        constraints::formation_ok(&starting) && bench.len() == BENCH_SIZE,
        "lineup selection produced an illegal formation"
    );

    Ok(Squad::new(starting, bench, budget))
}
