//! Fixed-point budget accounting.
//!
//! Prices are real-valued in the catalog but every heuristic tracks the
//! remaining funds in hundredths of a unit. Repeated add/remove cycles
//! therefore cannot drift, and "fits under budget" is an exact integer
//! comparison.
//!
//! Prices round up to the next hundredth and caps round down, so a squad
//! that fits in units never spends more than the cap in real terms.

use crate::catalog::Player;

/// Number of budget units per currency unit.
pub const UNITS_PER_CURRENCY: i64 = 100;

/// Slack absorbing binary representation error, e.g. `1.1 * 100.0`.
const UNIT_EPSILON: f64 = 1e-6;

/// Converts a price to fixed-point budget units, rounding any fraction of
/// a unit up.
pub fn to_units(price: f64) -> i64 {
    (price * UNITS_PER_CURRENCY as f64 - UNIT_EPSILON).ceil() as i64
}

/// Converts a spending cap to fixed-point budget units, rounding any
/// fraction of a unit down.
pub fn cap_units(amount: f64) -> i64 {
    (amount * UNITS_PER_CURRENCY as f64 + UNIT_EPSILON).floor() as i64
}

/// Remaining funds for a squad under construction or improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget {
    remaining: i64,
}

impl Budget {
    /// Creates a budget holding `amount` currency units.
    pub fn new(amount: f64) -> Self {
        Self {
            remaining: cap_units(amount),
        }
    }

    /// Budget left after buying `players` out of `cap`.
    pub fn after_spending<'a>(cap: f64, players: impl IntoIterator<Item = &'a Player>) -> Self {
        let spent: i64 = players.into_iter().map(Player::cost).sum();
        Self {
            remaining: cap_units(cap) - spent,
        }
    }

    /// Remaining funds in currency units.
    pub fn remaining(&self) -> f64 {
        self.remaining as f64 / UNITS_PER_CURRENCY as f64
    }

    /// Remaining funds in fixed-point units.
    pub fn remaining_units(&self) -> i64 {
        self.remaining
    }

    pub fn can_afford(&self, player: &Player) -> bool {
        player.cost() <= self.remaining
    }

    /// Whether `incoming` can replace `outgoing` without overspending.
    pub fn can_swap(&self, outgoing: &Player, incoming: &Player) -> bool {
        self.remaining + outgoing.cost() >= incoming.cost()
    }

    pub fn charge(&mut self, player: &Player) {
        self.remaining -= player.cost();
    }

    pub fn refund(&mut self, player: &Player) {
        self.remaining += player.cost();
    }

    /// Refunds `outgoing` and charges `incoming`.
    pub fn swap(&mut self, outgoing: &Player, incoming: &Player) {
        self.remaining += outgoing.cost() - incoming.cost();
    }

    pub fn is_overdrawn(&self) -> bool {
        self.remaining < 0
    }
}
