//! Per-position ranking of the catalog.
//!
//! Improvement heuristics treat a player's neighbours in this ranking as
//! its natural replacements. The index borrows the catalog and never
//! reorders it, so rank positions are stable for the index's lifetime.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::catalog::{Player, PlayerId, Position};

/// Ranking key: points descending, then price ascending, then ID ascending.
///
/// The ID tie-break makes the order total, so every consumer sees the same
/// sequence regardless of input order.
pub fn ranking_order(a: &Player, b: &Player) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| a.cost().cmp(&b.cost()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Players grouped by position and sorted by [`ranking_order`].
#[derive(Debug, Clone)]
pub struct PositionIndex<'a> {
    lists: [Vec<&'a Player>; 4],
    ranks: HashMap<PlayerId, usize>,
}

impl<'a> PositionIndex<'a> {
    /// Derives the index without touching `players`.
    pub fn new(players: &'a [Player]) -> Self {
        let mut lists: [Vec<&'a Player>; 4] = Default::default();
        for p in players {
            lists[p.position().index()].push(p);
        }

        let mut ranks = HashMap::with_capacity(players.len());
        for list in &mut lists {
            list.sort_by(|a, b| ranking_order(a, b));
            for (rank, p) in list.iter().enumerate() {
                ranks.insert(p.id(), rank);
            }
        }

        Self { lists, ranks }
    }

    /// Ranked players for `position`.
    pub fn players(&self, position: Position) -> &[&'a Player] {
        &self.lists[position.index()]
    }

    /// Rank of `player` within its position, if it is indexed.
    pub fn rank_of(&self, player: &Player) -> Option<usize> {
        let rank = *self.ranks.get(&player.id())?;
        let list = self.players(player.position());
        (list.get(rank)?.id() == player.id()).then_some(rank)
    }

    /// Same-position players scoring strictly more points than `player`,
    /// best first.
    pub fn better_than(&self, player: &Player) -> &[&'a Player] {
        let list = self.players(player.position());
        let end = list.partition_point(|q| q.points() > player.points());
        &list[..end]
    }

    /// Ranked entries within `radius` of `player`, inclusive and clamped
    /// to the list bounds. Contains `player` itself.
    pub fn window(&self, player: &Player, radius: usize) -> &[&'a Player] {
        let Some(rank) = self.rank_of(player) else {
            return &[];
        };
        let list = self.players(player.position());
        let lo = rank.saturating_sub(radius);
        let hi = (rank + radius).min(list.len() - 1);
        &list[lo..=hi]
    }
}
