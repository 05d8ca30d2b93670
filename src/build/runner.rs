//! Constructive heuristic implementations.

use std::cmp::Reverse;
use std::collections::HashSet;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::BuildConfig;
use crate::budget::Budget;
use crate::catalog::{Player, PlayerId, Position};
use crate::constraints::{self, BENCH_SIZE, MAX_BUDGET, SQUAD_SIZE};
use crate::error::{DraftError, Result};
use crate::index::ranking_order;
use crate::lineup::select_starting_11;
use crate::squad::Squad;

/// Result of a construction run.
#[derive(Debug, Clone)]
pub struct BuildResult<'a> {
    /// The constructed squad, split into starters and bench.
    pub squad: Squad<'a>,

    /// Number of scans over the player pool.
    pub passes: usize,

    /// Number of picks evicted to make room for a candidate.
    pub evictions: usize,
}

/// Builds an initial squad from a player pool.
pub struct SquadBuilder;

impl SquadBuilder {
    /// Random construction.
    ///
    /// Shuffles the pool with `rng` and scans it repeatedly. An eligible
    /// candidate that fits the budget is drafted; one that does not causes
    /// the most expensive current pick to be sold instead.
    ///
    /// # Errors
    ///
    /// [`DraftError::PoolExhausted`] if fifteen players are not selected
    /// within `config.max_passes` scans.
    pub fn random<'a, R: Rng>(
        players: &'a [Player],
        config: &BuildConfig,
        rng: &mut R,
    ) -> Result<BuildResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;

        let mut pool: Vec<&'a Player> = players.iter().collect();
        pool.shuffle(rng);

        let mut selection = Selection::new();
        let mut passes = 0;
        let mut evictions = 0;

        while selection.len() < SQUAD_SIZE {
            if passes == config.max_passes {
                return Err(DraftError::PoolExhausted {
                    selected: selection.len(),
                    passes,
                });
            }
            passes += 1;

            for &player in &pool {
                if selection.len() == SQUAD_SIZE {
                    break;
                }
                if !selection.is_eligible(player) {
                    continue;
                }
                if selection.budget.can_afford(player) {
                    selection.add(player);
                } else if selection.evict_most_expensive().is_some() {
                    evictions += 1;
                }
            }
        }

        debug!("random construction: {passes} passes, {evictions} evictions");
        selection.finish(passes, evictions)
    }

    /// Greedy construction.
    ///
    /// Phase one drafts the four cheapest legal substitutes, exactly one of
    /// them a goalkeeper. Phase two scans the pool once by ranking (points
    /// descending, price ascending) and drafts every eligible player,
    /// selling the most expensive pick first when a candidate does not fit.
    ///
    /// # Errors
    ///
    /// [`DraftError::PoolExhausted`] if either phase runs out of candidates.
    pub fn greedy<'a>(players: &'a [Player], config: &BuildConfig) -> Result<BuildResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;

        let mut pool: Vec<&'a Player> = players.iter().collect();
        pool.sort_by_key(|p| (p.cost(), p.id()));

        let mut selection = Selection::new();
        for &player in &pool {
            if selection.len() == BENCH_SIZE {
                break;
            }
            if !selection.club_ok(player) {
                continue;
            }
            let keepers = selection.count(Position::Goalkeeper);
            let admit = if player.position() == Position::Goalkeeper {
                keepers < 1
            } else {
                selection.len() < BENCH_SIZE - 1 + keepers
            };
            if admit {
                selection.add(player);
            }
        }
        if selection.len() < BENCH_SIZE {
            return Err(DraftError::PoolExhausted {
                selected: selection.len(),
                passes: 1,
            });
        }

        pool.sort_by(|a, b| ranking_order(a, b));
        let mut evictions = 0;
        for &player in &pool {
            if selection.len() == SQUAD_SIZE {
                break;
            }
            if !selection.is_eligible(player) {
                continue;
            }
            if !selection.budget.can_afford(player) && selection.evict_most_expensive().is_some() {
                evictions += 1;
            }
            if selection.budget.can_afford(player) {
                selection.add(player);
            }
        }
        if selection.len() < SQUAD_SIZE {
            return Err(DraftError::PoolExhausted {
                selected: selection.len(),
                passes: 2,
            });
        }

        debug!("greedy construction: {evictions} evictions");
        selection.finish(2, evictions)
    }
}

/// Incremental squad state shared by both constructors.
struct Selection<'a> {
    chosen: Vec<&'a Player>,
    ids: HashSet<PlayerId>,
    counts: [usize; 4],
    budget: Budget,
}

impl<'a> Selection<'a> {
    fn new() -> Self {
        Self {
            chosen: Vec::with_capacity(SQUAD_SIZE),
            ids: HashSet::with_capacity(SQUAD_SIZE),
            counts: [0; 4],
            budget: Budget::new(MAX_BUDGET),
        }
    }

    fn len(&self) -> usize {
        self.chosen.len()
    }

    fn count(&self, position: Position) -> usize {
        self.counts[position.index()]
    }

    fn club_ok(&self, player: &Player) -> bool {
        constraints::club_ok(self.chosen.iter().copied(), player.club())
    }

    /// Not yet drafted, position quota open and club below the cap.
    fn is_eligible(&self, player: &Player) -> bool {
        !self.ids.contains(&player.id())
            && self.count(player.position()) < constraints::squad_quota(player.position())
            && self.club_ok(player)
    }

    fn add(&mut self, player: &'a Player) {
        self.chosen.push(player);
        self.ids.insert(player.id());
        self.counts[player.position().index()] += 1;
        self.budget.charge(player);
    }

    /// Sells the most expensive pick, lowest ID first on ties.
    fn evict_most_expensive(&mut self) -> Option<&'a Player> {
        let (i, _) = self
            .chosen
            .iter()
            .enumerate()
            .max_by_key(|(_, p)| (p.cost(), Reverse(p.id())))?;
        let player = self.chosen.swap_remove(i);
        self.ids.remove(&player.id());
        self.counts[player.position().index()] -= 1;
        self.budget.refund(player);
        Some(player)
    }

    fn finish(self, passes: usize, evictions: usize) -> Result<BuildResult<'a>> {
        let squad = select_starting_11(&self.chosen, self.budget)?;
        info!(
            "constructed squad: score {}, {:.1} left in budget",
            squad.score(),
            squad.budget.remaining()
        );
        Ok(BuildResult {
            squad,
            passes,
            evictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn sorted_ids(squad: &Squad<'_>) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = squad.players().map(Player::id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_random_zero_slack_returns_the_only_squad() {
        let players = fixtures::exact_squad();
        for seed in 0..10 {
            let mut rng = fixtures::rng(seed);
            let result = SquadBuilder::random(&players, &BuildConfig::default(), &mut rng).unwrap();

            assert_eq!(sorted_ids(&result.squad), (1..=15).collect::<Vec<PlayerId>>());
            assert_eq!(result.squad.budget.remaining_units(), 0);
            assert_eq!(result.evictions, 0);
            assert!(result.squad.is_feasible());
        }
    }

    #[test]
    fn test_greedy_zero_slack_returns_the_only_squad() {
        let players = fixtures::exact_squad();
        let result = SquadBuilder::greedy(&players, &BuildConfig::default()).unwrap();

        assert_eq!(sorted_ids(&result.squad), (1..=15).collect::<Vec<PlayerId>>());
        assert_eq!(result.squad.budget.remaining_units(), 0);
        assert!(result.squad.is_feasible());
    }

    #[test]
    fn test_zero_slack_split_is_deterministic() {
        let players = fixtures::exact_squad();
        let greedy = SquadBuilder::greedy(&players, &BuildConfig::default()).unwrap();
        let mut rng = fixtures::rng(3);
        let random = SquadBuilder::random(&players, &BuildConfig::default(), &mut rng).unwrap();

        assert_eq!(greedy.squad.to_solution(), random.squad.to_solution());
    }

    #[test]
    fn test_random_synthetic_is_feasible() {
        for seed in 0..8 {
            let players = fixtures::synthetic_catalog(seed);
            let mut rng = fixtures::rng(seed + 100);
            let result = SquadBuilder::random(&players, &BuildConfig::default(), &mut rng).unwrap();
            assert!(result.squad.is_feasible(), "seed {seed} infeasible");
            assert!(!result.squad.budget.is_overdrawn());
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let players = fixtures::synthetic_catalog(1);
        let config = BuildConfig::default();
        let a = SquadBuilder::random(&players, &config, &mut fixtures::rng(9)).unwrap();
        let b = SquadBuilder::random(&players, &config, &mut fixtures::rng(9)).unwrap();
        assert_eq!(a.squad.to_solution(), b.squad.to_solution());
    }

    #[test]
    fn test_greedy_synthetic_is_feasible() {
        for seed in 0..8 {
            let players = fixtures::synthetic_catalog(seed);
            let result = SquadBuilder::greedy(&players, &BuildConfig::default()).unwrap();
            assert!(result.squad.is_feasible(), "seed {seed} infeasible");
        }
    }

    #[test]
    fn test_missing_goalkeeper_exhausts_pool() {
        let players: Vec<Player> = fixtures::exact_squad()
            .into_iter()
            .filter(|p| p.id() != 2)
            .collect();
        let config = BuildConfig::default().with_max_passes(50);

        let mut rng = fixtures::rng(0);
        match SquadBuilder::random(&players, &config, &mut rng) {
            Err(DraftError::PoolExhausted { selected, passes }) => {
                assert_eq!(selected, 14);
                assert_eq!(passes, 50);
            }
            other => panic!("expected pool exhaustion, got {other:?}"),
        }

        assert!(matches!(
            SquadBuilder::greedy(&players, &config),
            Err(DraftError::PoolExhausted { .. })
        ));
    }

    #[test]
    fn test_sub_hundredth_overspend_is_rejected() {
        // Forward 15 costs 7.004: the only squad would spend 100.004.
        let mut players = fixtures::exact_squad();
        let last = players[14].clone();
        players[14] = Player::new(
            last.id(),
            last.position(),
            last.name(),
            last.club(),
            last.points(),
            7.004,
        );

        let refs: Vec<&Player> = players.iter().collect();
        let budget = Budget::after_spending(MAX_BUDGET, refs.iter().copied());
        let squad = select_starting_11(&refs, budget).unwrap();
        assert!(squad.budget.is_overdrawn());
        assert!(!squad.is_feasible());

        assert!(matches!(
            SquadBuilder::greedy(&players, &BuildConfig::default()),
            Err(DraftError::PoolExhausted { .. })
        ));
        let config = BuildConfig::default().with_max_passes(50);
        assert!(matches!(
            SquadBuilder::random(&players, &config, &mut fixtures::rng(0)),
            Err(DraftError::PoolExhausted { .. })
        ));
    }

    #[test]
    fn test_eviction_sells_most_expensive() {
        let players = fixtures::exact_squad();
        let mut selection = Selection::new();
        for p in &players[..4] {
            selection.add(p);
        }
        // IDs 3 and 4 both cost 6.0: the lower ID goes first.
        assert_eq!(selection.evict_most_expensive().map(Player::id), Some(3));
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.budget, Budget::new(100.0 - 5.0 - 4.0 - 6.0));
    }
}
