//! SA execution loop.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::SaConfig;
use crate::catalog::Player;
use crate::error::{DraftError, Result};
use crate::index::PositionIndex;
use crate::squad::{club_allows_swap, Squad};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<'a> {
    /// The best squad found, with the unchanged bench and its matching budget.
    pub squad: Squad<'a>,

    /// Score of the best squad.
    pub best_score: i64,

    /// Number of sweeps over the eleven.
    pub sweeps: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted swaps (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted swaps that raised the score.
    pub improving_moves: usize,

    /// Number of accepted swaps that lowered the score.
    pub worsening_moves: usize,

    /// Best score after each sweep, starting with the initial score.
    pub score_history: Vec<i64>,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Anneals `squad` using candidates drawn from `players`.
    pub fn run<'a, R: Rng>(
        players: &'a [Player],
        squad: Squad<'a>,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<'a>> {
        let index = PositionIndex::new(players);
        Self::run_with_index(&index, squad, config, rng)
    }

    /// Anneals `squad` against a prebuilt index.
    pub fn run_with_index<'a, R: Rng>(
        index: &PositionIndex<'a>,
        squad: Squad<'a>,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;

        let mut current = squad;
        let mut current_score = current.score();
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut sweeps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut worsening_moves = 0usize;
        let mut score_history = vec![best_score];

        while temperature > config.min_temperature {
            if config.max_sweeps > 0 && sweeps >= config.max_sweeps {
                break;
            }

            for slot in 0..current.starting.len() {
                let incumbent = current.starting[slot];
                let Some(neighbor) = draw_neighbor(index, &current, incumbent, config.radius, rng)
                else {
                    continue;
                };

                let neighbor_score =
                    current_score - i64::from(incumbent.points()) + i64::from(neighbor.points());

                // Metropolis acceptance criterion
                let probability = if neighbor_score >= current_score {
                    1.0
                } else {
                    let delta = (current_score - neighbor_score) as f64;
                    (-delta / temperature).exp()
                };

                if rng.random::<f64>() < probability {
                    match neighbor_score.cmp(&current_score) {
                        std::cmp::Ordering::Greater => improving_moves += 1,
                        std::cmp::Ordering::Less => worsening_moves += 1,
                        std::cmp::Ordering::Equal => {}
                    }
                    current.budget.swap(incumbent, neighbor);
                    current.starting[slot] = neighbor;
                    current_score = neighbor_score;
                    accepted_moves += 1;

                    if current_score > best_score {
                        best = current.clone();
                        best_score = current_score;
                    }
                }
            }

            sweeps += 1;
            score_history.push(best_score);
            if sweeps % 100 == 0 {
                debug!("sa sweep {sweeps}: T={temperature:.4}, current {current_score}, best {best_score}");
            }

            temperature = config.cooling.cool(temperature);
        }

        info!(
            "simulated annealing finished after {sweeps} sweeps: best score {best_score}, {accepted_moves} accepted"
        );

        Ok(SaResult {
            squad: best,
            best_score,
            sweeps,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            worsening_moves,
            score_history,
        })
    }
}

/// Draws one admissible replacement for `incumbent` from its rank window.
///
/// The window is shuffled and the first player outside the squad that fits
/// the budget and the club cap is returned.
fn draw_neighbor<'a, R: Rng>(
    index: &PositionIndex<'a>,
    squad: &Squad<'a>,
    incumbent: &Player,
    radius: usize,
    rng: &mut R,
) -> Option<&'a Player> {
    let rank = index.rank_of(incumbent)?;
    let list = index.players(incumbent.position());
    let lo = rank.saturating_sub(radius);
    let hi = (rank + radius).min(list.len());

    let mut ranks: Vec<usize> = (lo..hi).filter(|&r| r != rank).collect();
    ranks.shuffle(rng);

    ranks.into_iter().map(|r| list[r]).find(|candidate| {
        !squad.contains(candidate.id())
            && squad.budget.can_swap(incumbent, candidate)
            && club_allows_swap(squad.players(), incumbent, candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildConfig, SquadBuilder};
    use crate::fixtures;
    use crate::sa::CoolingSchedule;

    fn random_start(players: &[Player], seed: u64) -> Squad<'_> {
        let mut rng = fixtures::rng(seed);
        SquadBuilder::random(players, &BuildConfig::default(), &mut rng)
            .unwrap()
            .squad
    }

    #[test]
    fn test_sa_zero_temperature_runs_nothing() {
        let players = fixtures::synthetic_catalog(0);
        let squad = random_start(&players, 0);
        let before = squad.to_solution();

        let config = SaConfig::default().with_initial_temperature(0.0);
        let result = SaRunner::run(&players, squad, &config, &mut fixtures::rng(1)).unwrap();

        assert_eq!(result.sweeps, 0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.squad.to_solution(), before);
    }

    #[test]
    fn test_sa_near_zero_temperature_is_hill_climbing() {
        for seed in 0..4 {
            let players = fixtures::synthetic_catalog(seed);
            let squad = random_start(&players, seed);
            let before = squad.score();

            let config = SaConfig::default().with_initial_temperature(0.05);
            let result =
                SaRunner::run(&players, squad, &config, &mut fixtures::rng(seed + 10)).unwrap();

            assert!(result.sweeps > 0);
            assert_eq!(result.worsening_moves, 0);
            assert!(result.best_score >= before);
            assert!(result.squad.is_feasible());
        }
    }

    #[test]
    fn test_sa_high_temperature_accepts_worsening() {
        let players = fixtures::synthetic_catalog(3);
        let squad = random_start(&players, 3);

        let config = SaConfig::default()
            .with_initial_temperature(1e6)
            .with_min_temperature(1e5);
        let result = SaRunner::run(&players, squad, &config, &mut fixtures::rng(5)).unwrap();

        assert!(result.worsening_moves > 0);
        assert!(result.squad.is_feasible());
    }

    #[test]
    fn test_sa_synthetic_feasible() {
        for seed in 0..4 {
            let players = fixtures::synthetic_catalog(seed);
            let squad = random_start(&players, seed);
            let bench = squad.to_solution().bench;
            let before = squad.score();

            let result = SaRunner::run(
                &players,
                squad,
                &SaConfig::default(),
                &mut fixtures::rng(seed),
            )
            .unwrap();

            assert!(result.best_score >= before);
            assert_eq!(result.best_score, result.squad.score());
            assert!(result.squad.is_feasible(), "seed {seed} infeasible");
            assert_eq!(result.squad.to_solution().bench, bench);
            assert!(result.final_temperature <= 0.01);
            for w in result.score_history.windows(2) {
                assert!(w[1] >= w[0]);
            }
        }
    }

    #[test]
    fn test_sa_is_reproducible() {
        let players = fixtures::synthetic_catalog(5);
        let config = SaConfig::default().with_initial_temperature(10.0);

        let a = SaRunner::run(&players, random_start(&players, 5), &config, &mut fixtures::rng(8))
            .unwrap();
        let b = SaRunner::run(&players, random_start(&players, 5), &config, &mut fixtures::rng(8))
            .unwrap();

        assert_eq!(a.squad.to_solution(), b.squad.to_solution());
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_sa_max_sweeps_limit() {
        let players = fixtures::synthetic_catalog(6);
        let config = SaConfig::default()
            .with_initial_temperature(1e10)
            .with_max_sweeps(20);
        let result =
            SaRunner::run(&players, random_start(&players, 6), &config, &mut fixtures::rng(6))
                .unwrap();
        assert_eq!(result.sweeps, 20);
        assert_eq!(result.score_history.len(), 21);
    }

    #[test]
    fn test_sa_lundy_mees_terminates() {
        let players = fixtures::synthetic_catalog(2);
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling(CoolingSchedule::LundyMees { beta: 0.5 });
        let result =
            SaRunner::run(&players, random_start(&players, 2), &config, &mut fixtures::rng(2))
                .unwrap();

        assert!(result.sweeps > 0);
        assert!(result.final_temperature <= 0.01);
        assert!(result.squad.is_feasible());
    }

    #[test]
    fn test_draw_neighbor_excludes_squad_members() {
        let players = fixtures::exact_squad();
        let index = PositionIndex::new(&players);
        let squad: Vec<&Player> = players.iter().collect();
        let squad = crate::lineup::select_starting_11(&squad, crate::budget::Budget::new(0.0))
            .unwrap();

        let mut rng = fixtures::rng(0);
        for &incumbent in &squad.starting {
            assert!(draw_neighbor(&index, &squad, incumbent, 3, &mut rng).is_none());
        }
    }
}
