//! Pipeline execution.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{Construction, Improvement, PipelineConfig};
use crate::build::SquadBuilder;
use crate::catalog::Player;
use crate::error::{DraftError, Result};
use crate::index::PositionIndex;
use crate::local::LocalSearchRunner;
use crate::sa::SaRunner;
use crate::squad::Squad;
use crate::tabu::TabuRunner;

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult<'a> {
    /// Final squad after improvement.
    pub squad: Squad<'a>,

    /// Score of the final starting eleven.
    pub score: i64,

    /// Score right after construction.
    pub initial_score: i64,

    /// Seed that produced this squad, for multi-start runs.
    pub seed: Option<u64>,
}

/// Runs construction followed by improvement.
pub struct PipelineRunner;

impl PipelineRunner {
    /// Runs the configured pipeline once, drawing randomness from `rng`.
    pub fn run<'a, R: Rng>(
        players: &'a [Player],
        config: &PipelineConfig,
        rng: &mut R,
    ) -> Result<PipelineResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;
        let index = PositionIndex::new(players);
        Self::run_with_index(players, &index, config, rng)
    }

    /// Runs the pipeline once per seed and returns the best squad.
    ///
    /// Ties keep the earliest seed in `seeds`. Each run owns a `StdRng`
    /// seeded from its seed, so the outcome does not depend on whether the
    /// `parallel` feature is enabled.
    ///
    /// # Errors
    ///
    /// [`DraftError::InvalidConfig`] for an empty seed list, otherwise the
    /// first error raised by any run.
    pub fn run_multistart<'a>(
        players: &'a [Player],
        config: &PipelineConfig,
        seeds: &[u64],
    ) -> Result<PipelineResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;
        if seeds.is_empty() {
            return Err(DraftError::InvalidConfig(
                "multistart needs at least one seed".into(),
            ));
        }
        let index = PositionIndex::new(players);

        let run_seed = |&seed: &u64| -> Result<PipelineResult<'a>> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut result = Self::run_with_index(players, &index, config, &mut rng)?;
            result.seed = Some(seed);
            debug!("multistart seed {seed}: score {}", result.score);
            Ok(result)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<Result<PipelineResult<'a>>> = seeds.par_iter().map(run_seed).collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<PipelineResult<'a>>> = seeds.iter().map(run_seed).collect();

        let mut best: Option<PipelineResult<'a>> = None;
        for result in results {
            let result = result?;
            if best.as_ref().map_or(true, |b| result.score > b.score) {
                best = Some(result);
            }
        }
        let best = best.ok_or_else(|| DraftError::InvalidConfig("no run completed".into()))?;

        info!(
            "multistart over {} seeds: best score {} from seed {:?}",
            seeds.len(),
            best.score,
            best.seed
        );
        Ok(best)
    }

    fn run_with_index<'a, R: Rng>(
        players: &'a [Player],
        index: &PositionIndex<'a>,
        config: &PipelineConfig,
        rng: &mut R,
    ) -> Result<PipelineResult<'a>> {
        let built = match config.construction {
            Construction::Random => SquadBuilder::random(players, &config.build, rng)?,
            Construction::Greedy => SquadBuilder::greedy(players, &config.build)?,
        };
        let initial_score = built.squad.score();

        let squad = match config.improvement {
            Improvement::None => built.squad,
            Improvement::Local => {
                LocalSearchRunner::run_with_index(index, built.squad, &config.local)?.squad
            }
            Improvement::Tabu => TabuRunner::run_with_index(index, built.squad, &config.tabu)?.squad,
            Improvement::Annealing => {
                SaRunner::run_with_index(index, built.squad, &config.sa, rng)?.squad
            }
        };
        let score = squad.score();

        debug!(
            "{} + {}: {initial_score} -> {score}",
            config.construction, config.improvement
        );
        Ok(PipelineResult {
            squad,
            score,
            initial_score,
            seed: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PlayerId;
    use crate::constraints::{self, MAX_PER_CLUB, SQUAD_SIZE};
    use crate::fixtures;
    use crate::sa::SaConfig;
    use crate::tabu::TabuConfig;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    const IMPROVEMENTS: [Improvement; 4] = [
        Improvement::None,
        Improvement::Local,
        Improvement::Tabu,
        Improvement::Annealing,
    ];

    fn quick_config(construction: Construction, improvement: Improvement) -> PipelineConfig {
        PipelineConfig::default()
            .with_construction(construction)
            .with_improvement(improvement)
            .with_tabu(TabuConfig::default().with_max_iterations(30))
            .with_sa(SaConfig::default().with_initial_temperature(5.0).with_max_sweeps(60))
    }

    #[test]
    fn test_every_combination_is_feasible() {
        let players = fixtures::synthetic_catalog(11);
        for construction in [Construction::Random, Construction::Greedy] {
            for improvement in IMPROVEMENTS {
                let config = quick_config(construction, improvement);
                let result = PipelineRunner::run(&players, &config, &mut fixtures::rng(4)).unwrap();

                assert!(
                    result.squad.is_feasible(),
                    "{construction} + {improvement} infeasible"
                );
                assert_eq!(result.score, result.squad.score());
                assert!(result.score >= result.initial_score);
                assert_eq!(result.seed, None);
            }
        }
    }

    #[test]
    fn test_zero_slack_catalog_for_every_combination() {
        let players = fixtures::exact_squad();
        let expected = PipelineRunner::run(
            &players,
            &quick_config(Construction::Greedy, Improvement::None),
            &mut fixtures::rng(0),
        )
        .unwrap()
        .squad
        .to_solution();

        for construction in [Construction::Random, Construction::Greedy] {
            for improvement in IMPROVEMENTS {
                let config = quick_config(construction, improvement);
                let result = PipelineRunner::run(&players, &config, &mut fixtures::rng(9)).unwrap();
                assert_eq!(result.squad.to_solution(), expected);
            }
        }
    }

    #[test]
    fn test_multistart_keeps_best_seed() {
        let players = fixtures::synthetic_catalog(12);
        let config = quick_config(Construction::Random, Improvement::Local);
        let seeds = [3, 1, 4, 1, 5];

        let best = PipelineRunner::run_multistart(&players, &config, &seeds).unwrap();

        let mut top = i64::MIN;
        let mut top_seed = 0;
        for &seed in &seeds {
            let mut rng = StdRng::seed_from_u64(seed);
            let single = PipelineRunner::run(&players, &config, &mut rng).unwrap();
            if single.score > top {
                top = single.score;
                top_seed = seed;
            }
        }
        assert_eq!(best.score, top);
        assert_eq!(best.seed, Some(top_seed));
    }

    #[test]
    fn test_multistart_rejects_empty_seeds() {
        let players = fixtures::exact_squad();
        assert!(matches!(
            PipelineRunner::run_multistart(&players, &PipelineConfig::default(), &[]),
            Err(DraftError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_construction_failure_propagates() {
        let players: Vec<Player> = fixtures::exact_squad()
            .into_iter()
            .filter(|p| p.id() != 15)
            .collect();
        let config = quick_config(Construction::Greedy, Improvement::Tabu);
        assert!(matches!(
            PipelineRunner::run(&players, &config, &mut fixtures::rng(0)),
            Err(DraftError::PoolExhausted { .. })
        ));
    }

    fn check_invariants(squad: &Squad<'_>) -> std::result::Result<(), TestCaseError> {
        prop_assert_eq!(squad.starting.len(), 11);
        prop_assert_eq!(squad.bench.len(), 4);

        let ids: HashSet<PlayerId> = squad.players().map(Player::id).collect();
        prop_assert_eq!(ids.len(), SQUAD_SIZE);

        let all: Vec<&Player> = squad.players().collect();
        prop_assert!(constraints::check_squad_quotas(all.iter().copied()).is_ok());
        prop_assert!(constraints::formation_ok(&squad.starting));
        prop_assert!(!squad.budget.is_overdrawn());
        prop_assert!(squad.total_price() <= constraints::MAX_BUDGET + 1e-9);

        let mut clubs: HashMap<&str, usize> = HashMap::new();
        for p in &all {
            *clubs.entry(p.club()).or_default() += 1;
        }
        prop_assert!(clubs.values().all(|&n| n <= MAX_PER_CLUB));
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Property: every heuristic returns a legal squad on any catalog
        #[test]
        fn prop_pipeline_output_is_legal(
            catalog_seed in 0u64..1_000,
            run_seed in 0u64..1_000,
            greedy in any::<bool>(),
            improvement in 0usize..4,
        ) {
            let players = fixtures::synthetic_catalog(catalog_seed);
            let construction = if greedy { Construction::Greedy } else { Construction::Random };
            let config = quick_config(construction, IMPROVEMENTS[improvement]);

            let result = PipelineRunner::run(&players, &config, &mut fixtures::rng(run_seed));
            prop_assume!(!matches!(result, Err(DraftError::PoolExhausted { .. })));
            let result = result.unwrap();
            check_invariants(&result.squad)?;
            prop_assert!(result.score >= result.initial_score);
        }

        /// Property: near-zero temperature never accepts a worsening swap
        #[test]
        fn prop_cold_annealing_never_worsens(catalog_seed in 0u64..1_000, run_seed in 0u64..1_000) {
            let players = fixtures::synthetic_catalog(catalog_seed);
            let mut rng = fixtures::rng(run_seed);
            let built = SquadBuilder::random(&players, &Default::default(), &mut rng);
            prop_assume!(built.is_ok());
            let squad = built.unwrap().squad;

            let config = SaConfig::default().with_initial_temperature(0.05);
            let result = SaRunner::run(&players, squad, &config, &mut rng).unwrap();
            prop_assert_eq!(result.worsening_moves, 0);
            check_invariants(&result.squad)?;
        }
    }
}
