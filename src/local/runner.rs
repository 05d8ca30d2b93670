//! Local search execution loop.

use log::{debug, info};

use super::config::LocalSearchConfig;
use crate::catalog::Player;
use crate::error::{DraftError, Result};
use crate::index::PositionIndex;
use crate::squad::{club_allows_swap, Squad};

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<'a> {
    /// The improved squad. The bench is never changed.
    pub squad: Squad<'a>,

    /// Score of the starting eleven.
    pub score: i64,

    /// Number of passes over the eleven, including the final idle one.
    pub passes: usize,

    /// Number of swaps applied.
    pub swaps: usize,

    /// Score after each pass.
    pub score_history: Vec<i64>,
}

/// Executes local search.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Improves `squad` using candidates drawn from `players`.
    pub fn run<'a>(
        players: &'a [Player],
        squad: Squad<'a>,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult<'a>> {
        let index = PositionIndex::new(players);
        Self::run_with_index(&index, squad, config)
    }

    /// Improves `squad` against a prebuilt index.
    pub fn run_with_index<'a>(
        index: &PositionIndex<'a>,
        mut squad: Squad<'a>,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;

        let mut passes = 0;
        let mut swaps = 0;
        let mut score_history = vec![squad.score()];

        loop {
            if config.max_passes > 0 && passes >= config.max_passes {
                break;
            }
            passes += 1;
            let mut improved = false;

            for slot in 0..squad.starting.len() {
                let incumbent = squad.starting[slot];
                let better = index.better_than(incumbent);
                let closest = &better[better.len().saturating_sub(config.candidates)..];

                for &candidate in closest {
                    if squad.contains(candidate.id()) {
                        continue;
                    }
                    if squad.budget.can_swap(incumbent, candidate)
                        && club_allows_swap(squad.players(), incumbent, candidate)
                    {
                        squad.budget.swap(incumbent, candidate);
                        squad.starting[slot] = candidate;
                        swaps += 1;
                        improved = true;
                        break;
                    }
                }
            }

            score_history.push(squad.score());
            debug!("local search pass {passes}: score {}", squad.score());

            if !improved {
                break;
            }
        }

        let score = squad.score();
        info!("local search finished after {passes} passes, {swaps} swaps: score {score}");

        Ok(LocalSearchResult {
            squad,
            score,
            passes,
            swaps,
            score_history,
        })
    }
}
