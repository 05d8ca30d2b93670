//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Record the initial eleven in the tabu memory
//! 2. At each iteration, for every slot of the eleven:
//!    a. Scan same-position players within `radius` ranks of the incumbent
//!    b. Take the first one that is not in the squad, fits the budget and
//!    the club cap, and does not recreate a remembered eleven
//!    c. Apply the swap and remember the new eleven
//!    d. Update the best eleven if the score strictly improved
//! 3. Stop after `max_iterations` sweeps
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use log::{debug, info};

use super::config::TabuConfig;
use super::types::TabuMemory;
use crate::catalog::Player;
use crate::error::{DraftError, Result};
use crate::index::PositionIndex;
use crate::squad::{club_allows_swap, Squad};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<'a> {
    /// Best squad found, with the unchanged bench and its matching budget.
    pub squad: Squad<'a>,
    /// Score of the best squad.
    pub best_score: i64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best squad was found.
    pub best_iteration: usize,
    /// Number of swaps applied to the walking solution.
    pub moves: usize,
    /// Best score after each iteration.
    pub score_history: Vec<i64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Improves `squad` using candidates drawn from `players`.
    pub fn run<'a>(
        players: &'a [Player],
        squad: Squad<'a>,
        config: &TabuConfig,
    ) -> Result<TabuResult<'a>> {
        let index = PositionIndex::new(players);
        Self::run_with_index(&index, squad, config)
    }

    /// Improves `squad` against a prebuilt index.
    pub fn run_with_index<'a>(
        index: &PositionIndex<'a>,
        squad: Squad<'a>,
        config: &TabuConfig,
    ) -> Result<TabuResult<'a>> {
        config.validate().map_err(DraftError::InvalidConfig)?;

        let mut memory = TabuMemory::new(config.tabu_tenure);
        memory.record(&squad.starting);

        let mut best_score = squad.score();
        let mut best = squad.clone();
        let mut current = squad;
        let mut best_iteration = 0;
        let mut moves = 0;
        let mut score_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            for slot in 0..current.starting.len() {
                let incumbent = current.starting[slot];

                for &candidate in index.window(incumbent, config.radius) {
                    if current.contains(candidate.id())
                        || !current.budget.can_swap(incumbent, candidate)
                        || !club_allows_swap(current.players(), incumbent, candidate)
                    {
                        continue;
                    }

                    let mut next = current.starting.clone();
                    next[slot] = candidate;
                    if memory.is_tabu(&next) {
                        continue;
                    }

                    memory.record(&next);
                    current.budget.swap(incumbent, candidate);
                    current.starting = next;
                    moves += 1;

                    let score = current.score();
                    if score > best_score {
                        best_score = score;
                        best = current.clone();
                        best_iteration = iteration;
                    }
                    break;
                }
            }

            score_history.push(best_score);
            debug!(
                "tabu iteration {iteration}: current {}, best {best_score}",
                current.score()
            );
        }

        info!(
            "tabu search finished: best score {best_score} at iteration {best_iteration}, {moves} moves"
        );

        Ok(TabuResult {
            squad: best,
            best_score,
            iterations: score_history.len(),
            best_iteration,
            moves,
            score_history,
        })
    }
}
