//! Constructive heuristics.
//!
//! Produce an initial feasible squad: fifteen players meeting the position
//! quotas, the club cap and the budget, already split into a starting
//! eleven and a bench by [`select_starting_11`](crate::lineup::select_starting_11).
//!
//! - **Random**: shuffled pool, evicting the most expensive pick whenever
//!   a candidate does not fit.
//! - **Greedy**: the four cheapest legal substitutes first, then the best
//!   remaining players by points.

mod config;
mod runner;

pub use config::BuildConfig;
pub use runner::{BuildResult, SquadBuilder};
