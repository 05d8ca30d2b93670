//! Construct-then-improve pipeline.
//!
//! Chains one constructive heuristic with at most one improvement
//! heuristic, sharing a single [`PositionIndex`](crate::index::PositionIndex)
//! between them. [`PipelineRunner::run_multistart`] repeats the pipeline
//! over a list of seeds and keeps the best squad; with the `parallel`
//! feature the seeds run on the rayon thread pool.
//!
//! # Examples
//!
//! ```
//! use u_draft::catalog::{Player, Position};
//! use u_draft::pipeline::{Construction, Improvement, PipelineConfig, PipelineRunner};
//!
//! let layout = [
//!     (Position::Goalkeeper, 2),
//!     (Position::Defender, 5),
//!     (Position::Midfielder, 5),
//!     (Position::Forward, 3),
//! ];
//! let mut players = Vec::new();
//! for (position, count) in layout {
//!     for _ in 0..count {
//!         let id = players.len() as u32 + 1;
//!         let club = format!("club{}", id / 2);
//!         players.push(Player::new(id, position, format!("p{id}"), club, 50, 6.0));
//!     }
//! }
//!
//! let config = PipelineConfig::default()
//!     .with_construction(Construction::Greedy)
//!     .with_improvement(Improvement::Local);
//! let result = PipelineRunner::run_multistart(&players, &config, &[1, 2, 3]).unwrap();
//! assert_eq!(result.score, 550);
//! assert!(result.squad.is_feasible());
//! ```

mod config;
mod runner;

pub use config::{Construction, Improvement, PipelineConfig};
pub use runner::{PipelineResult, PipelineRunner};
