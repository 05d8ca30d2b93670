//! Tabu Search (TS).
//!
//! Walks the swap neighbourhood of the starting eleven, accepting the first
//! admissible neighbour of each slot whether or not it improves. A memory
//! of recently visited elevens (compared by member set) forbids immediate
//! revisits, which lets the walk leave local optima. The best eleven seen
//! is returned.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
pub use types::{LineupKey, TabuMemory};
