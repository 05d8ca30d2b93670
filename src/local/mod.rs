//! Local search.
//!
//! First-improvement hill climbing over single same-position swaps in the
//! starting eleven. A slot's candidates are the few players ranked just
//! above the incumbent, tried best first. The search stops at the first
//! pass that makes no swap.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearchResult, LocalSearchRunner};
