//! Fantasy-football squad optimisation.
//!
//! Picks fifteen players from a catalog under a fixed budget, position
//! quotas and a per-club cap, splits them into a legal starting eleven and
//! a bench, and maximises the points of the eleven:
//!
//! - **Construction** ([`build`]): random or greedy squad builders.
//! - **Lineup selection** ([`lineup`]): deterministic 11 + 4 split.
//! - **Local Search** ([`local`]): first-improvement hill climbing over
//!   same-position swaps.
//! - **Tabu Search** ([`tabu`]): swap walk with a memory of visited elevens.
//! - **Simulated Annealing** ([`sa`]): randomised swaps under a cooling
//!   schedule.
//! - **Pipeline** ([`pipeline`]): construct then improve, optionally over
//!   several seeds.
//!
//! Data enters through [`catalog::Catalog`] and leaves as a
//! [`solution::Solution`], which [`validator::validate`] checks
//! independently of the heuristics.
//!
//! # Architecture
//!
//! Heuristics borrow players from the catalog slice and never copy them.
//! Money is tracked in fixed-point hundredths ([`budget`]), and every
//! feasibility rule lives in [`constraints`].

pub mod budget;
pub mod build;
pub mod catalog;
pub mod constraints;
mod error;
pub mod index;
pub mod lineup;
pub mod local;
pub mod pipeline;
pub mod sa;
pub mod solution;
pub mod squad;
pub mod tabu;
pub mod validator;

#[cfg(test)]
mod fixtures;

pub use error::{DraftError, Result};
