//! Simulated Annealing (SA).
//!
//! Sweeps the starting eleven slot by slot, drawing one random nearby
//! replacement per slot. Improving and equal swaps are always taken;
//! worsening swaps are taken with the Metropolis probability
//! `exp(-delta / T)`, which shrinks as the temperature cools after each
//! sweep. The best eleven seen is returned.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
