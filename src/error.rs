//! Error type shared by the drafting pipeline.

use crate::catalog::{PlayerId, Position};
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, DraftError>;

/// Errors raised while loading data or constructing a squad.
///
/// The improvement heuristics never fail on feasible input: a slot with
/// no eligible neighbor is simply left alone.
#[derive(Error, Debug)]
pub enum DraftError {
    /// The pool could not produce a full squad within the pass limit.
    #[error("player pool exhausted: selected {selected} of 15 after {passes} passes")]
    PoolExhausted { selected: usize, passes: usize },

    /// A squad handed to the lineup selector breaks a position quota.
    #[error("squad has {found} players at {position}, expected {expected}")]
    QuotaMismatch {
        position: Position,
        expected: usize,
        found: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A solution references a player ID missing from the catalog.
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("unknown position code '{0}'")]
    UnknownPosition(String),

    #[error("line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("malformed solution: {0}")]
    MalformedSolution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
