//! Player catalog.
//!
//! Immutable player records and the collection they are drafted from.
//! Everything downstream borrows players from a [`Catalog`]; nothing
//! mutates them after loading.

mod loader;
mod player;

pub use loader::Catalog;
pub use player::{Player, PlayerId, Position};
