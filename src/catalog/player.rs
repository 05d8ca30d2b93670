//! Player records.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::budget::to_units;
use crate::error::DraftError;

/// Stable player identifier, unique within a catalog.
pub type PlayerId = u32;

/// Playing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in index order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Dense index in `0..4`, used for per-position arrays.
    pub fn index(self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    /// Short code used in catalog files (`GK`, `DEF`, `MID`, `FW`).
    pub fn code(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FW",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Position {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GK" => Ok(Position::Goalkeeper),
            "DEF" => Ok(Position::Defender),
            "MID" => Ok(Position::Midfielder),
            "FW" => Ok(Position::Forward),
            other => Err(DraftError::UnknownPosition(other.to_string())),
        }
    }
}

/// A draftable player.
///
/// Immutable once created. Equality and hashing use the ID only, so two
/// records rebuilt from the same catalog line compare equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    position: Position,
    name: String,
    club: String,
    points: i32,
    price: f64,
}

impl Player {
    pub fn new(
        id: PlayerId,
        position: Position,
        name: impl Into<String>,
        club: impl Into<String>,
        points: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            club: club.into(),
            points,
            price,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn club(&self) -> &str {
        &self.club
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Price in fixed-point budget units, rounded up to the next hundredth.
    pub fn cost(&self) -> i64 {
        to_units(self.price)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
