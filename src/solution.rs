//! Squad solutions as player IDs, and their two-line text form.
//!
//! ```text
//! 12,87,3,45,9,110,64,23,71,5,38
//! 17,92,41,66
//! ```
//!
//! The first line lists the starting eleven, the second the bench.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::catalog::{Catalog, Player, PlayerId};
use crate::error::{DraftError, Result};

/// Starting eleven and bench by player ID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub starting: Vec<PlayerId>,
    pub bench: Vec<PlayerId>,
}

impl Solution {
    /// Looks every ID up in `catalog`.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<(Vec<&'a Player>, Vec<&'a Player>)> {
        let lookup = |ids: &[PlayerId]| -> Result<Vec<&'a Player>> {
            ids.iter()
                .map(|&id| catalog.get(id).ok_or(DraftError::UnknownPlayer(id)))
                .collect()
        };
        Ok((lookup(&self.starting)?, lookup(&self.bench)?))
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |ids: &[PlayerId]| {
            ids.iter()
                .map(PlayerId::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(f, "{}\n{}", join(&self.starting), join(&self.bench))
    }
}

impl FromStr for Solution {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines();
        let mut next_line = |what: &str| -> Result<Vec<PlayerId>> {
            let line = lines
                .next()
                .ok_or_else(|| DraftError::MalformedSolution(format!("missing {what} line")))?;
            line.split(',')
                .map(|field| {
                    field.trim().parse::<PlayerId>().map_err(|_| {
                        DraftError::MalformedSolution(format!(
                            "invalid player id '{}' in {what} line",
                            field.trim()
                        ))
                    })
                })
                .collect()
        };

        let starting = next_line("starting")?;
        let bench = next_line("bench")?;
        Ok(Self { starting, bench })
    }
}
