//! Pipeline configuration.

use std::fmt;
use std::str::FromStr;

use crate::build::BuildConfig;
use crate::local::LocalSearchConfig;
use crate::sa::SaConfig;
use crate::tabu::TabuConfig;

/// Constructive heuristic producing the starting squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construction {
    #[default]
    Random,
    Greedy,
}

/// Improvement heuristic applied to the constructed squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    None,
    #[default]
    Local,
    Tabu,
    Annealing,
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construction::Random => "random",
            Construction::Greedy => "greedy",
        })
    }
}

impl FromStr for Construction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Construction::Random),
            "greedy" => Ok(Construction::Greedy),
            other => Err(format!("unknown construction '{other}'")),
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Improvement::None => "none",
            Improvement::Local => "local",
            Improvement::Tabu => "tabu",
            Improvement::Annealing => "sa",
        })
    }
}

impl FromStr for Improvement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Improvement::None),
            "local" => Ok(Improvement::Local),
            "tabu" => Ok(Improvement::Tabu),
            "sa" | "annealing" => Ok(Improvement::Annealing),
            other => Err(format!("unknown improvement '{other}'")),
        }
    }
}

/// Configuration for a construct-then-improve run.
///
/// Only the sub-configuration of the selected heuristics is used, but all
/// of them are validated.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    pub construction: Construction,
    pub improvement: Improvement,
    pub build: BuildConfig,
    pub local: LocalSearchConfig,
    pub tabu: TabuConfig,
    pub sa: SaConfig,
}

impl PipelineConfig {
    pub fn with_construction(mut self, construction: Construction) -> Self {
        self.construction = construction;
        self
    }

    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
        self
    }

    pub fn with_build(mut self, build: BuildConfig) -> Self {
        self.build = build;
        self
    }

    pub fn with_local(mut self, local: LocalSearchConfig) -> Self {
        self.local = local;
        self
    }

    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    /// Validates every sub-configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.build.validate().map_err(|e| format!("build: {e}"))?;
        self.local.validate().map_err(|e| format!("local: {e}"))?;
        self.tabu.validate().map_err(|e| format!("tabu: {e}"))?;
        self.sa.validate().map_err(|e| format!("sa: {e}"))?;
        Ok(())
    }
}
