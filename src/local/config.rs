//! Local search configuration.

/// Configuration for first-improvement local search.
///
/// # Examples
///
/// ```
/// use u_draft::local::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default().with_candidates(5);
/// assert_eq!(config.candidates, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// How many of the closest better-scoring players are tried per slot.
    pub candidates: usize,

    /// Maximum number of passes over the eleven. 0 = until no swap is made.
    pub max_passes: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            candidates: 3,
            max_passes: 0,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_candidates(mut self, n: usize) -> Self {
        self.candidates = n;
        self
    }

    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.candidates == 0 {
            return Err("candidates must be at least 1".into());
        }
        Ok(())
    }
}
