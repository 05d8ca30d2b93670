//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_draft::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(30);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 30);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of sweeps over the starting eleven.
    pub max_iterations: usize,
    /// How many recently visited elevens are remembered.
    pub tabu_tenure: usize,
    /// Ranks on either side of the incumbent searched for a replacement.
    pub radius: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 400,
            tabu_tenure: 25,
            radius: 3,
        }
    }
}

impl TabuConfig {
    /// Sets the number of sweeps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the visited-eleven memory).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the neighbourhood radius in ranks.
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be at least 1".into());
        }
        if self.radius == 0 {
            return Err("radius must be at least 1".into());
        }
        Ok(())
    }
}
