//! Squad construction configuration.

/// Configuration for the constructive heuristics.
///
/// # Examples
///
/// ```
/// use u_draft::build::BuildConfig;
///
/// let config = BuildConfig::default().with_max_passes(500);
/// assert_eq!(config.max_passes, 500);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    /// Maximum number of full scans over the player pool.
    ///
    /// Random construction may need several scans because it evicts
    /// expensive picks to make room. A pool that cannot yield a legal
    /// squad would otherwise be scanned forever.
    pub max_passes: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { max_passes: 10_000 }
    }
}

impl BuildConfig {
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_passes == 0 {
            return Err("max_passes must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuildConfig::default();
        assert_eq!(config.max_passes, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_passes() {
        assert!(BuildConfig::default().with_max_passes(0).validate().is_err());
    }
}
