//! Configuration types for the adversarial engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, adversarial::Strategy};

/// Configuration for a [`crate::adversarial::MoveSelector`].
///
/// Builder-style like the rest of the crate's configuration, and
/// serializable so it can live in a JSON file.
///
/// # Examples
///
/// ```
/// use gamesearch::adversarial::Strategy;
/// use gamesearch::app::EngineConfig;
///
/// let config = EngineConfig::new(Strategy::Minimax)
///     .with_max_depth(4)
///     .with_random_opening(false)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search variant
    pub strategy: Strategy,
    /// Plies searched below each candidate move; `None` searches to the end
    pub max_depth: Option<usize>,
    /// Play a random first move on an untouched board instead of searching
    pub random_opening: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create a configuration for `strategy`.
    ///
    /// Defaults: no depth limit, random opening on, no seed.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_depth: None,
            random_opening: true,
            seed: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limit the search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_random_opening(mut self, enabled: bool) -> Self {
        self.random_opening = enabled;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration for values the engine cannot use.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for a zero depth limit.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// [`EngineConfig::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read engine config {}", path.display()),
            source,
        })?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, Strategy::AlphaBeta);
        assert_eq!(config.max_depth, None);
        assert!(config.random_opening);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = EngineConfig::default().with_max_depth(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn loads_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"strategy": "minimax", "seed": 3}}"#).unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.seed, Some(3));
        assert!(config.random_opening);
    }

    #[test]
    fn invalid_json_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_depth": 0}}"#).unwrap();
        assert!(EngineConfig::from_json_file(file.path()).is_err());

        let missing = EngineConfig::from_json_file("/nonexistent/engine.json");
        assert!(matches!(missing, Err(Error::Io { .. })));
    }
}
