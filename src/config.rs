//! Persisted explorer settings

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::dataset::MAX_YEAR;
use crate::constants::filters::{DEFAULT_LINE_POPULARITY, DEFAULT_SCATTER_POPULARITY};
use crate::error::{HitError, Result};
use crate::perf::SampleBudget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub sampling: SampleBudget,
    /// Tracks released after this year are dropped on load
    pub max_year: i32,
    pub optimization_enabled: bool,
    pub scatter_popularity: f64,
    pub line_popularity: f64,
    pub dark_mode: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            sampling: SampleBudget::default(),
            max_year: MAX_YEAR,
            optimization_enabled: true,
            scatter_popularity: DEFAULT_SCATTER_POPULARITY,
            line_popularity: DEFAULT_LINE_POPULARITY,
            dark_mode: true,
        }
    }
}

impl ExplorerConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.check()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Load `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring configuration file");
                Self::default()
            }
        }
    }

    fn check(&self) -> Result<()> {
        for (name, value) in [
            ("scatter_popularity", self.scatter_popularity),
            ("line_popularity", self.line_popularity),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(HitError::Config(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_save_and_load() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        let config = ExplorerConfig {
            sampling: SampleBudget {
                trigger_threshold: 500,
                protected_year_boundary: 1995,
                recent_quota: 250,
            },
            optimization_enabled: false,
            ..Default::default()
        };

        config.save_to(file.path()).unwrap();
        let loaded = ExplorerConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"max_year": 2020}}"#).unwrap();
        file.flush().unwrap();

        let loaded = ExplorerConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded.max_year, 2020);
        assert_eq!(loaded.sampling, SampleBudget::default());
    }

    #[test]
    fn test_invalid_values() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"scatter_popularity": 250.0}}"#).unwrap();
        file.flush().unwrap();

        let err = ExplorerConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, HitError::Config(_)));
        assert_eq!(ExplorerConfig::load_or_default(file.path()), ExplorerConfig::default());

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"sampling": {{"recent_quota": -4}}}}"#).unwrap();
        file.flush().unwrap();
        assert!(matches!(
            ExplorerConfig::load_from(file.path()).unwrap_err(),
            HitError::Json(_)
        ));
    }
}
