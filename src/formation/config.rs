//! Formation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of members per team.
pub const DEFAULT_TEAM_SIZE: usize = 4;
/// Default cap on balancing iterations.
pub const DEFAULT_MAX_BALANCE_ITERATIONS: usize = 10;
/// Default average spread below which teams count as balanced.
pub const DEFAULT_BALANCE_THRESHOLD: f64 = 5.0;

/// Tunable parameters of the formation pipeline.
///
/// Every field has a default, so a partial JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    /// Members per team.
    pub team_size: usize,
    /// Maximum number of balancing swaps attempted.
    pub max_balance_iterations: usize,
    /// Spread of team averages (percentage points) treated as balanced.
    pub balance_threshold: f64,
    /// Prefix for generated team IDs (`{prefix}-{n}`).
    pub id_prefix: String,
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Teams must have at least one member.
    #[error("team size must be at least 1")]
    ZeroTeamSize,
    /// Threshold must be a finite, non-negative number.
    #[error("balance threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            max_balance_iterations: DEFAULT_MAX_BALANCE_ITERATIONS,
            balance_threshold: DEFAULT_BALANCE_THRESHOLD,
            id_prefix: "team".to_string(),
        }
    }
}

impl FormationConfig {
    /// Sets the team size.
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Sets the balancing iteration cap.
    pub fn with_max_balance_iterations(mut self, iterations: usize) -> Self {
        self.max_balance_iterations = iterations;
        self
    }

    /// Sets the balance threshold.
    pub fn with_balance_threshold(mut self, threshold: f64) -> Self {
        self.balance_threshold = threshold;
        self
    }

    /// Sets the team ID prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::ZeroTeamSize);
        }
        if !self.balance_threshold.is_finite() || self.balance_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.balance_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = FormationConfig::default();
        assert_eq!(c.team_size, 4);
        assert_eq!(c.max_balance_iterations, 10);
        assert!((c.balance_threshold - 5.0).abs() < 1e-10);
        assert_eq!(c.id_prefix, "team");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_team_size_rejected() {
        let c = FormationConfig::default().with_team_size(0);
        assert_eq!(c.validate(), Err(ConfigError::ZeroTeamSize));
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let c = FormationConfig::default().with_balance_threshold(-1.0);
        assert!(matches!(c.validate(), Err(ConfigError::InvalidThreshold(_))));

        let c = FormationConfig::default().with_balance_threshold(f64::NAN);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: FormationConfig = serde_json::from_str(r#"{"team_size": 3}"#).unwrap();
        assert_eq!(c.team_size, 3);
        assert_eq!(c.max_balance_iterations, 10);
        assert_eq!(c.id_prefix, "team");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::ZeroTeamSize.to_string(),
            "team size must be at least 1"
        );
    }
}
