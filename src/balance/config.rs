//! Balancing configuration.

use crate::error::BalanceError;

/// Targets and budget for a balancing run.
///
/// # Examples
///
/// ```
/// use team_balancer::balance::BalanceConfig;
///
/// let config = BalanceConfig::default()
///     .with_target_choice3_spread(2)
///     .with_max_iterations(250);
/// assert_eq!(config.target_choice3_spread, 2);
/// assert_eq!(config.target_gender_spread, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceConfig {
    /// Largest acceptable spread of choice-3 counts.
    pub target_choice3_spread: usize,
    /// Largest acceptable spread for each gender, checked independently.
    pub target_gender_spread: usize,
    /// Largest acceptable spread of proficient counts.
    pub target_proficiency_spread: usize,
    /// Maximum number of swaps to apply.
    pub max_iterations: usize,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            target_choice3_spread: 3,
            target_gender_spread: 4,
            target_proficiency_spread: 4,
            max_iterations: 100,
        }
    }
}

impl BalanceConfig {
    pub fn with_target_choice3_spread(mut self, target: usize) -> Self {
        self.target_choice3_spread = target;
        self
    }

    pub fn with_target_gender_spread(mut self, target: usize) -> Self {
        self.target_gender_spread = target;
        self
    }

    pub fn with_target_proficiency_spread(mut self, target: usize) -> Self {
        self.target_proficiency_spread = target;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.max_iterations == 0 {
            return Err(BalanceError::InvalidConfig {
                field: "max_iterations",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BalanceConfig::default();
        assert_eq!(config.target_choice3_spread, 3);
        assert_eq!(config.target_gender_spread, 4);
        assert_eq!(config.target_proficiency_spread, 4);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_validate_ok() {
        assert!(BalanceConfig::default().validate().is_ok());
        let strict = BalanceConfig::default()
            .with_target_choice3_spread(0)
            .with_target_gender_spread(0)
            .with_target_proficiency_spread(0);
        assert!(strict.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = BalanceConfig::default().with_max_iterations(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            BalanceError::InvalidConfig {
                field: "max_iterations",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_iterations must be at least 1"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let config: BalanceConfig = serde_json::from_str(r#"{"max_iterations": 7}"#).unwrap();
        assert_eq!(config.max_iterations, 7);
        assert_eq!(config.target_choice3_spread, 3);

        let negative = serde_json::from_str::<BalanceConfig>(r#"{"target_gender_spread": -1}"#);
        assert!(negative.is_err());
    }
}
