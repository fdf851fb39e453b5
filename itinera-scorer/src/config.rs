//! Tunable configuration for scoring and ranking.

use crate::ScoringConfigError;

/// Tolerance allowed when checking that weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Default radius beyond which proximity scores zero.
pub const DEFAULT_MAX_RADIUS_METERS: f64 = 15_000.0;

/// Default number of ranked locations returned.
pub const DEFAULT_LIMIT: usize = 20;

/// Relative weight of each scoring factor.
///
/// Weights must be finite, non-negative, and sum to `1.0`.
///
/// # Examples
/// ```
/// use itinera_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert!(weights.validate().is_ok());
///
/// let skewed = ScoreWeights { popularity: 0.5, ..weights };
/// assert!(skewed.validate().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScoreWeights {
    /// Weight of the budget-fit factor.
    pub budget_fit: f64,
    /// Weight of the preference-match factor.
    pub preference_match: f64,
    /// Weight of the proximity factor.
    pub proximity: f64,
    /// Weight of the popularity factor.
    pub popularity: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidWeightConfig`] when a weight is
    /// negative or not finite, or the weights do not sum to one.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        let values = self.as_array();
        if values.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ScoringConfigError::InvalidWeightConfig { weights: self });
        }
        if !self.sums_to_one() {
            return Err(ScoringConfigError::InvalidWeightConfig { weights: self });
        }
        Ok(self)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation compares the weight total against one"
    )]
    fn sums_to_one(self) -> bool {
        let total: f64 = self.as_array().iter().sum();
        (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// Weights in factor evaluation order.
    #[must_use]
    pub const fn as_array(self) -> [f64; 4] {
        [
            self.budget_fit,
            self.preference_match,
            self.proximity,
            self.popularity,
        ]
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            budget_fit: 0.35,
            preference_match: 0.30,
            proximity: 0.20,
            popularity: 0.15,
        }
    }
}

/// Configuration for [`ScoringEngine`](crate::ScoringEngine).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ScoringConfig {
    /// Factor weights.
    pub weights: ScoreWeights,
    /// Distance from the anchor at which proximity reaches zero.
    pub max_radius_meters: f64,
}

impl ScoringConfig {
    /// Validate the weights and radius and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::InvalidWeightConfig`] for unusable
    /// weights and [`ScoringConfigError::InvalidRadius`] for a radius that is
    /// not a positive finite number.
    pub fn validate(self) -> Result<Self, ScoringConfigError> {
        self.weights.validate()?;
        if !self.max_radius_meters.is_finite() || self.max_radius_meters <= 0.0 {
            return Err(ScoringConfigError::InvalidRadius {
                value: self.max_radius_meters,
            });
        }
        Ok(self)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            max_radius_meters: DEFAULT_MAX_RADIUS_METERS,
        }
    }
}

/// Configuration for [`RankingPipeline`](crate::RankingPipeline).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RankingConfig {
    /// Number of results returned when a request does not set a limit.
    pub default_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_are_valid() {
        assert_eq!(
            ScoreWeights::default().validate(),
            Ok(ScoreWeights::default())
        );
    }

    #[rstest]
    #[case(ScoreWeights { budget_fit: 0.5, preference_match: 0.5, proximity: 0.5, popularity: 0.0 })]
    #[case(ScoreWeights { budget_fit: 1.2, preference_match: -0.2, proximity: 0.0, popularity: 0.0 })]
    #[case(ScoreWeights { budget_fit: f64::NAN, preference_match: 0.3, proximity: 0.2, popularity: 0.15 })]
    #[case(ScoreWeights { budget_fit: 0.0, preference_match: 0.0, proximity: 0.0, popularity: 0.0 })]
    fn unusable_weights_are_rejected(#[case] weights: ScoreWeights) {
        assert!(matches!(
            weights.validate(),
            Err(ScoringConfigError::InvalidWeightConfig { .. })
        ));
    }

    #[rstest]
    fn weights_within_tolerance_are_accepted() {
        let weights = ScoreWeights {
            budget_fit: 0.25,
            preference_match: 0.25,
            proximity: 0.25,
            popularity: 0.250_000_000_1,
        };
        assert!(weights.validate().is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::INFINITY)]
    fn non_positive_radius_is_rejected(#[case] radius: f64) {
        let config = ScoringConfig {
            max_radius_meters: radius,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScoringConfigError::InvalidRadius { .. })
        ));
    }
}
