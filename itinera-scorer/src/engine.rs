//! Multi-factor fit scoring for candidate venues.
//!
//! Each factor is normalised into `0.0..=1.0` and multiplied by its weight.
//! The composite score is the sum of the weighted factors, so it also lies
//! in `0.0..=1.0` when the weights sum to one.

use itinera_core::{
    BudgetState, Candidate, Factor, FactorScore, MAX_POPULARITY, Money, ScoreBreakdown,
    ScoreCard, Scorer, TripParams, haversine_meters,
};

use crate::{ScoringConfig, ScoringConfigError};

/// Stateless scorer combining budget fit, preference match, proximity and
/// popularity.
///
/// # Examples
/// ```
/// use itinera_core::test_support::{budget_state, candidate, trip_params};
/// use itinera_core::{Category, Scorer};
/// use itinera_scorer::ScoringEngine;
///
/// let engine = ScoringEngine::default();
/// let params = trip_params(1000, 5, &[]);
/// let card = engine.score(
///     &candidate("h1", Category::Hotel, 150),
///     &params,
///     &budget_state(&params, 0),
/// );
/// assert!((0.0..=1.0).contains(&card.score));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Construct an engine after validating `config`.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError`] when the weights or radius are unusable.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// The validated configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn raw_factor(
        &self,
        factor: Factor,
        candidate: &Candidate,
        params: &TripParams,
        budget: &BudgetState,
    ) -> f64 {
        match factor {
            Factor::BudgetFit => budget_fit(candidate.estimated_cost, daily_allowance(params, budget)),
            Factor::PreferenceMatch => preference_match(candidate, params),
            Factor::Proximity => proximity(
                haversine_meters(candidate.coords, params.anchor),
                self.config.max_radius_meters,
            ),
            Factor::Popularity => popularity(candidate.popularity_rating),
        }
    }
}

impl Scorer for ScoringEngine {
    #[expect(
        clippy::float_arithmetic,
        reason = "weighted contribution is raw value times weight"
    )]
    fn score(&self, candidate: &Candidate, params: &TripParams, budget: &BudgetState) -> ScoreCard {
        let weights = self.config.weights.as_array();
        let mut breakdown = ScoreBreakdown::default();
        for (factor, weight) in Factor::ALL.into_iter().zip(weights) {
            let raw = Self::sanitise(self.raw_factor(factor, candidate, params, budget));
            breakdown.push(FactorScore {
                factor,
                raw,
                weighted: raw * weight,
            });
        }
        ScoreCard {
            score: Self::sanitise(breakdown.total()),
            breakdown,
        }
    }
}

/// Remaining budget shared evenly across the trip's days, rounded down.
#[must_use]
pub fn daily_allowance(params: &TripParams, budget: &BudgetState) -> Money {
    let remaining = budget.remaining();
    remaining.split_floor(params.days).unwrap_or(remaining)
}

/// Full marks up to `allowance`, falling linearly to zero at twice it.
#[expect(
    clippy::float_arithmetic,
    reason = "linear degradation between one and two allowances"
)]
fn budget_fit(cost: Money, allowance: Money) -> f64 {
    if cost <= allowance {
        return 1.0;
    }
    if allowance.is_zero() || allowance.is_negative() {
        return 0.0;
    }
    let allowance_f = allowance.as_f64();
    let overshoot = cost.as_f64() - allowance_f;
    (1.0 - overshoot / allowance_f).max(0.0)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag counts are small and the match is a ratio"
)]
fn preference_match(candidate: &Candidate, params: &TripParams) -> f64 {
    let matched = params
        .preference_tags
        .iter()
        .filter(|tag| candidate.tags.contains(*tag))
        .count();
    let wanted = params.preference_tags.len().max(1);
    matched as f64 / wanted as f64
}

#[expect(
    clippy::float_arithmetic,
    reason = "proximity falls linearly with distance"
)]
fn proximity(distance_meters: f64, max_radius_meters: f64) -> f64 {
    1.0 - (distance_meters / max_radius_meters).min(1.0)
}

#[expect(clippy::float_arithmetic, reason = "rating is normalised to one")]
fn popularity(rating: f64) -> f64 {
    rating / MAX_POPULARITY
}
