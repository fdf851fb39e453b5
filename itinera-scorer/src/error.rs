//! Error types raised while configuring scoring or ranking candidates.

use itinera_core::{BudgetError, InputError};
use thiserror::Error;

use crate::ScoreWeights;

/// Errors raised when scoring configuration is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringConfigError {
    /// Weights were negative, non-finite, or did not sum to one.
    #[error("score weights must be finite, non-negative and sum to 1.0, got {weights:?}")]
    InvalidWeightConfig {
        /// The rejected weights.
        weights: ScoreWeights,
    },
    /// The proximity radius was not a positive finite distance.
    #[error("proximity radius must be a positive number of metres, got {value}")]
    InvalidRadius {
        /// The rejected radius.
        value: f64,
    },
}

/// Errors returned by the ranking entry points.
///
/// Malformed candidates are not errors: they are skipped and counted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// Trip parameters failed validation.
    #[error("invalid ranking request: {0}")]
    InvalidInput(#[from] InputError),
    /// The current spend could not form a budget state.
    #[error("invalid budget: {0}")]
    Budget(#[from] BudgetError),
}
