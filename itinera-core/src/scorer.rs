//! Score candidates against trip parameters.
//!
//! The [`Scorer`] trait assigns a composite fit score to a [`Candidate`]
//! given the traveller's [`TripParams`] and the budget state at call time.
//! Scores carry a per-factor breakdown so rankings can be explained.

use std::fmt;

use crate::{BudgetState, Candidate, TripParams};

/// A named contribution to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    /// How comfortably the cost fits the per-day allowance.
    BudgetFit,
    /// Overlap between venue tags and traveller preferences.
    PreferenceMatch,
    /// Closeness to the trip anchor.
    Proximity,
    /// Normalised popularity rating.
    Popularity,
}

impl Factor {
    /// Every factor in evaluation order.
    pub const ALL: [Self; 4] = [
        Self::BudgetFit,
        Self::PreferenceMatch,
        Self::Proximity,
        Self::Popularity,
    ];

    /// Return the factor's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BudgetFit => "budgetFit",
            Self::PreferenceMatch => "preferenceMatch",
            Self::Proximity => "proximity",
            Self::Popularity => "popularity",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw and weighted value of one factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    /// Which factor this is.
    pub factor: Factor,
    /// Normalised factor value in `0.0..=1.0`.
    pub raw: f64,
    /// `raw` multiplied by the factor's weight.
    pub weighted: f64,
}

/// Factor contributions in the order they were evaluated.
///
/// # Examples
/// ```
/// use itinera_core::{Factor, FactorScore, ScoreBreakdown};
///
/// let mut breakdown = ScoreBreakdown::default();
/// breakdown.push(FactorScore { factor: Factor::Popularity, raw: 0.8, weighted: 0.12 });
/// assert_eq!(breakdown.get(Factor::Popularity).map(|f| f.raw), Some(0.8));
/// assert!((breakdown.total() - 0.12).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreBreakdown {
    entries: Vec<FactorScore>,
}

impl ScoreBreakdown {
    /// Append a contribution.
    pub fn push(&mut self, entry: FactorScore) {
        self.entries.push(entry);
    }

    /// Look up a factor's contribution.
    #[must_use]
    pub fn get(&self, factor: Factor) -> Option<&FactorScore> {
        self.entries.iter().find(|entry| entry.factor == factor)
    }

    /// Iterate contributions in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &FactorScore> {
        self.entries.iter()
    }

    /// Sum of weighted contributions.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "composite score is a sum of weighted factors"
    )]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.weighted).sum()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ScoreBreakdown {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeStruct};

        struct Entry<'a>(&'a FactorScore);

        impl serde::Serialize for Entry<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut entry = serializer.serialize_struct("FactorScore", 2)?;
                entry.serialize_field("raw", &self.0.raw)?;
                entry.serialize_field("weighted", &self.0.weighted)?;
                entry.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.factor.as_str(), &Entry(entry))?;
        }
        map.end()
    }
}

/// A candidate's composite score before ranking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreCard {
    /// Composite score in `0.0..=1.0`.
    pub score: f64,
    /// Per-factor contributions summing to `score`.
    pub breakdown: ScoreBreakdown,
}

/// A scored candidate placed in a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLocation {
    /// The ranked venue.
    pub candidate: Candidate,
    /// Composite score in `0.0..=1.0`.
    pub score: f64,
    /// Per-factor contributions.
    pub breakdown: ScoreBreakdown,
    /// One-based position in the ranking.
    pub rank: u32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for RankedLocation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RankedLocation", 4)?;
        state.serialize_field("candidateId", &self.candidate.id)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("breakdown", &self.breakdown)?;
        state.serialize_field("rank", &self.rank)?;
        state.end()
    }
}

/// Calculate a composite fit score for a candidate.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so candidates can
/// be scored in parallel. Scoring is infallible and deterministic: identical
/// inputs always produce identical cards.
///
/// Implementations must:
/// - Produce finite scores in `0.0..=1.0`.
/// - Record a breakdown whose weighted values sum to the score.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{BudgetState, Candidate, ScoreCard, Scorer, TripParams};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _: &Candidate, _: &TripParams, _: &BudgetState) -> ScoreCard {
///         ScoreCard::default()
///     }
/// }
///
/// assert_eq!(FlatScorer::sanitise(f64::NAN), 0.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score card for `candidate`.
    fn score(&self, candidate: &Candidate, params: &TripParams, budget: &BudgetState)
    -> ScoreCard;

    /// Clamp and validate a raw factor value.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(value: f64) -> f64
    where
        Self: Sized,
    {
        if !value.is_finite() {
            return 0.0;
        }
        value.clamp(0.0, 1.0)
    }
}
