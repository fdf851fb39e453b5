//! Candidate ranking: filter, score in parallel, sort, truncate.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use itinera_core::{
    BudgetState, Candidate, CandidateSource, Category, Money, RankedLocation, ScoreCard, Scorer,
    TripParams,
};
use log::{debug, warn};
use rayon::prelude::*;

use crate::{RankError, RankingConfig, ScoringEngine};

/// Parameters for one ranking call.
///
/// # Examples
/// ```
/// use itinera_core::{Category, Money};
/// use itinera_core::test_support::trip_params;
/// use itinera_scorer::RankRequest;
///
/// let request = RankRequest::new(trip_params(1000, 5, &["museum"]), Category::Activity)
///     .with_current_spend(Money::from_major(200))
///     .with_limit(5);
/// assert_eq!(request.limit, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankRequest {
    /// The traveller's trip parameters.
    pub params: TripParams,
    /// Category to rank.
    pub category: Category,
    /// Spend already committed against the trip budget.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_spend: Money,
    /// Maximum number of results; the pipeline default applies when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub limit: Option<usize>,
    /// Drop candidates flagged as weather dependent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude_weather_sensitive: bool,
}

impl RankRequest {
    /// Construct a request with no spend, the default limit, and weather
    /// filtering off.
    #[must_use]
    pub const fn new(params: TripParams, category: Category) -> Self {
        Self {
            params,
            category,
            current_spend: Money::ZERO,
            limit: None,
            exclude_weather_sensitive: false,
        }
    }

    /// Set the committed spend while returning `self` for chaining.
    #[must_use]
    pub const fn with_current_spend(mut self, spend: Money) -> Self {
        self.current_spend = spend;
        self
    }

    /// Set the result limit while returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Enable or disable weather filtering while returning `self` for
    /// chaining.
    #[must_use]
    pub const fn excluding_weather_sensitive(mut self, exclude: bool) -> Self {
        self.exclude_weather_sensitive = exclude;
        self
    }
}

/// Counts describing what happened to the candidates of one ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankingDiagnostics {
    /// Candidates supplied or fetched.
    pub fetched: usize,
    /// Candidates dropped for belonging to another category.
    pub filtered_by_category: usize,
    /// Malformed candidates skipped.
    pub skipped_malformed: usize,
    /// Candidates dropped as weather dependent.
    pub filtered_by_weather: usize,
    /// Candidates dropped as unaffordable.
    pub filtered_by_budget: usize,
    /// Candidates scored.
    pub scored: usize,
    /// Wall-clock time spent ranking.
    pub elapsed: Duration,
}

/// Result of a ranking call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RankingResponse {
    /// Ranked locations, best first, with one-based ranks.
    pub ranked: Vec<RankedLocation>,
    /// Filtering and timing counts.
    pub diagnostics: RankingDiagnostics,
}

/// Orchestrates filtering, scoring, sorting and truncation.
///
/// The pipeline holds only configuration; every call works on its own
/// inputs, so one pipeline may serve concurrent requests.
///
/// # Examples
/// ```
/// use itinera_core::Category;
/// use itinera_core::test_support::{candidate, trip_params};
/// use itinera_scorer::{RankRequest, RankingPipeline};
///
/// # fn main() -> Result<(), itinera_scorer::RankError> {
/// let pipeline: RankingPipeline = RankingPipeline::default();
/// let candidates = vec![
///     candidate("h1", Category::Hotel, 150),
///     candidate("h2", Category::Hotel, 300),
/// ];
/// let request = RankRequest::new(trip_params(1000, 5, &[]), Category::Hotel);
/// let response = pipeline.rank(&candidates, &request)?;
/// assert_eq!(response.ranked[0].candidate.id, "h1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankingPipeline<S = ScoringEngine> {
    scorer: S,
    config: RankingConfig,
}

impl<S: Scorer> RankingPipeline<S> {
    /// Construct a pipeline around `scorer`.
    #[must_use]
    pub const fn new(scorer: S, config: RankingConfig) -> Self {
        Self { scorer, config }
    }

    /// The scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Fetch candidates from `source` for `city_id` and rank them.
    ///
    /// # Errors
    /// See [`RankingPipeline::rank`].
    pub fn recommend<C>(
        &self,
        source: &C,
        city_id: &str,
        request: &RankRequest,
    ) -> Result<RankingResponse, RankError>
    where
        C: CandidateSource + ?Sized,
    {
        request.params.validate()?;
        let candidates = source.fetch_candidates(city_id, request.category);
        debug!(
            "fetched {} {} candidates for {city_id}",
            candidates.len(),
            request.category
        );
        self.rank(&candidates, request)
    }

    /// Rank `candidates` for `request`.
    ///
    /// Candidates of other categories, malformed records, unaffordable
    /// venues and (when requested) weather-dependent venues are dropped
    /// before scoring. Survivors are sorted by score, then popularity, then
    /// id, and truncated to the limit.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidInput`] for invalid trip parameters and
    /// [`RankError::Budget`] when the current spend is negative or exceeds
    /// the total budget.
    pub fn rank(
        &self,
        candidates: &[Candidate],
        request: &RankRequest,
    ) -> Result<RankingResponse, RankError> {
        let started = Instant::now();
        request.params.validate()?;
        let budget = BudgetState::new(request.params.total_budget, request.current_spend)?;

        let mut diagnostics = RankingDiagnostics {
            fetched: candidates.len(),
            ..RankingDiagnostics::default()
        };
        let survivors = Self::filter(candidates, request, &budget, &mut diagnostics);
        diagnostics.scored = survivors.len();

        let mut scored: Vec<(&Candidate, ScoreCard)> = survivors
            .into_par_iter()
            .map(|candidate| {
                let card = self.scorer.score(candidate, &request.params, &budget);
                (candidate, card)
            })
            .collect();
        scored.sort_by(rank_order);

        let limit = request.limit.unwrap_or(self.config.default_limit);
        let ranked = scored
            .into_iter()
            .take(limit)
            .zip(1_u32..)
            .map(|((candidate, card), rank)| RankedLocation {
                candidate: candidate.clone(),
                score: card.score,
                breakdown: card.breakdown,
                rank,
            })
            .collect::<Vec<_>>();

        diagnostics.elapsed = started.elapsed();
        debug!(
            "ranked {} of {} {} candidates in {:?}",
            ranked.len(),
            diagnostics.fetched,
            request.category,
            diagnostics.elapsed
        );
        Ok(RankingResponse {
            ranked,
            diagnostics,
        })
    }

    fn filter<'a>(
        candidates: &'a [Candidate],
        request: &RankRequest,
        budget: &BudgetState,
        diagnostics: &mut RankingDiagnostics,
    ) -> Vec<&'a Candidate> {
        let mut survivors = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if candidate.category != request.category {
                diagnostics.filtered_by_category = diagnostics.filtered_by_category.saturating_add(1);
                continue;
            }
            if let Err(err) = candidate.validate() {
                warn!("skipping malformed candidate {:?}: {err}", candidate.id);
                diagnostics.skipped_malformed = diagnostics.skipped_malformed.saturating_add(1);
                continue;
            }
            if request.exclude_weather_sensitive && candidate.is_weather_sensitive() {
                diagnostics.filtered_by_weather = diagnostics.filtered_by_weather.saturating_add(1);
                continue;
            }
            // Costs are validated non-negative above, so only the boolean matters.
            if !budget.can_afford(candidate.estimated_cost).unwrap_or(false) {
                diagnostics.filtered_by_budget = diagnostics.filtered_by_budget.saturating_add(1);
                continue;
            }
            survivors.push(candidate);
        }
        survivors
    }
}

/// Score descending, then popularity descending, then id ascending.
fn rank_order(a: &(&Candidate, ScoreCard), b: &(&Candidate, ScoreCard)) -> Ordering {
    let (left, left_card) = a;
    let (right, right_card) = b;
    right_card
        .score
        .total_cmp(&left_card.score)
        .then_with(|| right.popularity_rating.total_cmp(&left.popularity_rating))
        .then_with(|| left.id.cmp(&right.id))
}
