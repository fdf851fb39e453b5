//! Test-only builders and an in-memory `CandidateSource` used by unit and
//! behaviour tests.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::{
    BudgetState, Candidate, CandidateSource, Category, DateRange, LatLng, Money, TripParams,
};

/// Anchor used by [`candidate`] and [`trip_params`]: central Barcelona.
pub const ANCHOR: LatLng = LatLng::new(41.3874, 2.1686);

/// In-memory `CandidateSource` keyed by city.
///
/// The source performs a linear scan and is intended only for small datasets.
///
/// # Examples
/// ```
/// use itinera_core::{CandidateSource, Category};
/// use itinera_core::test_support::{MemoryCandidateSource, candidate};
///
/// let source = MemoryCandidateSource::default()
///     .with_candidate("bcn", candidate("h1", Category::Hotel, 120));
/// assert_eq!(source.fetch_candidates("bcn", Category::Hotel).len(), 1);
/// ```
#[derive(Default, Debug, Clone)]
pub struct MemoryCandidateSource {
    cities: HashMap<String, Vec<Candidate>>,
}

impl MemoryCandidateSource {
    /// Register `candidate` under `city_id` while returning `self` for
    /// chaining.
    #[must_use]
    pub fn with_candidate(mut self, city_id: &str, candidate: Candidate) -> Self {
        self.cities
            .entry(city_id.to_owned())
            .or_default()
            .push(candidate);
        self
    }

    /// Register several candidates under `city_id`.
    #[must_use]
    pub fn with_candidates<I>(self, city_id: &str, candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        candidates
            .into_iter()
            .fold(self, |source, c| source.with_candidate(city_id, c))
    }
}

impl CandidateSource for MemoryCandidateSource {
    fn fetch_candidates(&self, city_id: &str, category: Category) -> Vec<Candidate> {
        self.cities
            .get(city_id)
            .map(|candidates| {
                candidates
                    .iter()
                    .filter(|c| c.category == category)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Build a candidate at the anchor with a popularity of `3.0` and no tags.
///
/// `cost_major` is expressed in whole currency units.
#[must_use]
pub fn candidate(id: &str, category: Category, cost_major: i64) -> Candidate {
    Candidate {
        id: id.to_owned(),
        category,
        coords: ANCHOR,
        estimated_cost: Money::from_major(cost_major),
        tags: BTreeSet::new(),
        popularity_rating: 3.0,
        weather_sensitive: None,
    }
}

/// Collect string slices into a tag set.
#[must_use]
pub fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|tag| (*tag).to_owned()).collect()
}

/// Trip parameters anchored at [`ANCHOR`] for one traveller.
///
/// `total_major` is the whole-unit budget spread over `days`.
#[must_use]
pub fn trip_params(total_major: i64, days: u32, preference_tags: &[&str]) -> TripParams {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
    let end = start
        .checked_add_days(chrono::Days::new(u64::from(days.max(1))))
        .unwrap_or(start);
    TripParams {
        total_budget: Money::from_major(total_major),
        group_size: 1,
        days,
        date_range: DateRange { start, end },
        preference_tags: tags(preference_tags),
        anchor: ANCHOR,
    }
}

/// Budget state with `committed_major` already spent from `params`.
///
/// Falls back to a zero commitment when `committed_major` is out of range.
#[must_use]
pub fn budget_state(params: &TripParams, committed_major: i64) -> BudgetState {
    BudgetState::new(params.total_budget, Money::from_major(committed_major))
        .or_else(|_| BudgetState::new(params.total_budget, Money::ZERO))
        .unwrap_or_default()
}
