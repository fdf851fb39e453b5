//! Data access trait for candidate venues.
//!
//! The planner never queries storage itself. Callers plug a
//! [`CandidateSource`] into the ranking pipeline, which asks it for the
//! raw candidates of one category in one city.

use crate::{Candidate, Category};

/// Read-only access to candidate venues.
///
/// An empty result is a valid answer ("no eligible venues") and is ranked
/// as an empty list rather than reported as a failure.
///
/// # Examples
///
/// ```rust
/// use itinera_core::{Candidate, CandidateSource, Category};
///
/// struct EmptyCity;
///
/// impl CandidateSource for EmptyCity {
///     fn fetch_candidates(&self, _city_id: &str, _category: Category) -> Vec<Candidate> {
///         Vec::new()
///     }
/// }
///
/// assert!(EmptyCity.fetch_candidates("bcn", Category::Hotel).is_empty());
/// ```
pub trait CandidateSource {
    /// Return the candidates for `category` in `city_id`.
    ///
    /// Implementations may return candidates of other categories; the
    /// pipeline filters by category regardless.
    fn fetch_candidates(&self, city_id: &str, category: Category) -> Vec<Candidate>;
}
