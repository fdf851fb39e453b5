//! Validation failures raised at the planning boundary.

use chrono::NaiveDate;
use thiserror::Error;

use crate::Money;

/// Malformed or out-of-range input supplied to the planner.
///
/// Every variant names the offending field so callers can report a precise
/// reason. Inputs are never coerced into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A monetary amount was below zero.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount {
        /// Name of the rejected field.
        field: &'static str,
        /// Value supplied by the caller.
        value: Money,
    },
    /// The travelling party was empty.
    #[error("group size must be at least 1")]
    ZeroGroupSize,
    /// The trip lasted zero days.
    #[error("trip must last at least one day")]
    ZeroDays,
    /// The date range was empty or inverted.
    #[error("date range start {start} must be before end {end}")]
    InvalidDateRange {
        /// First day of the trip.
        start: NaiveDate,
        /// Last day of the trip.
        end: NaiveDate,
    },
    /// A coordinate pair was outside WGS84 bounds or not finite.
    #[error("{field} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate {
        /// Name of the rejected field.
        field: &'static str,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// A popularity rating fell outside `0.0..=5.0`.
    #[error("popularity rating {value} for {id} must be between 0 and 5")]
    PopularityOutOfRange {
        /// Candidate identifier.
        id: String,
        /// Rating supplied by the source.
        value: f64,
    },
    /// An identifier was empty or whitespace.
    #[error("{field} must not be empty")]
    EmptyIdentifier {
        /// Name of the rejected field.
        field: &'static str,
    },
    /// More than one route point claimed the given role.
    #[error("at most one route point may have role {role}")]
    DuplicateRole {
        /// Role that was claimed more than once.
        role: &'static str,
    },
    /// Already-committed spend exceeded the total budget.
    #[error("committed spend {committed} exceeds total budget {total}")]
    CommittedExceedsTotal {
        /// Total trip budget.
        total: Money,
        /// Spend already committed.
        committed: Money,
    },
}
