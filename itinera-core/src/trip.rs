//! Trip parameters supplied by the traveller for one ranking call.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{InputError, LatLng, Money};

/// Inclusive calendar span of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First day of the trip.
    pub start: NaiveDate,
    /// Last day of the trip; must be after `start`.
    pub end: NaiveDate,
}

/// Immutable description of the trip being planned.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use chrono::NaiveDate;
/// use itinera_core::{DateRange, LatLng, Money, TripParams};
///
/// # fn main() -> Result<(), itinera_core::InputError> {
/// let params = TripParams {
///     total_budget: Money::from_major(1000),
///     group_size: 2,
///     days: 5,
///     date_range: DateRange {
///         start: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
///         end: NaiveDate::from_ymd_opt(2026, 5, 6).expect("valid date"),
///     },
///     preference_tags: BTreeSet::from(["museum".to_owned()]),
///     anchor: LatLng::new(41.3874, 2.1686),
/// };
/// params.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TripParams {
    /// Total spend permitted for the trip.
    pub total_budget: Money,
    /// Number of travellers, at least one.
    pub group_size: u32,
    /// Trip length in days, at least one.
    pub days: u32,
    /// Calendar span of the trip.
    pub date_range: DateRange,
    /// Tags the traveller is interested in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preference_tags: BTreeSet<String>,
    /// Reference location used for proximity scoring.
    pub anchor: LatLng,
}

impl TripParams {
    /// Validate every field, returning the first problem found.
    ///
    /// # Errors
    /// Returns [`InputError`] for negative budgets, an empty party, zero
    /// days, an inverted date range, or an invalid anchor.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.total_budget.is_negative() {
            return Err(InputError::NegativeAmount {
                field: "totalBudget",
                value: self.total_budget,
            });
        }
        if self.group_size == 0 {
            return Err(InputError::ZeroGroupSize);
        }
        if self.days == 0 {
            return Err(InputError::ZeroDays);
        }
        if self.date_range.start >= self.date_range.end {
            return Err(InputError::InvalidDateRange {
                start: self.date_range.start,
                end: self.date_range.end,
            });
        }
        self.anchor.validate("anchor")?;
        Ok(())
    }
}
