//! Venues eligible for recommendation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::{InputError, LatLng, Money};

/// Highest popularity rating a venue can carry.
pub const MAX_POPULARITY: f64 = 5.0;

/// Kind of venue being recommended.
///
/// # Examples
/// ```
/// use itinera_core::Category;
///
/// assert_eq!(Category::Hotel.as_str(), "hotel");
/// assert_eq!("Restaurant".parse::<Category>(), Ok(Category::Restaurant));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Overnight accommodation.
    Hotel,
    /// Places to eat and drink.
    Restaurant,
    /// Things to do.
    Activity,
}

impl Category {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Activity => "activity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hotel" => Ok(Self::Hotel),
            "restaurant" => Ok(Self::Restaurant),
            "activity" => Ok(Self::Activity),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// A venue supplied by the external venue repository.
///
/// Candidates are read-only to the planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Candidate {
    /// Stable identifier; also the final ranking tie-breaker.
    pub id: String,
    /// Venue kind.
    pub category: Category,
    /// Venue position.
    pub coords: LatLng,
    /// Expected cost of choosing this venue.
    pub estimated_cost: Money,
    /// Descriptive tags matched against traveller preferences.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: BTreeSet<String>,
    /// Rating in `0.0..=5.0`.
    pub popularity_rating: f64,
    /// Whether the experience depends on good weather.
    #[cfg_attr(feature = "serde", serde(default))]
    pub weather_sensitive: Option<bool>,
}

impl Candidate {
    /// Check the fields a well-formed venue record must satisfy.
    ///
    /// # Errors
    /// Returns [`InputError`] for an empty id, a negative cost, invalid
    /// coordinates or a popularity rating outside `0.0..=5.0`.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.id.trim().is_empty() {
            return Err(InputError::EmptyIdentifier {
                field: "candidate.id",
            });
        }
        if self.estimated_cost.is_negative() {
            return Err(InputError::NegativeAmount {
                field: "candidate.estimatedCost",
                value: self.estimated_cost,
            });
        }
        self.coords.validate("candidate.coords")?;
        if !(0.0..=MAX_POPULARITY).contains(&self.popularity_rating) {
            return Err(InputError::PopularityOutOfRange {
                id: self.id.clone(),
                value: self.popularity_rating,
            });
        }
        Ok(())
    }

    /// Report whether the candidate is flagged as weather dependent.
    #[must_use]
    pub fn is_weather_sensitive(&self) -> bool {
        self.weather_sensitive.unwrap_or(false)
    }
}
