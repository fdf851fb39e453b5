//! Routes through chosen venues.
//!
//! A [`Route`] is always recomputed in full: ordered points, the segments
//! between consecutive points, and aggregate distance and duration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{InputError, LatLng};

/// Role a point plays in a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteRole {
    /// Pinned first point.
    Start,
    /// Freely reorderable stop.
    #[default]
    Waypoint,
    /// Intended final stop, reordered like a waypoint.
    End,
}

impl RouteRole {
    /// Return the role as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Waypoint => "waypoint",
            Self::End => "end",
        }
    }
}

/// How a traveller moves between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// By car or taxi.
    Driving,
    /// By public transport.
    Transit,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
            Self::Transit => "transit",
        })
    }
}

/// Raised when a travel mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode {value:?}; expected walking, driving or transit")]
pub struct ParseTravelModeError {
    /// The rejected name.
    pub value: String,
}

impl FromStr for TravelMode {
    type Err = ParseTravelModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" => Ok(Self::Walking),
            "driving" => Ok(Self::Driving),
            "transit" => Ok(Self::Transit),
            _ => Err(ParseTravelModeError {
                value: s.to_owned(),
            }),
        }
    }
}

/// A place to visit, supplied by the caller.
///
/// # Examples
/// ```
/// use itinera_core::{RoutePoint, RouteRole};
///
/// let hotel = RoutePoint::new("Hotel", 41.387, 2.170).with_role(RouteRole::Start);
/// assert_eq!(hotel.role, RouteRole::Start);
/// assert!(hotel.business_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoutePoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Display name.
    pub name: String,
    /// Role in the route; only `start` is pinned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: RouteRole,
    /// Identifier of the venue behind this point, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub business_id: Option<String>,
    /// Mode used to travel into this point; the optimizer default applies
    /// when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub arrival_mode: Option<TravelMode>,
}

impl RoutePoint {
    /// Construct a waypoint.
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            role: RouteRole::Waypoint,
            business_id: None,
            arrival_mode: None,
        }
    }

    /// Set the role while returning `self` for chaining.
    #[must_use]
    pub fn with_role(mut self, role: RouteRole) -> Self {
        self.role = role;
        self
    }

    /// Set the venue identifier while returning `self` for chaining.
    #[must_use]
    pub fn with_business_id(mut self, business_id: impl Into<String>) -> Self {
        self.business_id = Some(business_id.into());
        self
    }

    /// Set the arrival mode while returning `self` for chaining.
    #[must_use]
    pub fn with_arrival_mode(mut self, mode: TravelMode) -> Self {
        self.arrival_mode = Some(mode);
        self
    }

    /// Position of the point.
    #[must_use]
    pub const fn location(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Check every point has valid coordinates and at most one is the start.
///
/// # Errors
/// Returns [`InputError::InvalidCoordinate`] or
/// [`InputError::DuplicateRole`].
pub fn validate_points(points: &[RoutePoint]) -> Result<(), InputError> {
    let mut starts = 0_usize;
    for point in points {
        point.location().validate("routePoint")?;
        if point.role == RouteRole::Start {
            starts = starts.saturating_add(1);
        }
    }
    if starts > 1 {
        return Err(InputError::DuplicateRole {
            role: RouteRole::Start.as_str(),
        });
    }
    Ok(())
}

/// Travel between two consecutive points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteSegment {
    /// Departure point.
    pub from: RoutePoint,
    /// Arrival point.
    pub to: RoutePoint,
    /// Great-circle distance in metres.
    pub distance_meters: f64,
    /// Estimated travel time in seconds.
    pub duration_seconds: f64,
    /// Mode used for the estimate.
    pub mode: TravelMode,
}

/// Aggregate cost of visiting points in order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteMetrics {
    /// Sum of segment distances in metres.
    pub total_distance_meters: f64,
    /// Sum of segment durations in seconds.
    pub total_duration_seconds: f64,
}

/// An ordered visit plan.
///
/// # Examples
/// ```
/// use itinera_core::Route;
///
/// let route = Route::empty();
/// assert!(route.points.is_empty());
/// assert_eq!(route.total_distance_meters, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Route {
    /// Points in visiting order.
    pub points: Vec<RoutePoint>,
    /// Segments between consecutive points.
    pub segments: Vec<RouteSegment>,
    /// Sum of segment distances in metres.
    pub total_distance_meters: f64,
    /// Sum of segment durations in seconds.
    pub total_duration_seconds: f64,
}

impl Route {
    /// Assemble a route from ordered points and their segments.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route totals sum segment measurements"
    )]
    pub fn from_segments(points: Vec<RoutePoint>, segments: Vec<RouteSegment>) -> Self {
        let total_distance_meters = segments.iter().map(|s| s.distance_meters).sum();
        let total_duration_seconds = segments.iter().map(|s| s.duration_seconds).sum();
        Self {
            points,
            segments,
            total_distance_meters,
            total_duration_seconds,
        }
    }

    /// Construct an empty route.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aggregate distance and duration.
    #[must_use]
    pub const fn metrics(&self) -> RouteMetrics {
        RouteMetrics {
            total_distance_meters: self.total_distance_meters,
            total_duration_seconds: self.total_duration_seconds,
        }
    }
}
