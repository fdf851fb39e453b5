//! WGS84 positions and great-circle distance.

use geo::{Distance, Haversine, Point};

use crate::InputError;

/// A latitude/longitude pair in degrees.
///
/// # Examples
/// ```
/// use itinera_core::LatLng;
///
/// let london = LatLng::new(51.5074, -0.1278);
/// let paris = LatLng::new(48.8566, 2.3522);
/// let metres = london.distance_meters(paris);
/// assert!((metres - 344_000.0).abs() < 10_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub lat: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub lng: f64,
}

impl LatLng {
    /// Construct a position without validation.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check the pair is finite and inside WGS84 bounds.
    ///
    /// # Errors
    /// Returns [`InputError::InvalidCoordinate`] naming `field`.
    pub fn validate(self, field: &'static str) -> Result<Self, InputError> {
        let finite = self.lat.is_finite() && self.lng.is_finite();
        if finite && (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng) {
            Ok(self)
        } else {
            Err(InputError::InvalidCoordinate {
                field,
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Convert into a `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    /// Great-circle distance to `other` in metres.
    #[must_use]
    pub fn distance_meters(self, other: Self) -> f64 {
        haversine_meters(self, other)
    }
}

/// Great-circle distance between two positions in metres.
#[must_use]
pub fn haversine_meters(from: LatLng, to: LatLng) -> f64 {
    Haversine.distance(from.to_point(), to.to_point())
}
