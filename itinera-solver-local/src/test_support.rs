//! Test-only utilities for `itinera-solver-local`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use itinera_core::{Route, RoutePoint};

/// Construct a waypoint.
///
/// # Examples
/// ```rust
/// use itinera_solver_local::test_support::point;
///
/// let museum = point("Museum", 41.39, 2.17);
/// assert_eq!(museum.name, "Museum");
/// ```
#[must_use]
pub fn point(name: &str, latitude: f64, longitude: f64) -> RoutePoint {
    RoutePoint::new(name, latitude, longitude)
}

/// Names of the route's points in visiting order.
#[must_use]
pub fn names(route: &Route) -> Vec<&str> {
    route.points.iter().map(|p| p.name.as_str()).collect()
}

/// `count` waypoints spaced evenly on a circle around the origin, listed
/// in a scrambled order.
///
/// The order steps around the circle by a stride coprime with `count`, so
/// every point appears exactly once and consecutive entries are far apart.
///
/// # Examples
/// ```rust
/// use itinera_solver_local::test_support::ring;
///
/// let points = ring(8, 0.01);
/// assert_eq!(points.len(), 8);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ring positions are angles derived from small indices"
)]
pub fn ring(count: usize, radius_degrees: f64) -> Vec<RoutePoint> {
    let stride = (2..count).find(|s| gcd(*s, count) == 1).unwrap_or(1);
    (0..count)
        .map(|step| {
            let slot = step.saturating_mul(stride).checked_rem(count).unwrap_or(0);
            let angle = std::f64::consts::TAU * slot as f64 / count as f64;
            point(
                &format!("r{slot}"),
                radius_degrees * angle.sin(),
                radius_degrees * angle.cos(),
            )
        })
        .collect()
}

const fn gcd(a: usize, b: usize) -> usize {
    let mut x = a;
    let mut y = b;
    while let Some(rem) = x.checked_rem(y) {
        x = y;
        y = rem;
    }
    x
}
