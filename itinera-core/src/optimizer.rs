//! Route optimization contract: requests, outcomes and the optimizer trait.

use std::time::Duration;

use thiserror::Error;

use crate::{InputError, Route, RoutePoint, StopSignal};

/// Parameters for a route optimization call.
///
/// # Examples
/// ```rust
/// use itinera_core::{RoutePoint, RouteRequest};
///
/// let request = RouteRequest::new(vec![
///     RoutePoint::new("Hotel", 41.387, 2.170),
///     RoutePoint::new("Museum", 41.385, 2.180),
/// ]);
/// assert_eq!(request.points.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRequest {
    /// Points to sequence, in the caller's order.
    pub points: Vec<RoutePoint>,
}

impl RouteRequest {
    /// Construct a request over `points`.
    #[must_use]
    pub const fn new(points: Vec<RoutePoint>) -> Self {
        Self { points }
    }

    /// Validate coordinates and the `start` role.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidInput`] for malformed coordinates or more
    /// than one `start` point.
    pub fn validate(&self) -> Result<(), RouteError> {
        crate::route::validate_points(&self.points)?;
        Ok(())
    }
}

/// Statistics describing how an optimization call went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteDiagnostics {
    /// Wall-clock time spent optimizing.
    pub solve_time: Duration,
    /// Number of improving 2-opt reversals applied.
    pub swaps: u64,
    /// Number of full 2-opt sweeps performed.
    pub passes: u64,
}

/// Response from a route optimization call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizedRoute {
    /// The ordered route with segments and totals.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub route: Route,
    /// Whether the search stopped early on a [`StopSignal`]; the route is
    /// then the best order found before stopping.
    pub cancelled: bool,
    /// Search statistics.
    pub diagnostics: RouteDiagnostics,
}

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Request parameters were invalid, e.g. out-of-range coordinates.
    #[error("invalid route request: {0}")]
    InvalidInput(#[from] InputError),
}

/// Produce a short visiting order for a set of points.
///
/// Implementations must return a permutation of the input points, keep a
/// `start` point (or the first point) in position 0, and honour `stop` by
/// returning their best order so far with `cancelled` set.
/// Optimizers must be `Send + Sync` to serve concurrent requests.
pub trait RouteOptimizer: Send + Sync {
    /// Optimize a request, producing an ordered route or an error.
    ///
    /// # Errors
    /// Returns [`RouteError::InvalidInput`] for malformed requests.
    fn optimize(
        &self,
        request: &RouteRequest,
        stop: &StopSignal,
    ) -> Result<OptimizedRoute, RouteError>;
}
