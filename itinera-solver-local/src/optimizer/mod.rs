//! `LocalSearchOptimizer`: nearest-neighbour construction refined by 2-opt.
//!
//! The `start` point, or the first point when none is tagged, stays first.
//! Points may choose the travel mode used to reach them.

use std::time::Instant;

use itinera_core::{
    OptimizedRoute, Route, RouteDiagnostics, RouteError, RouteMetrics, RouteOptimizer,
    RoutePoint, RouteRequest, RouteRole, RouteSegment, StopSignal, TravelMode, haversine_meters,
};
use log::{debug, warn};
use thiserror::Error;

use crate::tour::{
    DistanceMatrix, SearchLimits, SearchOutcome, nearest_neighbour, start_first, two_opt,
};

/// Fewest points for which reordering can shorten a route.
pub const MIN_POINTS_TO_OPTIMIZE: usize = 3;

const METRES_PER_SECOND_PER_KMH: f64 = 1_000.0 / 3_600.0;

/// Average travel speeds per mode, in km/h.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TravelSpeeds {
    /// Walking speed.
    pub walking_kmh: f64,
    /// Public transport speed.
    pub transit_kmh: f64,
    /// Driving speed.
    pub driving_kmh: f64,
}

impl TravelSpeeds {
    /// Speed for `mode` in km/h.
    #[must_use]
    pub const fn for_mode(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walking => self.walking_kmh,
            TravelMode::Transit => self.transit_kmh,
            TravelMode::Driving => self.driving_kmh,
        }
    }
}

impl Default for TravelSpeeds {
    fn default() -> Self {
        Self {
            walking_kmh: 5.0,
            transit_kmh: 25.0,
            driving_kmh: 40.0,
        }
    }
}

/// Configuration for [`LocalSearchOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct OptimizerConfig {
    /// Average speed per travel mode.
    pub speeds: TravelSpeeds,
    /// Mode used for segments whose destination sets no arrival mode.
    pub default_mode: TravelMode,
    /// The 2-opt search applies at most `iteration_factor * n * n` moves.
    pub iteration_factor: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            speeds: TravelSpeeds::default(),
            default_mode: TravelMode::Walking,
            iteration_factor: 1,
        }
    }
}

impl OptimizerConfig {
    /// Validate speeds and the iteration factor and return a copy.
    ///
    /// # Errors
    /// Returns [`OptimizerConfigError`] for a speed that is not a positive
    /// finite number or a zero iteration factor.
    pub fn validate(self) -> Result<Self, OptimizerConfigError> {
        for mode in [TravelMode::Walking, TravelMode::Transit, TravelMode::Driving] {
            let value = self.speeds.for_mode(mode);
            if !value.is_finite() || value <= 0.0 {
                return Err(OptimizerConfigError::InvalidSpeed { mode, value });
            }
        }
        if self.iteration_factor == 0 {
            return Err(OptimizerConfigError::ZeroIterationFactor);
        }
        Ok(self)
    }
}

/// Errors raised when optimizer configuration is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerConfigError {
    /// A travel speed was zero, negative or not finite.
    #[error("{mode} speed must be a positive number of km/h, got {value}")]
    InvalidSpeed {
        /// Mode whose speed was rejected.
        mode: TravelMode,
        /// The rejected speed.
        value: f64,
    },
    /// The iteration factor was zero, which would forbid every move.
    #[error("iteration factor must be at least one")]
    ZeroIterationFactor,
}

/// Route optimizer using nearest-neighbour construction and 2-opt
/// refinement over great-circle distances.
///
/// The optimizer holds only configuration and may serve concurrent calls.
///
/// # Examples
/// ```
/// use itinera_core::{RouteOptimizer, RoutePoint, RouteRequest, RouteRole, StopSignal};
/// use itinera_solver_local::LocalSearchOptimizer;
///
/// # fn main() -> Result<(), itinera_core::RouteError> {
/// let optimizer = LocalSearchOptimizer::default();
/// let request = RouteRequest::new(vec![
///     RoutePoint::new("Hotel", 41.3870, 2.1700).with_role(RouteRole::Start),
///     RoutePoint::new("Far", 41.4000, 2.1700),
///     RoutePoint::new("Near", 41.3900, 2.1700),
/// ]);
/// let optimized = optimizer.optimize(&request, &StopSignal::never())?;
/// let names: Vec<_> = optimized.route.points.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["Hotel", "Near", "Far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalSearchOptimizer {
    config: OptimizerConfig,
}

impl LocalSearchOptimizer {
    /// Construct an optimizer after validating `config`.
    ///
    /// # Errors
    /// Returns [`OptimizerConfigError`] when the configuration is unusable.
    pub fn new(config: OptimizerConfig) -> Result<Self, OptimizerConfigError> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    /// The validated configuration in use.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Distance and duration of visiting `points` in the given order.
    #[must_use]
    pub fn metrics(&self, points: &[RoutePoint]) -> RouteMetrics {
        Route::from_segments(Vec::new(), self.segments(points)).metrics()
    }

    /// Build the full route for `points` in the given order.
    #[must_use]
    pub fn route(&self, points: Vec<RoutePoint>) -> Route {
        let segments = self.segments(&points);
        Route::from_segments(points, segments)
    }

    fn segments(&self, points: &[RoutePoint]) -> Vec<RouteSegment> {
        points
            .windows(2)
            .filter_map(|leg| match leg {
                [from, to] => Some(self.segment(from, to)),
                _ => None,
            })
            .collect()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "duration is distance over average speed"
    )]
    fn segment(&self, from: &RoutePoint, to: &RoutePoint) -> RouteSegment {
        let mode = to.arrival_mode.unwrap_or(self.config.default_mode);
        let distance_meters = haversine_meters(from.location(), to.location());
        let metres_per_second = self.config.speeds.for_mode(mode) * METRES_PER_SECOND_PER_KMH;
        RouteSegment {
            from: from.clone(),
            to: to.clone(),
            distance_meters,
            duration_seconds: distance_meters / metres_per_second,
            mode,
        }
    }

    fn move_cap(&self, size: usize) -> u64 {
        let n = u64::try_from(size).unwrap_or(u64::MAX);
        u64::from(self.config.iteration_factor)
            .saturating_mul(n)
            .saturating_mul(n)
    }

    /// Order point indices, returning the chosen tour and search statistics.
    fn search(&self, points: &[RoutePoint], stop: &StopSignal) -> (Vec<usize>, SearchOutcome) {
        let matrix = DistanceMatrix::new(points);
        let start = start_index(points);
        let limits = SearchLimits {
            max_moves: self.move_cap(points.len()),
            stop,
        };

        let mut greedy = nearest_neighbour(&matrix, start);
        debug!(
            "nearest-neighbour tour over {} points: {:.1} m",
            points.len(),
            matrix.path_length(&greedy)
        );
        let first = two_opt(&matrix, &mut greedy, limits);

        let mut baseline = start_first(start, points.len());
        let second = if first.cancelled {
            SearchOutcome {
                cancelled: true,
                ..SearchOutcome::default()
            }
        } else {
            two_opt(&matrix, &mut baseline, limits)
        };

        let outcome = SearchOutcome {
            swaps: first.swaps.saturating_add(second.swaps),
            passes: first.passes.saturating_add(second.passes),
            cancelled: first.cancelled || second.cancelled,
        };
        let greedy_length = matrix.path_length(&greedy);
        let baseline_length = matrix.path_length(&baseline);
        debug!(
            "2-opt refined tours: greedy {greedy_length:.1} m, input order {baseline_length:.1} m"
        );
        if baseline_length < greedy_length {
            (baseline, outcome)
        } else {
            (greedy, outcome)
        }
    }
}

/// Index of the `start` point, else the first point.
fn start_index(points: &[RoutePoint]) -> usize {
    points
        .iter()
        .position(|p| p.role == RouteRole::Start)
        .unwrap_or(0)
}

impl RouteOptimizer for LocalSearchOptimizer {
    fn optimize(
        &self,
        request: &RouteRequest,
        stop: &StopSignal,
    ) -> Result<OptimizedRoute, RouteError> {
        request.validate()?;
        let started_at = Instant::now();
        let points = &request.points;

        if points.len() < MIN_POINTS_TO_OPTIMIZE {
            return Ok(OptimizedRoute {
                route: self.route(points.clone()),
                cancelled: false,
                diagnostics: RouteDiagnostics {
                    solve_time: started_at.elapsed(),
                    swaps: 0,
                    passes: 0,
                },
            });
        }

        let (tour, outcome) = self.search(points, stop);
        let ordered: Vec<RoutePoint> = tour
            .iter()
            .filter_map(|idx| points.get(*idx).cloned())
            .collect();
        if outcome.cancelled {
            warn!(
                "route optimization over {} points stopped early after {} swaps",
                points.len(),
                outcome.swaps
            );
        }

        Ok(OptimizedRoute {
            route: self.route(ordered),
            cancelled: outcome.cancelled,
            diagnostics: RouteDiagnostics {
                solve_time: started_at.elapsed(),
                swaps: outcome.swaps,
                passes: outcome.passes,
            },
        })
    }
}

#[cfg(test)]
mod tests;
