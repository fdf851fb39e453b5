//! Unit tests for the local search optimizer.
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare float route metrics"
)]

use std::time::Duration;

use itinera_core::{RoutePoint, RouteRequest, RouteRole, StopSignal, TravelMode};
use rstest::{fixture, rstest};

use super::*;
use crate::test_support::{names, point};

#[fixture]
fn optimizer() -> LocalSearchOptimizer {
    LocalSearchOptimizer::default()
}

fn optimize(optimizer: &LocalSearchOptimizer, points: Vec<RoutePoint>) -> OptimizedRoute {
    optimizer
        .optimize(&RouteRequest::new(points), &StopSignal::never())
        .expect("valid request")
}

#[rstest]
fn visits_nearer_stop_first(optimizer: LocalSearchOptimizer) {
    let optimized = optimize(
        &optimizer,
        vec![
            point("Hotel", 41.3870, 2.1700).with_role(RouteRole::Start),
            point("Far", 41.4000, 2.1700),
            point("Near", 41.3900, 2.1700),
        ],
    );
    assert_eq!(names(&optimized.route), ["Hotel", "Near", "Far"]);
    assert!(!optimized.cancelled);
    assert_eq!(optimized.route.segments.len(), 2);
}

#[rstest]
fn straight_line_comes_back_in_order(optimizer: LocalSearchOptimizer) {
    let optimized = optimize(
        &optimizer,
        vec![
            point("A", 0.0, 0.00),
            point("D", 0.0, 0.03),
            point("B", 0.0, 0.01),
            point("C", 0.0, 0.02),
        ],
    );
    assert_eq!(names(&optimized.route), ["A", "B", "C", "D"]);
}

#[rstest]
fn start_role_is_pinned_even_when_listed_last(optimizer: LocalSearchOptimizer) {
    let optimized = optimize(
        &optimizer,
        vec![
            point("B", 0.0, 0.01),
            point("C", 0.0, 0.02),
            point("A", 0.0, 0.00).with_role(RouteRole::Start),
        ],
    );
    assert_eq!(names(&optimized.route), ["A", "B", "C"]);
}

#[rstest]
fn end_role_listed_first_stays_first(optimizer: LocalSearchOptimizer) {
    let optimized = optimize(
        &optimizer,
        vec![
            point("Station", 0.0, 0.00).with_role(RouteRole::End),
            point("A", 0.0, 0.01),
            point("B", 0.0, 0.02),
        ],
    );
    assert_eq!(names(&optimized.route), ["Station", "A", "B"]);
}

#[rstest]
fn end_role_is_ordered_like_a_waypoint(optimizer: LocalSearchOptimizer) {
    let points = vec![
        point("A", 0.0, 0.00),
        point("E", 0.0, 0.01).with_role(RouteRole::End),
        point("B", 0.0, 0.10),
    ];
    let input_length = optimizer.metrics(&points).total_distance_meters;
    let optimized = optimize(&optimizer, points);
    assert_eq!(names(&optimized.route), ["A", "E", "B"]);
    assert!(optimized.route.total_distance_meters <= input_length + 1e-6);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn short_inputs_come_back_unchanged(optimizer: LocalSearchOptimizer, #[case] count: usize) {
    let points: Vec<_> = [("Far", 0.05), ("Near", 0.01)]
        .into_iter()
        .take(count)
        .map(|(name, lng)| point(name, 0.0, lng))
        .collect();
    let optimized = optimize(&optimizer, points.clone());
    assert_eq!(optimized.route.points, points);
    assert_eq!(optimized.route.segments.len(), count.saturating_sub(1));
    assert_eq!(optimized.diagnostics.swaps, 0);
}

#[rstest]
fn two_points_carry_metrics(optimizer: LocalSearchOptimizer) {
    let optimized = optimize(
        &optimizer,
        vec![point("A", 0.0, 0.0), point("B", 0.0, 0.01)],
    );
    assert!(optimized.route.total_distance_meters > 1_000.0);
    assert!(optimized.route.total_duration_seconds > 0.0);
}

#[rstest]
fn duplicate_start_is_rejected(optimizer: LocalSearchOptimizer) {
    let request = RouteRequest::new(vec![
        point("A", 0.0, 0.0).with_role(RouteRole::Start),
        point("B", 0.0, 0.01).with_role(RouteRole::Start),
        point("C", 0.0, 0.02),
    ]);
    let err = optimizer
        .optimize(&request, &StopSignal::never())
        .expect_err("two starts");
    assert!(matches!(err, RouteError::InvalidInput(_)));
}

#[rstest]
fn out_of_range_coordinates_are_rejected(optimizer: LocalSearchOptimizer) {
    let request = RouteRequest::new(vec![point("A", 95.0, 0.0), point("B", 0.0, 0.0)]);
    assert!(optimizer.optimize(&request, &StopSignal::never()).is_err());
}

#[rstest]
fn cancelled_request_still_returns_a_valid_route(optimizer: LocalSearchOptimizer) {
    let stop = StopSignal::flag();
    stop.cancel();
    let points = vec![
        point("A", 0.0, 0.00).with_role(RouteRole::Start),
        point("D", 0.0, 0.03),
        point("B", 0.0, 0.01),
        point("C", 0.0, 0.02),
    ];
    let optimized = optimizer
        .optimize(&RouteRequest::new(points.clone()), &stop)
        .expect("cancellation is not an error");
    assert!(optimized.cancelled);
    assert_eq!(optimized.route.points.len(), points.len());
    let input_order = optimizer.metrics(&points);
    assert!(optimized.route.total_distance_meters <= input_order.total_distance_meters);
}

#[rstest]
fn expired_deadline_reports_cancellation(optimizer: LocalSearchOptimizer) {
    let stop = StopSignal::after(Duration::ZERO);
    let optimized = optimizer
        .optimize(
            &RouteRequest::new(vec![
                point("A", 0.0, 0.00),
                point("C", 0.0, 0.02),
                point("B", 0.0, 0.01),
            ]),
            &stop,
        )
        .expect("deadline is not an error");
    assert!(optimized.cancelled);
}

#[rstest]
fn arrival_mode_overrides_default(optimizer: LocalSearchOptimizer) {
    let walk = optimizer.metrics(&[point("A", 0.0, 0.0), point("B", 0.0, 0.1)]);
    let drive = optimizer.metrics(&[
        point("A", 0.0, 0.0),
        point("B", 0.0, 0.1).with_arrival_mode(TravelMode::Driving),
    ]);
    assert_eq!(walk.total_distance_meters, drive.total_distance_meters);
    let ratio = walk.total_duration_seconds / drive.total_duration_seconds;
    assert!((ratio - 8.0).abs() < 1e-9, "walking 5 km/h vs driving 40 km/h: {ratio}");
}

#[rstest]
fn segments_use_destination_mode(optimizer: LocalSearchOptimizer) {
    let route = optimizer.route(vec![
        point("A", 0.0, 0.0),
        point("B", 0.0, 0.01).with_arrival_mode(TravelMode::Transit),
        point("C", 0.0, 0.02),
    ]);
    let modes: Vec<_> = route.segments.iter().map(|s| s.mode).collect();
    assert_eq!(modes, [TravelMode::Transit, TravelMode::Walking]);
}

#[rstest]
fn walking_speed_sets_duration(optimizer: LocalSearchOptimizer) {
    let metrics = optimizer.metrics(&[point("A", 0.0, 0.0), point("B", 0.0, 0.1)]);
    let expected = metrics.total_distance_meters / (5_000.0 / 3_600.0);
    assert!((metrics.total_duration_seconds - expected).abs() < 1e-6);
}

#[rstest]
fn empty_metrics_are_zero(optimizer: LocalSearchOptimizer) {
    let metrics = optimizer.metrics(&[]);
    assert_eq!(metrics.total_distance_meters, 0.0);
    assert_eq!(metrics.total_duration_seconds, 0.0);
}

#[rstest]
#[case(0.0)]
#[case(-3.0)]
#[case(f64::NAN)]
fn unusable_speed_is_refused(#[case] walking_kmh: f64) {
    let config = OptimizerConfig {
        speeds: TravelSpeeds {
            walking_kmh,
            ..TravelSpeeds::default()
        },
        ..OptimizerConfig::default()
    };
    let err = LocalSearchOptimizer::new(config).expect_err("bad speed");
    assert!(matches!(
        err,
        OptimizerConfigError::InvalidSpeed {
            mode: TravelMode::Walking,
            ..
        }
    ));
}

#[rstest]
fn zero_iteration_factor_is_refused() {
    let config = OptimizerConfig {
        iteration_factor: 0,
        ..OptimizerConfig::default()
    };
    assert_eq!(
        LocalSearchOptimizer::new(config).expect_err("zero factor"),
        OptimizerConfigError::ZeroIterationFactor
    );
}

#[rstest]
#[case(RouteRole::Waypoint, 0)]
#[case(RouteRole::End, 0)]
#[case(RouteRole::Start, 2)]
fn start_index_prefers_the_start_role(#[case] last_role: RouteRole, #[case] want: usize) {
    let points = vec![
        point("A", 0.0, 0.0).with_role(RouteRole::End),
        point("B", 0.0, 0.01),
        point("C", 0.0, 0.02).with_role(last_role),
    ];
    assert_eq!(start_index(&points), want);
}

#[rstest]
fn optimization_is_deterministic(optimizer: LocalSearchOptimizer) {
    let points = crate::test_support::ring(12, 0.02);
    let first = optimize(&optimizer, points.clone());
    let second = optimize(&optimizer, points);
    assert_eq!(first.route, second.route);
}
