//! Proptest strategies for route optimizer property tests.

use itinera_core::{RoutePoint, RouteRole};
use proptest::prelude::*;

/// Strategy for a single waypoint within roughly a kilometre of the origin.
fn point_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-0.01_f64..0.01_f64, -0.01_f64..0.01_f64)
}

/// Strategy for `min_count..=max_count` uniquely named waypoints.
pub fn point_set_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<RoutePoint>> {
    proptest::collection::vec(point_strategy(), min_count..=max_count).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(idx, (lat, lng))| RoutePoint::new(format!("p{idx}"), lat, lng))
            .collect()
    })
}

/// Strategy for `min_count..=max_count` uniquely named points, each a
/// waypoint or an `end` point. No point is tagged `start`.
pub fn mixed_role_point_set_strategy(
    min_count: usize,
    max_count: usize,
) -> impl Strategy<Value = Vec<RoutePoint>> {
    let role = prop_oneof![Just(RouteRole::Waypoint), Just(RouteRole::End)];
    proptest::collection::vec((point_strategy(), role), min_count..=max_count).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(idx, ((lat, lng), role))| {
                    RoutePoint::new(format!("p{idx}"), lat, lng).with_role(role)
                })
                .collect()
        },
    )
}

/// Mark the point at `idx` (modulo the set size) with `role`.
pub fn assign_role(points: &mut [RoutePoint], idx: usize, role: RouteRole) {
    let len = points.len();
    if let Some(point) = idx.checked_rem(len).and_then(|slot| points.get_mut(slot)) {
        point.role = role;
    }
}

/// Sorted point names, for comparing visits regardless of order.
pub fn sorted_names(points: &[RoutePoint]) -> Vec<String> {
    let mut names: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    names.sort_unstable();
    names
}
