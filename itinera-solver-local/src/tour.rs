//! Tour construction and refinement over a precomputed distance matrix.
//!
//! Tours are open paths of point indices with position 0 pinned.

use itinera_core::{RoutePoint, StopSignal, haversine_meters};
use log::debug;

/// Minimum gain for a 2-opt move to count as an improvement.
pub(crate) const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Symmetric great-circle distances between every pair of points.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    size: usize,
    metres: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute all pairwise haversine distances.
    #[expect(
        clippy::indexing_slicing,
        reason = "row and column indices are bounded by the point count"
    )]
    pub(crate) fn new(points: &[RoutePoint]) -> Self {
        let size = points.len();
        let mut metres = vec![0.0; size.saturating_mul(size)];
        for (i, from) in points.iter().enumerate() {
            for (j, to) in points.iter().enumerate().skip(i + 1) {
                let distance = haversine_meters(from.location(), to.location());
                metres[i * size + j] = distance;
                metres[j * size + i] = distance;
            }
        }
        Self { size, metres }
    }

    /// Distance between two point indices.
    #[expect(
        clippy::indexing_slicing,
        reason = "callers only pass indices of points used to build the matrix"
    )]
    pub(crate) fn between(&self, from: usize, to: usize) -> f64 {
        self.metres[from * self.size + to]
    }

    /// Length of an open path visiting `tour` in order.
    #[expect(
        clippy::float_arithmetic,
        reason = "path length is a sum of leg distances"
    )]
    pub(crate) fn path_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2)
            .map(|leg| match leg {
                [from, to] => self.between(*from, *to),
                _ => 0.0,
            })
            .sum()
    }
}

/// The caller's order with the `start` index moved to the front.
pub(crate) fn start_first(start: usize, size: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(size);
    order.push(start);
    order.extend((0..size).filter(|idx| *idx != start));
    order
}

/// Greedy construction: repeatedly visit the nearest unvisited point.
///
/// Ties go to the lower index.
#[expect(
    clippy::indexing_slicing,
    reason = "visited flags are indexed by point indices below the matrix size"
)]
pub(crate) fn nearest_neighbour(matrix: &DistanceMatrix, start: usize) -> Vec<usize> {
    let size = matrix.size;
    let mut visited = vec![false; size];
    let mut tour = Vec::with_capacity(size);
    visited[start] = true;
    tour.push(start);

    let mut current = start;
    loop {
        let mut best: Option<(usize, f64)> = None;
        for candidate in (0..size).filter(|idx| !visited[*idx]) {
            let distance = matrix.between(current, candidate);
            if best.is_none_or(|(_, shortest)| distance < shortest) {
                best = Some((candidate, distance));
            }
        }
        let Some((next, _)) = best else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

/// Limits applied to one 2-opt refinement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchLimits<'a> {
    /// Maximum number of improving moves to apply.
    pub(crate) max_moves: u64,
    /// Caller-owned cancellation.
    pub(crate) stop: &'a StopSignal,
}

/// What a 2-opt refinement did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    /// Improving reversals applied.
    pub(crate) swaps: u64,
    /// Sweeps started.
    pub(crate) passes: u64,
    /// Whether the stop signal ended the search.
    pub(crate) cancelled: bool,
}

/// Improve `tour` in place by reversing sub-paths while that shortens it.
///
/// Position 0 never moves.
/// The search ends when a sweep finds no improving move, the move cap is
/// reached, or the stop signal fires between sweeps.
#[expect(
    clippy::indexing_slicing,
    reason = "positions are bounded by the loop ranges over the tour"
)]
pub(crate) fn two_opt(
    matrix: &DistanceMatrix,
    tour: &mut [usize],
    limits: SearchLimits<'_>,
) -> SearchOutcome {
    let mut outcome = SearchOutcome::default();
    let len = tour.len();
    let last_movable = len.saturating_sub(1);
    if last_movable < 2 {
        return outcome;
    }

    'sweeps: loop {
        if limits.stop.is_stopped() {
            outcome.cancelled = true;
            break;
        }
        outcome.passes = outcome.passes.saturating_add(1);
        let mut improved = false;
        for i in 0..last_movable.saturating_sub(1) {
            for k in (i + 2)..=last_movable {
                let after = tour.get(k + 1).copied();
                if move_gain(matrix, tour[i], tour[i + 1], tour[k], after) > IMPROVEMENT_EPSILON {
                    tour[i + 1..=k].reverse();
                    improved = true;
                    outcome.swaps = outcome.swaps.saturating_add(1);
                    if outcome.swaps >= limits.max_moves {
                        debug!("2-opt move cap of {} reached", limits.max_moves);
                        break 'sweeps;
                    }
                }
            }
        }
        debug!("2-opt pass {} swaps so far {}", outcome.passes, outcome.swaps);
        if !improved {
            break;
        }
    }
    outcome
}

/// Distance saved by reversing the sub-path from `b` to `c`, where `a`
/// precedes `b` and `d` (if any) follows `c`.
#[expect(
    clippy::float_arithmetic,
    reason = "move gain compares replaced and added leg lengths"
)]
fn move_gain(matrix: &DistanceMatrix, a: usize, b: usize, c: usize, d: Option<usize>) -> f64 {
    let removed = matrix.between(a, b) + d.map_or(0.0, |next| matrix.between(c, next));
    let added = matrix.between(a, c) + d.map_or(0.0, |next| matrix.between(b, next));
    removed - added
}
