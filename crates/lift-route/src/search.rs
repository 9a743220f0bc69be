//! Waypoint ordering search.
//!
//! # Problem
//!
//! Given a start floor and a set of distinct stop floors, find the order in
//! which to visit every stop so that the total number of floors travelled is
//! minimal.  This is a shortest Hamiltonian path on a line metric, starting at
//! a fixed point and ending anywhere.
//!
//! # Algorithm
//!
//! [`exact_order`] is a plain exhaustive branch search:
//!
//! ```text
//! cost(from, {})     = 0
//! cost(from, {a})    = |from - a|
//! cost(from, {a, b}) = min(|from - a| + |a - b|, |from - b| + |b - a|)
//! cost(from, S)      = min over s in S of |from - s| + cost(s, S \ {s})
//! ```
//!
//! The search is O(n!) in the number of stops.  Per-elevator queues stay
//! short in practice; [`best_order`] switches to the O(n²) nearest-neighbour
//! heuristic of [`greedy_order`] above a configurable limit.
//!
//! Ties keep the earlier candidate, so an ordering that is already optimal is
//! never shuffled into an equally long one.

use lift_core::Floor;
use tracing::warn;

/// Total floors travelled from `start` visiting `stops` in the given order.
pub fn path_length<I>(start: Floor, stops: I) -> u32
where
    I: IntoIterator<Item = Floor>,
{
    let mut previous = start;
    let mut total = 0;
    for stop in stops {
        total += previous.abs_diff(stop);
        previous = stop;
    }
    total
}

/// Shortest visiting order of `stops` starting at `start`, with its length.
pub fn exact_order(start: Floor, stops: &[Floor]) -> (u32, Vec<Floor>) {
    let mut remaining = stops.to_vec();
    shortest_path(start, &mut remaining)
}

fn shortest_path(from: Floor, remaining: &mut Vec<Floor>) -> (u32, Vec<Floor>) {
    match remaining.len() {
        0 => (0, Vec::new()),
        1 => (from.abs_diff(remaining[0]), vec![remaining[0]]),
        2 => {
            let (a, b) = (remaining[0], remaining[1]);
            let via_a = from.abs_diff(a) + a.abs_diff(b);
            let via_b = from.abs_diff(b) + b.abs_diff(a);
            if via_a <= via_b {
                (via_a, vec![a, b])
            } else {
                (via_b, vec![b, a])
            }
        }
        n => (0..n)
            .map(|i| {
                // Take stop i out, solve the rest from there, put it back.
                let next = remaining.remove(i);
                let (rest_cost, rest_order) = shortest_path(next, remaining);
                remaining.insert(i, next);

                let mut order = Vec::with_capacity(n);
                order.push(next);
                order.extend(rest_order);
                (from.abs_diff(next) + rest_cost, order)
            })
            .min_by_key(|(cost, _)| *cost)
            .unwrap_or_default(),
    }
}

/// Nearest-neighbour ordering: always travel to the closest unvisited stop.
pub fn greedy_order(start: Floor, stops: &[Floor]) -> Vec<Floor> {
    let mut remaining = stops.to_vec();
    let mut order = Vec::with_capacity(remaining.len());
    let mut position = start;
    while !remaining.is_empty() {
        let nearest = (0..remaining.len())
            .min_by_key(|&i| position.abs_diff(remaining[i]))
            .unwrap_or(0);
        position = remaining.remove(nearest);
        order.push(position);
    }
    order
}

/// Exact search up to `exact_limit` stops, greedy beyond.
pub fn best_order(start: Floor, stops: &[Floor], exact_limit: usize) -> Vec<Floor> {
    if stops.len() <= exact_limit {
        exact_order(start, stops).1
    } else {
        warn!(
            stops = stops.len(),
            limit = exact_limit,
            "stop count exceeds exact search limit, using nearest-neighbour ordering"
        );
        greedy_order(start, stops)
    }
}
