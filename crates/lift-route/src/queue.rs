//! `TargetQueue` — one elevator's committed stops and potential targets.

use std::cmp::Ordering;
use std::collections::{BTreeSet, VecDeque};

use lift_core::{Floor, FloorRange};
use tracing::debug;

use crate::search::{best_order, path_length};
use crate::{RouteError, RouteResult};

/// Ordered waypoints of a single elevator.
///
/// The queue does not store the elevator's current floor; every method that
/// depends on it takes `current` explicitly.  The caller (the elevator unit)
/// owns the floor and the lock around both.
///
/// # Invariants
///
/// - The head is never equal to `current`, and no two consecutive stops are
///   equal.  Either condition is a bug in the caller and panics.
/// - Committed stops are distinct: a floor is only committed when it is not
///   already on the path, and every committed stop is itself on the path.
/// - Potential targets never influence movement, only cost estimates.
#[derive(Clone, Debug)]
pub struct TargetQueue {
    range:        FloorRange,
    stops:        VecDeque<Floor>,
    potential:    BTreeSet<Floor>,
    search_limit: usize,
}

impl TargetQueue {
    /// Empty queue for an elevator serving `range`.
    ///
    /// `search_limit` is the largest stop count reordered by exact search.
    pub fn new(range: FloorRange, search_limit: usize) -> Self {
        Self {
            range,
            stops:     VecDeque::new(),
            potential: BTreeSet::new(),
            search_limit,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn range(&self) -> FloorRange {
        self.range
    }

    /// The next stop, if any.
    pub fn head(&self) -> Option<Floor> {
        self.stops.front().copied()
    }

    pub fn stops(&self) -> impl Iterator<Item = Floor> + '_ {
        self.stops.iter().copied()
    }

    pub fn potential(&self) -> impl Iterator<Item = Floor> + '_ {
        self.potential.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Floors still to travel through the committed stops.
    pub fn path_length(&self, current: Floor) -> u32 {
        path_length(current, self.stops())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `floor` is the current floor or lies on the committed path.
    ///
    /// Floors outside the range are never visited.
    pub fn will_visit(&self, current: Floor, floor: Floor) -> bool {
        if !self.range.contains(floor) {
            return false;
        }
        if floor == current {
            return true;
        }
        let mut previous = current;
        for stop in self.stops() {
            if previous.min(stop) <= floor && floor <= previous.max(stop) {
                return true;
            }
            previous = stop;
        }
        false
    }

    /// Minimum additional floors to travel before every floor in `floors` has
    /// been visited, in the given order.
    ///
    /// Floors already on the path (committed stops followed by the potential
    /// targets) are reached in passing; the rest are treated as if appended
    /// to the queue.  Returns `None` when any floor is outside the range.
    pub fn turns_to_visit(&self, current: Floor, floors: &[Floor]) -> Option<u32> {
        if !self.range.contains_all(floors) {
            return None;
        }
        let mut wanted = floors.iter().copied();
        let Some(mut next) = wanted.next() else {
            return Some(0);
        };

        let mut count = 0;
        let mut previous = current;
        for point in self.soft_path(current) {
            // Chop off the part of this segment leading up to each wanted
            // floor it contains; consecutive wanted floors may share it.
            while on_segment(previous, next, point) {
                count += previous.abs_diff(next);
                previous = next;
                match wanted.next() {
                    Some(floor) => next = floor,
                    None        => return Some(count),
                }
            }
            count += previous.abs_diff(point);
            previous = point;
        }

        count += previous.abs_diff(next);
        previous = next;
        for floor in wanted {
            count += previous.abs_diff(floor);
            previous = floor;
        }
        Some(count)
    }

    /// Committed stops followed by the potential targets not already on the
    /// committed path, the latter ordered nearest-first from the path's end.
    fn soft_path(&self, current: Floor) -> Vec<Floor> {
        let mut path: Vec<Floor> = self.stops().collect();
        let mut hints: Vec<Floor> = self
            .potential()
            .filter(|&floor| !self.will_visit(current, floor))
            .collect();

        let mut end = path.last().copied().unwrap_or(current);
        while !hints.is_empty() {
            let nearest = (0..hints.len())
                .min_by_key(|&i| end.abs_diff(hints[i]))
                .unwrap_or(0);
            end = hints.remove(nearest);
            path.push(end);
        }
        path
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Commit `floor` as a stop unless it is already on the path.
    ///
    /// Returns `Ok(true)` if the queue changed.  A committed floor is no
    /// longer a potential target.
    pub fn request_stop(&mut self, current: Floor, floor: Floor) -> RouteResult<bool> {
        if !self.range.contains(floor) {
            return Err(RouteError::FloorOutOfRange {
                floor,
                min: self.range.min,
                max: self.range.max,
            });
        }
        self.check_head(current);
        self.potential.remove(&floor);
        if self.will_visit(current, floor) {
            return Ok(false);
        }

        self.append(current, floor);
        self.reorder(current);
        debug!(
            floor,
            current,
            queue = ?self.stops,
            "stop committed"
        );
        Ok(true)
    }

    /// Pop the head after the elevator reached it.
    pub fn remove_head(&mut self) -> Option<Floor> {
        self.stops.pop_front()
    }

    /// Record `floor` as a likely but uncommitted destination.
    ///
    /// Floors outside the range are clamped to its nearest end, which is
    /// where a rider headed there would have to change elevators.
    pub fn add_potential(&mut self, floor: Floor) {
        self.potential.insert(self.range.clamp(floor));
    }

    /// Drop the potential target at `floor`, if any.
    pub fn forget_potential(&mut self, floor: Floor) {
        self.potential.remove(&floor);
    }

    pub fn clear_potential(&mut self) {
        self.potential.clear();
    }

    /// Append `floor`, or extend the last segment if `floor` lies beyond its
    /// end in the segment's own direction.  Extending keeps the old end on
    /// the path and avoids an extra reversal.
    fn append(&mut self, current: Floor, floor: Floor) {
        if let Some(to) = self.stops.pop_back() {
            let from = self.stops.back().copied().unwrap_or(current);
            let keep_end = match from.cmp(&to) {
                Ordering::Less    => floor < to,
                Ordering::Greater => floor > to,
                Ordering::Equal   => panic!(
                    "target queue holds {to} twice in a row (queue {:?}, current {current})",
                    self.stops
                ),
            };
            if keep_end {
                self.stops.push_back(to);
            }
        }
        self.stops.push_back(floor);
    }

    /// Panics if the head was reached without being consumed.
    fn check_head(&self, current: Floor) {
        if let Some(head) = self.head() {
            assert_ne!(
                head, current,
                "target queue head equals the current floor {current}: {:?}",
                self.stops
            );
        }
    }

    /// Replace the stops with their shortest visiting order if it is strictly
    /// shorter than the current one.
    fn reorder(&mut self, current: Floor) {
        // A later stop the elevator is standing on was served when it got here.
        self.stops.retain(|&stop| stop != current);
        if self.stops.len() < 2 {
            return;
        }

        let points: Vec<Floor> = self.stops().collect();
        let before = path_length(current, points.iter().copied());
        let order = best_order(current, &points, self.search_limit);
        let after = path_length(current, order.iter().copied());
        if after < before {
            debug!(current, from = ?points, to = ?order, before, after, "target queue reordered");
            self.stops = order.into();
        }
    }
}

/// `true` if `floor` lies on the segment `from → to` (inclusive).
#[inline]
fn on_segment(from: Floor, floor: Floor, to: Floor) -> bool {
    (from <= floor && floor <= to) || (from >= floor && floor >= to)
}
