//! Floors, travel directions and closed floor ranges.
//!
//! Floors are abstract 1-based indices; the distance between two floors is
//! their absolute difference, which is also the number of ticks an elevator
//! needs to travel between them.

use std::fmt;

/// A floor number.  Valid floors are `>= 1`.
pub type Floor = u32;

/// Direction a rider wants to travel when calling an elevator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelDirection {
    Up,
    Down,
}

impl TravelDirection {
    /// Direction from `from` towards `to`, or `None` if they are equal.
    pub fn between(from: Floor, to: Floor) -> Option<Self> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less    => Some(TravelDirection::Up),
            std::cmp::Ordering::Greater => Some(TravelDirection::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelDirection::Up   => f.write_str("UP"),
            TravelDirection::Down => f.write_str("DOWN"),
        }
    }
}

/// A closed, gap-free range of floors `[min, max]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    pub min: Floor,
    pub max: Floor,
}

impl FloorRange {
    pub fn new(min: Floor, max: Floor) -> Self {
        debug_assert!(min <= max, "inverted floor range {min}..={max}");
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.min <= floor && floor <= self.max
    }

    /// `true` if every floor in `floors` lies within the range.
    pub fn contains_all(&self, floors: &[Floor]) -> bool {
        floors.iter().all(|&f| self.contains(f))
    }

    /// Closest floor inside the range.
    #[inline]
    pub fn clamp(&self, floor: Floor) -> Floor {
        floor.clamp(self.min, self.max)
    }

    /// Floors between `floor` and the nearest end of the range (0 if inside).
    #[inline]
    pub fn distance_to(&self, floor: Floor) -> u32 {
        floor.abs_diff(self.clamp(floor))
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(self, other: FloorRange) -> FloorRange {
        FloorRange::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn floor_count(&self) -> u32 {
        self.max - self.min + 1
    }

    pub fn floors(&self) -> std::ops::RangeInclusive<Floor> {
        self.min..=self.max
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
