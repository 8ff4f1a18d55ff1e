//! Field geometry primitives
//!
//! This module contains:
//! - `Point`: an absolute position on the field
//! - `Vector`: a displacement, used as an entity's per-turn velocity
//! - Euclidean distance and translation helpers
//!
//! Both types are immutable values; translation returns a new `Point`
//! instead of mutating in place, so a turn's snapshot never changes
//! underneath the decision procedure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute position on the field (continuous coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Displacement applied over one turn (an entity's velocity).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate by a displacement, producing a new point.
    pub fn translate(&self, vector: Vector) -> Point {
        Point::new(self.x + vector.x, self.y + vector.y)
    }
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v({}; {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(1000.0, 2000.0);
        let b = Point::new(4000.0, 6000.0);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(b), 5000.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(8000.0, 3750.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn test_translate_adds_components() {
        let p = Point::new(100.0, 200.0);
        let moved = p.translate(Vector::new(-30.0, 45.0));
        assert_eq!(moved, Point::new(70.0, 245.0));
        // the starting point is untouched
        assert_eq!(p, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_translate_by_zero_vector_is_identity() {
        let p = Point::new(16000.0, 3750.0);
        assert_eq!(p.translate(Vector::zero()), p);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: distance is symmetric for any pair of points
            #[test]
            fn prop_distance_symmetric(
                ax in -20000.0f64..20000.0f64,
                ay in -20000.0f64..20000.0f64,
                bx in -20000.0f64..20000.0f64,
                by in -20000.0f64..20000.0f64
            ) {
                let a = Point::new(ax, ay);
                let b = Point::new(bx, by);
                prop_assert_eq!(a.distance_to(b), b.distance_to(a));
            }

            /// Property: distance to self is exactly zero
            #[test]
            fn prop_distance_identity(
                x in -20000.0f64..20000.0f64,
                y in -20000.0f64..20000.0f64
            ) {
                let p = Point::new(x, y);
                prop_assert_eq!(p.distance_to(p), 0.0);
            }

            /// Property: translation is a pure component-wise addition
            #[test]
            fn prop_translate_componentwise(
                px in -20000.0f64..20000.0f64,
                py in -20000.0f64..20000.0f64,
                vx in -2000.0f64..2000.0f64,
                vy in -2000.0f64..2000.0f64
            ) {
                let moved = Point::new(px, py).translate(Vector::new(vx, vy));
                prop_assert_eq!(moved.x, px + vx);
                prop_assert_eq!(moved.y, py + vy);
            }
        }
    }
}
