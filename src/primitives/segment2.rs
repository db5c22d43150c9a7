//! 2D line segment type.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Polygon edges are handed to the distance field as segments, so a
/// zero-length edge (repeated vertex) is a valid segment that behaves
/// like a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// The projection parameter is clamped to `[0, 1]`, so points beyond
    /// either end snap to that endpoint. Only an exactly zero-length
    /// segment is treated as a point.
    ///
    /// Returns a tuple of (closest_point, parameter_t).
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        if v.is_zero() {
            return (self.start, F::zero());
        }

        let t = (p - self.start).dot(v) / v.magnitude_squared();
        if t > F::one() {
            (self.end, F::one())
        } else if t > F::zero() {
            (self.start + v * t, t)
        } else {
            (self.start, F::zero())
        }
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Returns `true` if a horizontal ray cast from `p` towards +x crosses
    /// this segment.
    ///
    /// Uses the half-open rule `(start.y > p.y) != (end.y > p.y)`, so a
    /// vertex lying exactly on the ray is counted for one of its two
    /// edges only and horizontal edges never count.
    #[inline]
    pub fn crosses_ray_from(self, p: Point2<F>) -> bool {
        let (a, b) = (self.start, self.end);
        (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
    }
}
