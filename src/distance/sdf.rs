//! Signed distance to a polygon boundary.
//!
//! The sign convention here is the one a label search wants: positive
//! inside the ring, negative outside, so "larger is better" everywhere.

use crate::polygon::{ring_edges, Polygon};
use crate::primitives::Point2;
use num_traits::Float;

/// Trait for shapes that can report a signed distance to their boundary.
pub trait SignedDistance2<F: Float> {
    /// Returns the signed distance from `p` to the boundary.
    ///
    /// - Positive: inside the shape
    /// - Zero: on the boundary
    /// - Negative: outside the shape
    fn signed_distance_at(&self, p: Point2<F>) -> F;

    /// Returns the unsigned distance from `p` to the boundary.
    fn distance_at(&self, p: Point2<F>) -> F {
        self.signed_distance_at(p).abs()
    }

    /// Returns true if the point is strictly inside (positive distance).
    fn encloses(&self, p: Point2<F>) -> bool {
        self.signed_distance_at(p) > F::zero()
    }
}

/// Signed distance from `p` to the boundary of a closed ring.
///
/// One pass over the ring's edges does both jobs: each edge toggles the
/// even-odd inside flag when a horizontal ray from `p` crosses it, and
/// contributes its squared point-to-segment distance to a running minimum.
///
/// # Arguments
///
/// * `p` - Query point
/// * `ring` - Ring vertices in order (first vertex should NOT be repeated at end)
///
/// # Returns
///
/// `+d` inside, `-d` outside, where `d` is the distance to the nearest edge.
/// Rings with one or two vertices have no interior, so the result is the
/// negated distance to that point or segment. An empty ring returns
/// negative infinity.
pub fn signed_distance<F: Float>(p: Point2<F>, ring: &[Point2<F>]) -> F {
    let (inside, min_dist_sq) =
        ring_edges(ring).fold((false, F::infinity()), |(inside, min_dist_sq), edge| {
            (
                inside ^ edge.crosses_ray_from(p),
                min_dist_sq.min(edge.distance_squared_to_point(p)),
            )
        });

    let dist = min_dist_sq.sqrt();
    if inside {
        dist
    } else {
        -dist
    }
}

impl<F: Float> SignedDistance2<F> for [Point2<F>] {
    fn signed_distance_at(&self, p: Point2<F>) -> F {
        signed_distance(p, self)
    }
}

impl<F: Float> SignedDistance2<F> for Polygon<F> {
    fn signed_distance_at(&self, p: Point2<F>) -> F {
        signed_distance(p, &self.vertices)
    }
}
