//! Core polygon ring type and basic operations.

use crate::bounds::Aabb2;
use crate::distance::signed_distance;
use crate::error::PolylabelError;
use crate::pole::{polylabel_with, Polylabel, PolylabelOptions};
use crate::primitives::{Point2, Segment2};
use log::debug;
use num_traits::Float;

/// A single polygon ring represented as a sequence of vertices.
///
/// The ring is implicitly closed: the last vertex connects back to the
/// first, so the first vertex should not be repeated at the end. Either
/// winding order is accepted. Holes and multi-ring shapes are not modeled.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the ring, in order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the closed ring's edges, see [`ring_edges`].
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        ring_edges(&self.vertices)
    }

    /// Returns the bounding box, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Aabb2<F>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Returns the area-weighted centroid, see [`polygon_centroid`].
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Returns the signed distance from `point` to the boundary
    /// (positive inside, negative outside).
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        signed_distance(point, &self.vertices)
    }

    /// Finds the pole of inaccessibility to within `precision`.
    ///
    /// Shorthand for [`polylabel_with`] with default options apart from the
    /// precision.
    pub fn polylabel(&self, precision: F) -> Result<Polylabel<F>, PolylabelError> {
        polylabel_with(&self.vertices, &PolylabelOptions::with_precision(precision))
    }
}

impl<F: Float> From<Vec<Point2<F>>> for Polygon<F> {
    fn from(vertices: Vec<Point2<F>>) -> Self {
        Self::new(vertices)
    }
}

/// Iterates over the edges of an implicitly closed ring.
///
/// Edge `i` runs from `ring[i]` to the previous vertex, so the first edge
/// is the closing pair `ring[0] -> ring[n - 1]`. A single vertex yields one
/// zero-length edge and an empty ring yields nothing.
pub fn ring_edges<F: Float>(ring: &[Point2<F>]) -> impl Iterator<Item = Segment2<F>> + '_ {
    let previous = ring.last().copied().into_iter().chain(ring.iter().copied());
    ring.iter()
        .copied()
        .zip(previous)
        .map(|(a, b)| Segment2::new(a, b))
}

/// Computes the area-weighted centroid of a ring.
///
/// Accumulates the shoelace terms over [`ring_edges`]. When the signed area
/// sums to exactly zero (collinear vertices, or a ring whose lobes cancel)
/// the first vertex is returned instead of dividing by zero. The same
/// fallback applies when the cubic terms overflow for very large
/// coordinates, so the result is always a finite point for finite input.
///
/// Returns `None` only for an empty ring.
pub fn polygon_centroid<F: Float>(ring: &[Point2<F>]) -> Option<Point2<F>> {
    let first = *ring.first()?;
    let three = F::one() + F::one() + F::one();

    let (x, y, area) = ring_edges(ring).fold(
        (F::zero(), F::zero(), F::zero()),
        |(x, y, area), edge| {
            let (a, b) = (edge.start, edge.end);
            let f = a.x * b.y - b.x * a.y;
            (x + (a.x + b.x) * f, y + (a.y + b.y) * f, area + f * three)
        },
    );

    if area == F::zero() {
        debug!(
            "[Centroid] zero signed area over {} vertices, using first vertex",
            ring.len()
        );
        return Some(first);
    }

    let centroid = Point2::new(x / area, y / area);
    if !centroid.is_finite() {
        debug!(
            "[Centroid] shoelace sums overflowed over {} vertices, using first vertex",
            ring.len()
        );
        return Some(first);
    }

    Some(centroid)
}

/// Tests if a point is inside a ring using even-odd ray casting.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(ring: &[Point2<F>], point: Point2<F>) -> bool {
    ring_edges(ring).fold(false, |inside, edge| {
        inside ^ edge.crosses_ray_from(point)
    })
}
