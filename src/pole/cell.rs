//! Square probe cells.

use super::options::StoragePrecision;
use crate::distance::signed_distance;
use crate::primitives::Point2;
use num_traits::Float;

/// A square region of the search, probed at its center.
///
/// `max_distance` bounds the signed distance of every point in the square:
/// no point is farther than `half_size * √2` from the center, so none can
/// be more than that much farther from the boundary either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<F> {
    /// Center of the square.
    pub center: Point2<F>,
    /// Half the side length. Zero for the single-point candidate cells.
    pub half_size: F,
    /// Signed distance from the center to the polygon boundary.
    pub distance: F,
    /// Upper bound on the distance anywhere in the square.
    pub max_distance: F,
}

impl<F: Float> Cell<F> {
    /// Probes the square centered at `center` against `ring`.
    pub fn new(
        center: Point2<F>,
        half_size: F,
        ring: &[Point2<F>],
        storage: StoragePrecision,
    ) -> Self {
        let sqrt2 = (F::one() + F::one()).sqrt();
        let distance = storage.store(signed_distance(center, ring));
        let max_distance = storage.store(distance + half_size * sqrt2);

        Self {
            center,
            half_size,
            distance,
            max_distance,
        }
    }

    /// Probes a single point (a cell of zero size).
    pub fn point(center: Point2<F>, ring: &[Point2<F>], storage: StoragePrecision) -> Self {
        Self::new(center, F::zero(), ring, storage)
    }

    /// Returns true if this cell's center is a better label than `other`'s.
    ///
    /// A non-finite distance never wins, and any finite distance beats a
    /// non-finite one.
    #[inline]
    pub fn beats(&self, other: &Self) -> bool {
        self.distance.is_finite()
            && (self.distance > other.distance || !other.distance.is_finite())
    }

    /// Returns true if some point of this cell could beat `best` by more
    /// than `precision`.
    ///
    /// A cell whose bound is not finite is never split.
    #[inline]
    pub fn worth_splitting(&self, best: F, precision: F) -> bool {
        self.max_distance.is_finite() && self.max_distance - best > precision
    }

    /// Splits the cell into its four quadrants.
    ///
    /// Children come out in the order bottom-left, bottom-right, top-left,
    /// top-right.
    pub fn split(&self, ring: &[Point2<F>], storage: StoragePrecision) -> [Cell<F>; 4] {
        let h = self.half_size / (F::one() + F::one());
        let Point2 { x, y } = self.center;

        [
            Self::new(Point2::new(x - h, y - h), h, ring, storage),
            Self::new(Point2::new(x + h, y - h), h, ring, storage),
            Self::new(Point2::new(x - h, y + h), h, ring, storage),
            Self::new(Point2::new(x + h, y + h), h, ring, storage),
        ]
    }
}
