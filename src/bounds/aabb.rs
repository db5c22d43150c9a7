//! Axis-aligned bounding box of a vertex ring.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the shorter side, the size of a square seed tile.
    ///
    /// Zero when the box collapses to a segment or a point.
    #[inline]
    pub fn min_extent(self) -> F {
        self.width().min(self.height())
    }

    /// Returns the squared length of the diagonal.
    ///
    /// Bounds the squared distance between any two points of the box.
    #[inline]
    pub fn diagonal_squared(self) -> F {
        let (w, h) = (self.width(), self.height());
        w * w + h * h
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point2<F> {
        let two = F::one() + F::one();
        Point2::new(
            self.min.x + self.width() / two,
            self.min.y + self.height() / two,
        )
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.min, Point2::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point2::new(4.0, 5.0));
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 5.0);
        assert_eq!(aabb.min_extent(), 5.0);
        assert_eq!(aabb.diagonal_squared(), 125.0);
    }

    #[test]
    fn test_diagonal_squared_overflows_before_extent() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1e160, 1e160));
        assert!(aabb.width().is_finite());
        assert!(aabb.diagonal_squared().is_infinite());
    }

    #[test]
    fn test_collinear_points_have_zero_extent() {
        let aabb: Aabb2<f64> = Aabb2::from_points(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(aabb.width(), 2.0);
        assert_eq!(aabb.min_extent(), 0.0);
    }

    #[test]
    fn test_center() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(-70.0, -10.0), Point2::new(2.0, 2.0));
        assert_eq!(aabb.center(), Point2::new(-34.0, -4.0));
    }
}
