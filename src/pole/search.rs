//! Branch-and-bound refinement driver.

use super::cell::Cell;
use super::options::PolylabelOptions;
use super::queue::SearchQueue;
use super::seed::{seed_cells, Seeding};
use crate::bounds::Aabb2;
use crate::error::PolylabelError;
use crate::polygon::polygon_centroid;
use crate::primitives::Point2;
use log::{debug, trace};
use num_traits::Float;

/// Result of a pole of inaccessibility search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polylabel<F> {
    /// The chosen label point.
    pub point: Point2<F>,
    /// Signed distance from `point` to the boundary, as stored on the
    /// winning cell.
    pub distance: F,
    /// Number of grid cells probed (seed tiles plus all split children).
    pub probes: usize,
}

/// What happened to a cell taken off the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    /// The cell's bound could not beat the best distance by more than the
    /// precision; it was dropped.
    Pruned,
    /// The cell was split and its four quadrants queued.
    Split,
}

/// One iteration of the refinement loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep<F> {
    /// The cell that was examined.
    pub cell: Cell<F>,
    /// Whether the cell replaced the previous best.
    pub improved: bool,
    /// Best distance after this step.
    pub best_distance: F,
    /// Whether the cell was pruned or split.
    pub action: CellAction,
}

/// State of one pole of inaccessibility search.
///
/// Built by [`PolylabelSearch::new`], advanced with [`step`](Self::step) (or
/// by iterating, which yields the same steps) and finished with
/// [`run`](Self::run). Every examined cell either replaces the best
/// candidate, is pruned, or is split into four, so the number of steps is
/// finite for any positive precision.
#[derive(Debug, Clone)]
pub struct PolylabelSearch<'a, F> {
    ring: &'a [Point2<F>],
    options: PolylabelOptions<F>,
    queue: SearchQueue<F>,
    best: Cell<F>,
    probes: usize,
}

impl<'a, F: Float> PolylabelSearch<'a, F> {
    /// Validates the input, seeds the grid and picks the starting candidate.
    ///
    /// The starting candidate is the better of the area centroid and the
    /// bounding-box center. If the bounding box has zero width or height,
    /// the search is already finished and its answer is the box's minimum
    /// corner.
    ///
    /// Rings whose squared bounding-box diagonal overflows `F`, or whose
    /// diagonal does not fit the chosen [`StoragePrecision`], are rejected
    /// with [`PolylabelError::ExtentOverflow`]: their cell distances could
    /// not be computed.
    ///
    /// [`StoragePrecision`]: super::StoragePrecision
    pub fn new(
        ring: &'a [Point2<F>],
        options: &PolylabelOptions<F>,
    ) -> Result<Self, PolylabelError> {
        options.validate()?;
        if let Some(index) = ring.iter().position(|p| !p.is_finite()) {
            return Err(PolylabelError::NonFiniteCoordinate { index });
        }
        let bbox =
            Aabb2::from_points(ring.iter().copied()).ok_or(PolylabelError::EmptyPolygon)?;
        let storage = options.storage;
        let diagonal_sq = bbox.diagonal_squared();
        if !diagonal_sq.is_finite() || !storage.store(diagonal_sq.sqrt()).is_finite() {
            return Err(PolylabelError::ExtentOverflow);
        }

        let (queue, best, probes) = match seed_cells(ring, bbox, storage) {
            Seeding::Degenerate(corner) => (
                SearchQueue::new(options.order),
                Cell::point(corner, ring, storage),
                0,
            ),
            Seeding::Cells(cells) => {
                let centroid = polygon_centroid(ring).ok_or(PolylabelError::EmptyPolygon)?;
                let centroid_cell = Cell::point(centroid, ring, storage);
                let bbox_cell = Cell::point(bbox.center(), ring, storage);
                let best = if bbox_cell.beats(&centroid_cell) {
                    bbox_cell
                } else {
                    centroid_cell
                };

                let probes = cells.len();
                (SearchQueue::from_cells(options.order, cells), best, probes)
            }
        };

        trace!(
            "[Polylabel] start: {} vertices, {} seed cells, order={:?}, storage={:?}",
            ring.len(),
            probes,
            options.order,
            storage
        );

        Ok(Self {
            ring,
            options: *options,
            queue,
            best,
            probes,
        })
    }

    /// Examines the next pending cell, or returns `None` once the queue is
    /// empty.
    pub fn step(&mut self) -> Option<SearchStep<F>> {
        let cell = self.queue.pop()?;

        let improved = cell.beats(&self.best);
        if improved {
            self.best = cell;
            debug!(
                "[Polylabel] found best {:.4} after {} probes",
                cell.distance.to_f64().unwrap_or(f64::NAN),
                self.probes
            );
        }

        let action = if cell.worth_splitting(self.best.distance, self.options.precision) {
            self.queue.extend(cell.split(self.ring, self.options.storage));
            self.probes += 4;
            CellAction::Split
        } else {
            CellAction::Pruned
        };

        Some(SearchStep {
            cell,
            improved,
            best_distance: self.best.distance,
            action,
        })
    }

    /// Drains the queue and returns the final answer.
    pub fn run(mut self) -> Polylabel<F> {
        while self.step().is_some() {}

        let result = self.result();
        debug!(
            "[Polylabel] done: {} probes, best distance {:.4}",
            result.probes,
            result.distance.to_f64().unwrap_or(f64::NAN)
        );
        result
    }

    /// The answer as it stands now. Final once [`is_finished`](Self::is_finished).
    pub fn result(&self) -> Polylabel<F> {
        Polylabel {
            point: self.best.center,
            distance: self.best.distance,
            probes: self.probes,
        }
    }

    /// The best cell found so far.
    pub fn best(&self) -> &Cell<F> {
        &self.best
    }

    /// Number of cells still waiting to be examined.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of grid cells probed so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    /// The options this search runs with.
    pub fn options(&self) -> &PolylabelOptions<F> {
        &self.options
    }

    /// Returns true once no cells are pending.
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<F: Float> Iterator for PolylabelSearch<'_, F> {
    type Item = SearchStep<F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Finds the pole of inaccessibility of `ring` to within `precision`.
///
/// The ring is implicitly closed and may wind either way. Uses default
/// [`PolylabelOptions`] apart from the precision.
///
/// # Errors
///
/// [`PolylabelError::EmptyPolygon`] for an empty ring,
/// [`PolylabelError::InvalidPrecision`] unless `precision` is finite and
/// positive, [`PolylabelError::NonFiniteCoordinate`] for NaN or infinite
/// vertices, and [`PolylabelError::ExtentOverflow`] when the bounding box
/// is too large to measure distances across.
///
/// # Example
///
/// ```
/// use polylabel::{polylabel, Point2};
///
/// // L shape: the area centroid falls outside, in the notch
/// let ring = [
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 2.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(2.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ];
///
/// let p = polylabel(&ring, 0.01).unwrap();
/// assert!(p.x < 2.0 && p.y < 2.0);
/// ```
pub fn polylabel<F: Float>(ring: &[Point2<F>], precision: F) -> Result<Point2<F>, PolylabelError> {
    polylabel_with(ring, &PolylabelOptions::with_precision(precision)).map(|label| label.point)
}

/// [`polylabel`] with the default precision of one coordinate unit.
pub fn polylabel_default<F: Float>(ring: &[Point2<F>]) -> Result<Point2<F>, PolylabelError> {
    polylabel(ring, F::one())
}

/// Runs a full search with explicit options and returns the point together
/// with its distance and the probe count.
pub fn polylabel_with<F: Float>(
    ring: &[Point2<F>],
    options: &PolylabelOptions<F>,
) -> Result<Polylabel<F>, PolylabelError> {
    Ok(PolylabelSearch::new(ring, options)?.run())
}
