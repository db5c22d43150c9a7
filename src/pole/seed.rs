//! Initial tiling of the polygon's bounding box.

use super::cell::Cell;
use super::options::StoragePrecision;
use crate::bounds::Aabb2;
use crate::primitives::Point2;
use log::{debug, trace};
use num_traits::Float;

/// Outcome of tiling a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub enum Seeding<F> {
    /// The box has zero width or height, so there is no interior to search.
    /// Carries the box's minimum corner, which is the answer.
    Degenerate(Point2<F>),
    /// Square cells whose side is the box's shorter extent.
    Cells(Vec<Cell<F>>),
}

/// Tiles `bbox` with square cells and probes each one against `ring`.
///
/// Tiles have side `min(width, height)` and are laid out column by column
/// from the minimum corner, stepping while the tile origin stays strictly
/// below the maximum. Floating-point stepping can leave a thin strip along
/// the far edges uncovered; the centroid and box-center candidates keep the
/// search sound there.
pub fn seed_cells<F: Float>(
    ring: &[Point2<F>],
    bbox: Aabb2<F>,
    storage: StoragePrecision,
) -> Seeding<F> {
    let cell_size = bbox.min_extent();
    if cell_size == F::zero() {
        debug!(
            "[Seed] degenerate bounding box {:?}x{:?}, returning minimum corner",
            bbox.width().to_f64(),
            bbox.height().to_f64()
        );
        return Seeding::Degenerate(bbox.min);
    }

    let h = cell_size / (F::one() + F::one());
    let xs = steps(bbox.min.x, bbox.max.x, cell_size);
    let ys = steps(bbox.min.y, bbox.max.y, cell_size);

    let cells: Vec<Cell<F>> = xs
        .iter()
        .flat_map(|&x| {
            ys.iter()
                .map(move |&y| Cell::new(Point2::new(x + h, y + h), h, ring, storage))
        })
        .collect();

    trace!(
        "[Seed] {} columns x {} rows = {} cells",
        xs.len(),
        ys.len(),
        cells.len()
    );
    Seeding::Cells(cells)
}

/// Tile origins from `start` while strictly below `end`.
///
/// Stops early if adding `step` no longer changes the value, which happens
/// when `step` is below the precision of very large coordinates.
fn steps<F: Float>(start: F, end: F, step: F) -> Vec<F> {
    let mut origins = Vec::new();
    let mut v = start;
    while v < end {
        origins.push(v);
        let next = v + step;
        if next <= v {
            break;
        }
        v = next;
    }
    origins
}
