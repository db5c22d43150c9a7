//! Pole of inaccessibility search.
//!
//! Branch and bound over square cells. The polygon's bounding box is tiled
//! with squares whose side is its shorter extent; each square is probed at
//! its center and carries an upper bound on how far from the boundary any
//! of its points could be. Squares whose bound cannot beat the best probe
//! by more than the requested precision are dropped, the rest are split
//! into quadrants until nothing is left.
//!
//! The best probe starts as the better of the area centroid and the
//! bounding-box center, which covers whatever the grid tiling misses.
//!
//! # Queue order
//!
//! [`QueueOrder::BestFirst`] (the default) examines the most promising cell
//! next. [`QueueOrder::Fifo`] examines cells in creation order, which
//! probes more cells for the same precision but reproduces queue-based
//! implementations step for step, especially together with
//! [`StoragePrecision::Single`]. [`PolylabelOptions::reference`] selects
//! both.
//!
//! # Example
//!
//! ```
//! use polylabel::{polylabel_with, Point2, PolylabelOptions, QueueOrder};
//!
//! let triangle = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(6.0, 0.0),
//!     Point2::new(0.0, 6.0),
//! ];
//!
//! let options = PolylabelOptions::with_precision(0.01).order(QueueOrder::Fifo);
//! let label = polylabel_with(&triangle, &options).unwrap();
//!
//! // Inscribed circle radius of this right triangle is 6 - 3√2
//! assert!((label.distance - (6.0 - 3.0 * 2f64.sqrt())).abs() <= 0.01);
//! ```

mod cell;
mod options;
mod queue;
mod search;
mod seed;

pub use cell::Cell;
pub use options::{PolylabelOptions, StoragePrecision};
pub use queue::{QueueOrder, SearchQueue};
pub use search::{
    polylabel, polylabel_default, polylabel_with, CellAction, Polylabel, PolylabelSearch,
    SearchStep,
};
pub use seed::{seed_cells, Seeding};
