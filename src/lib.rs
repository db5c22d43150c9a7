//! polylabel - Pole of inaccessibility for 2D polygons
//!
//! Finds the point inside a polygon that lies farthest from its boundary,
//! to within a caller-chosen precision. The usual use is placing a label or
//! marker inside an irregular shape, where the centroid may fall outside or
//! hug an edge.
//!
//! ```
//! use polylabel::{polylabel, Point2};
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ];
//!
//! let label = polylabel(&square, 1.0).unwrap();
//! assert!(label.distance(Point2::new(5.0, 5.0)) <= 1.0);
//! ```

pub mod bounds;
pub mod distance;
pub mod error;
pub mod polygon;
pub mod pole;
pub mod primitives;

pub use error::PolylabelError;
pub use pole::{
    polylabel, polylabel_default, polylabel_with, CellAction, Polylabel, PolylabelOptions,
    PolylabelSearch, QueueOrder, SearchStep, StoragePrecision,
};
pub use primitives::{Point2, Segment2, Vec2};
