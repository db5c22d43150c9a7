//! Polygon rings: edge traversal, centroid and point containment.
//!
//! A polygon here is a single implicitly closed ring. The same
//! pairwise-adjacent edge walk ([`ring_edges`]) drives the centroid, the
//! crossing-number containment test and the distance field.
//!
//! # Example
//!
//! ```
//! use polylabel::polygon::Polygon;
//! use polylabel::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ]);
//!
//! assert!(square.contains(Point2::new(1.0, 1.0)));
//! assert_eq!(square.centroid(), Some(Point2::new(1.0, 1.0)));
//! ```

mod core;

pub use core::{polygon_centroid, polygon_contains, ring_edges, Polygon};
