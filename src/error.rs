//! Error types for polylabel operations.

use thiserror::Error;

/// Errors that reject an input before the search starts.
///
/// Degenerate but well-formed input (collinear vertices, zero area) is not
/// an error: the search falls back to a defined point instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylabelError {
    /// The polygon has no vertices.
    #[error("invalid input: polygon has no vertices")]
    EmptyPolygon,

    /// Precision must be finite and strictly positive.
    #[error("invalid precision {precision}: must be finite and greater than zero")]
    InvalidPrecision {
        /// The rejected precision, widened to `f64`.
        precision: f64,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the first offending vertex.
        index: usize,
    },

    /// The bounding box is too large to measure distances across, in the
    /// coordinate type or in the chosen storage precision.
    #[error("polygon extent is too large to measure distances across")]
    ExtentOverflow,
}
