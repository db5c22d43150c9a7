//! Signed distance from a point to a polygon ring.

mod sdf;

pub use sdf::{signed_distance, SignedDistance2};
