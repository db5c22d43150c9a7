//! Search configuration.

use super::queue::QueueOrder;
use crate::error::PolylabelError;
use num_traits::Float;

/// How cell distances and bounds are stored once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoragePrecision {
    /// Keep values in the coordinate type `F`.
    #[default]
    Native,
    /// Round `distance` and `max_distance` through `f32` before storing them.
    ///
    /// Reproduces labellers that keep cell values in single precision. Pruning
    /// and tie-breaking then happen at `f32` resolution even for `f64` input.
    Single,
}

impl StoragePrecision {
    /// Applies this storage rounding to a freshly computed value.
    #[inline]
    pub fn store<F: Float>(self, value: F) -> F {
        match self {
            Self::Native => value,
            Self::Single => value
                .to_f32()
                .and_then(|single| F::from(single))
                .unwrap_or(value),
        }
    }
}

/// Options for the pole of inaccessibility search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylabelOptions<F> {
    /// Stop refining a cell once its bound beats the best distance by no
    /// more than this, in coordinate units. Must be finite and positive.
    pub precision: F,
    /// Order in which pending cells are examined.
    pub order: QueueOrder,
    /// Rounding applied to stored cell values.
    pub storage: StoragePrecision,
}

impl<F: Float> Default for PolylabelOptions<F> {
    fn default() -> Self {
        Self {
            precision: F::one(),
            order: QueueOrder::default(),
            storage: StoragePrecision::default(),
        }
    }
}

impl<F: Float> PolylabelOptions<F> {
    /// Creates default options with the given precision.
    pub fn with_precision(precision: F) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }

    /// Insertion-order queue with single-precision cell values.
    ///
    /// Matches, cell for cell, the classic queue-based implementations that
    /// examine cells in the order they were created.
    pub fn reference() -> Self {
        Self {
            order: QueueOrder::Fifo,
            storage: StoragePrecision::Single,
            ..Default::default()
        }
    }

    /// Sets the precision.
    pub fn precision(mut self, precision: F) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the queue order.
    pub fn order(mut self, order: QueueOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the storage precision.
    pub fn storage(mut self, storage: StoragePrecision) -> Self {
        self.storage = storage;
        self
    }

    /// Checks that the search will terminate with these options.
    pub fn validate(&self) -> Result<(), PolylabelError> {
        if self.precision.is_finite() && self.precision > F::zero() {
            Ok(())
        } else {
            Err(PolylabelError::InvalidPrecision {
                precision: self.precision.to_f64().unwrap_or(f64::NAN),
            })
        }
    }
}
