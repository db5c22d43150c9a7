//! Pending-cell queue for the refinement loop.

use super::cell::Cell;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Order in which pending cells are examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueOrder {
    /// First in, first out: cells are examined in creation order, one
    /// subdivision level after another.
    Fifo,
    /// Largest `max_distance` first.
    ///
    /// Promising cells raise the best distance early, which lets more of
    /// the remaining cells be pruned without splitting.
    #[default]
    BestFirst,
}

/// Heap entry ordering cells by their upper bound.
#[derive(Debug, Clone, Copy)]
struct ByBound<F>(Cell<F>);

impl<F: Float> Ord for ByBound<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .max_distance
            .partial_cmp(&other.0.max_distance)
            .unwrap_or(Ordering::Equal)
    }
}

impl<F: Float> PartialOrd for ByBound<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> PartialEq for ByBound<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for ByBound<F> {}

#[derive(Debug, Clone)]
enum Pending<F> {
    Fifo(VecDeque<Cell<F>>),
    BestFirst(BinaryHeap<ByBound<F>>),
}

/// Cells waiting to be examined.
#[derive(Debug, Clone)]
pub struct SearchQueue<F> {
    pending: Pending<F>,
}

impl<F: Float> SearchQueue<F> {
    /// Creates an empty queue.
    pub fn new(order: QueueOrder) -> Self {
        let pending = match order {
            QueueOrder::Fifo => Pending::Fifo(VecDeque::new()),
            QueueOrder::BestFirst => Pending::BestFirst(BinaryHeap::new()),
        };
        Self { pending }
    }

    /// Creates a queue holding `cells`, in the given order.
    pub fn from_cells(order: QueueOrder, cells: Vec<Cell<F>>) -> Self {
        let pending = match order {
            QueueOrder::Fifo => Pending::Fifo(cells.into()),
            QueueOrder::BestFirst => {
                Pending::BestFirst(cells.into_iter().map(ByBound).collect())
            }
        };
        Self { pending }
    }

    /// Adds a cell.
    pub fn push(&mut self, cell: Cell<F>) {
        match &mut self.pending {
            Pending::Fifo(queue) => queue.push_back(cell),
            Pending::BestFirst(heap) => heap.push(ByBound(cell)),
        }
    }

    /// Removes the next cell to examine.
    pub fn pop(&mut self) -> Option<Cell<F>> {
        match &mut self.pending {
            Pending::Fifo(queue) => queue.pop_front(),
            Pending::BestFirst(heap) => heap.pop().map(|entry| entry.0),
        }
    }

    /// Number of pending cells.
    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Fifo(queue) => queue.len(),
            Pending::BestFirst(heap) => heap.len(),
        }
    }

    /// Returns true if no cells are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F: Float> Extend<Cell<F>> for SearchQueue<F> {
    fn extend<I: IntoIterator<Item = Cell<F>>>(&mut self, iter: I) {
        for cell in iter {
            self.push(cell);
        }
    }
}
