//! Breadth-first wavefront over the field after an observation

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Field;
use std::collections::VecDeque;

/// FIFO wavefront with a visited bitmap, reused across observation steps
///
/// Cells that are already singleton are preseeded as visited so the sweep
/// skips them. A cell is enqueued only while unvisited and undecided, and
/// new work arises only when a neighbor's candidate set actually shrank, so
/// the queue always drains.
#[derive(Debug, Default)]
pub struct Wavefront {
    queue: VecDeque<usize>,
    visited: Vec<bool>,
}

impl Wavefront {
    /// Create an empty wavefront
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new observation step
    pub fn begin(&mut self, field: &Field) {
        self.queue.clear();
        self.visited.clear();
        self.visited
            .extend(field.cells().iter().map(TileBitset::is_single));
    }

    /// Enqueue the in-bounds neighbors of `cell` that are neither visited
    /// nor already singleton
    pub fn push_neighbors(&mut self, field: &Field, cell: usize) {
        let x = cell % field.width();
        let y = cell / field.width();

        for dir in Direction::ALL {
            if let Some((nx, ny)) = dir.step(x, y, field.width(), field.height()) {
                let id = field.index(nx, ny);
                if !self.visited[id] && !field.cell(id).is_single() {
                    self.queue.push_back(id);
                }
            }
        }
    }

    /// Take the next queued cell
    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Mark a cell visited; returns `false` when it already was
    pub fn visit(&mut self, cell: usize) -> bool {
        if self.visited[cell] {
            false
        } else {
            self.visited[cell] = true;
            true
        }
    }
}
