//! Wave function collapse pattern generation over two-dimensional grids
//!
//! The engine learns a tile vocabulary and per-direction adjacency rules from
//! a small exemplar, then collapses a target field by repeatedly observing
//! the lowest-entropy cell and propagating candidate refinements breadth-first
//! to its neighbors. Runs are deterministic for a given seed.

#![forbid(unsafe_code)]

/// Core algorithm: bitsets, selection, propagation, and the engine façade
pub mod algorithm;
/// Exemplar preprocessing for image sources
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grid field, directions, and tile extraction
pub mod spatial;

pub use algorithm::executor::Wave;
pub use io::error::{Result, WaveError};
pub use spatial::tiles::WaveSeed;
