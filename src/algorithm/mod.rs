/// Fixed-length bitsets over tile ids
pub mod bitset;
/// Engine façade driving the collapse loop
pub mod executor;
/// Wavefront propagation after an observation
pub mod propagation;
/// Entropy-based cell selection and weighted tile choice
pub mod selection;
