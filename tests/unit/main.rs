//! Per-module unit test tree mirroring the `src/` layout

mod algorithm;
mod analysis;
mod io;
mod spatial;
