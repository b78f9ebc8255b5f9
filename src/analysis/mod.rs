//! Exemplar preprocessing for image sources

/// Color indexing of source images
pub mod patterns;
