#![deny(unsafe_code)]
//! Core types for the terragen noise-field system.
//!
//! Provides the [`Dataset`] model (per-axis sample series over a bounding
//! box), the coordinate [`Lattice`] that drives grid sampling, the
//! [`NoiseSource`] capability trait, [`ModelError`], and JSON parameter
//! helpers.

pub mod dataset;
pub mod error;
pub mod grid;
pub mod params;
pub mod source;

pub use dataset::Dataset;
pub use error::ModelError;
pub use grid::Lattice;
pub use source::NoiseSource;
