//! Height-field construction from fractal noise.
//!
//! - [`HeightGrid`] - Dense row-major grid of raw height values
//! - [`HeightFieldSettings`] - Octave count, frequency growth, legacy scale
//! - [`HeightFieldGenerator`] - Accumulates noise octaves into a grid

mod generator;
mod grid;

pub use generator::{HeightFieldGenerator, HeightFieldSettings};
pub use grid::HeightGrid;
