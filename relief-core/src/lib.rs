//! Fractal height-field generation.
//!
//! Combines octaves of the base Perlin noise from `relief-utils` into dense
//! 2D grids of raw height values, ready to be consumed as displacement or
//! intensity textures by a rendering pipeline.

pub mod heightfield;

pub use heightfield::{HeightFieldGenerator, HeightFieldSettings, HeightGrid};
