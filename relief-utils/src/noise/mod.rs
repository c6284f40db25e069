//! Coherent noise primitives.
//!
//! - [`PerlinNoise`] - Classic improved Perlin noise over a randomized
//!   permutation table, the base signal for fractal height fields.

mod perlin;

pub use perlin::PerlinNoise;
