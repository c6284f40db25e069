//! Fractal octave accumulation over a 2D grid.

use std::time::Instant;

use relief_utils::noise::PerlinNoise;
use serde::Deserialize;

use super::HeightGrid;

/// Settings for fractal height-field accumulation.
///
/// Deserializable so viewer configurations can carry terrain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeightFieldSettings {
    /// Number of noise octaves to accumulate.
    pub octaves: u32,
    /// Per-octave multiplier applied to the sampling period and, equally, to
    /// the octave amplitude.
    ///
    /// Conventional fractal noise divides amplitude as frequency rises; the
    /// legacy generator multiplies both by the same factor, and that
    /// behavior is kept for output parity. See `DESIGN.md`.
    pub frequency_growth: f64,
    /// Legacy scale parameter.
    ///
    /// Accepted for interface compatibility with the legacy entry point
    /// but not applied inside the octave loop, matching its behavior.
    pub scale: f64,
}

impl Default for HeightFieldSettings {
    fn default() -> Self {
        Self {
            octaves: 4,
            frequency_growth: 5.0,
            scale: 1.0,
        }
    }
}

/// Accumulates octaves of Perlin noise into a [`HeightGrid`].
///
/// Owns its noise source; one generator per consumer. Generation is pure and
/// total: any grid dimensions produce a valid (possibly empty) grid.
#[derive(Debug, Clone)]
pub struct HeightFieldGenerator {
    noise: PerlinNoise,
    settings: HeightFieldSettings,
}

impl HeightFieldGenerator {
    /// Create a generator with default settings and a seeded noise table.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, HeightFieldSettings::default())
    }

    /// Create a generator with default settings and an entropy-seeded noise
    /// table, the legacy run-to-run-randomized behavior.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_noise(PerlinNoise::from_entropy(), HeightFieldSettings::default())
    }

    /// Create a seeded generator with explicit settings.
    #[must_use]
    pub fn with_settings(seed: u64, settings: HeightFieldSettings) -> Self {
        Self::from_noise(PerlinNoise::from_seed(seed), settings)
    }

    /// Create a generator from an existing noise source.
    #[must_use]
    pub const fn from_noise(noise: PerlinNoise, settings: HeightFieldSettings) -> Self {
        Self { noise, settings }
    }

    /// The active settings.
    #[must_use]
    pub const fn settings(&self) -> &HeightFieldSettings {
        &self.settings
    }

    /// Build a `width x height` grid of accumulated noise amplitudes.
    ///
    /// Each octave adds `sample(x / quality, y / quality, 0) * quality` to
    /// every cell in row-major order, then multiplies `quality` by the
    /// growth factor; `quality` starts at 1. The z = 0 plane of the 3D
    /// field serves as the 2D slice.
    #[tracing::instrument(level = "trace", skip(self))]
    #[must_use]
    pub fn generate(&self, width: usize, height: usize) -> HeightGrid {
        let start = Instant::now();
        let mut grid = HeightGrid::zeroed(width, height);

        let mut quality = 1.0_f64;
        for _ in 0..self.settings.octaves {
            for (i, cell) in grid.values_mut().iter_mut().enumerate() {
                let x = (i % width) as f64;
                let y = (i / width) as f64;
                *cell += self.noise.sample(x / quality, y / quality, 0.0) * quality;
            }
            quality *= self.settings.frequency_growth;
        }

        log::debug!(
            "generated {width}x{height} height field ({} octaves) in {:?}",
            self.settings.octaves,
            start.elapsed()
        );
        grid
    }
}
