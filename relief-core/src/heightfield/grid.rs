//! Dense 2D grid of height values.

/// A dense `width x height` grid of raw height values, row-major.
///
/// Values are accumulated noise amplitudes: unnormalized and unclamped.
/// Produced once by [`HeightFieldGenerator`](super::HeightFieldGenerator)
/// and typically consumed immediately as a displacement or intensity
/// texture.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl HeightGrid {
    /// Create a zero-filled grid.
    #[must_use]
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        self.values[y * self.width + x]
    }

    /// The raw row-major values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access for octave accumulation.
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Consume the grid, yielding the row-major values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
