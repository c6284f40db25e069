//! Improved Perlin noise over a randomized permutation table.

use crate::math::{floor, lerp3, smoothstep};
use crate::random::{Random, Xoroshiro};

/// Classic improved Perlin noise generator.
///
/// Owns a 256-entry table of pseudo-random bytes, mirrored to 512 entries so
/// chained lookups (`p[p[x] + y]`) never need a modulo. The table is drawn
/// with independent uniform byte samples, so duplicate entries are allowed
/// and expected; it is not a strict permutation.
///
/// Immutable after construction. Sampling is pure, so a single instance can
/// be shared freely.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    p: [u8; 512],
}

impl PerlinNoise {
    /// Create a generator with a table drawn from `random`.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let mut table = [0u8; 256];
        for entry in &mut table {
            *entry = random.next_i32_bounded(256) as u8;
        }
        Self::from_table(table)
    }

    /// Create a generator with a deterministic table derived from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(&mut Xoroshiro::from_seed(seed))
    }

    /// Create a generator with a table drawn from OS entropy.
    ///
    /// Output is not reproducible run-to-run; use [`PerlinNoise::from_seed`]
    /// when that matters.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(&mut Xoroshiro::from_entropy())
    }

    /// Create a generator from a literal table.
    ///
    /// Mainly useful for pinning known-value tests.
    #[must_use]
    pub fn from_table(table: [u8; 256]) -> Self {
        let mut p = [0u8; 512];
        p[..256].copy_from_slice(&table);
        p[256..].copy_from_slice(&table);
        Self { p }
    }

    /// Table lookup widened to `usize` for chained indexing.
    ///
    /// `index` stays below 512 by construction: the base index is masked to
    /// `[0, 255]` and each summand is a table byte or a masked coordinate.
    #[inline]
    fn p(&self, index: usize) -> usize {
        usize::from(self.p[index])
    }

    /// Gradient dot product for one cube corner.
    ///
    /// Picks one of the 12 edge-midpoint gradient directions from the low
    /// four hash bits via bit tests instead of a materialized table.
    #[inline]
    fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
        let h = hash & 15;
        let u = if h < 8 { x } else { y };
        let v = if h < 4 {
            y
        } else if h == 12 || h == 14 {
            x
        } else {
            z
        };
        (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
    }

    /// Sample the noise field at `(x, y, z)`.
    ///
    /// Returns a raw, unclamped value, approximately in `[-1, 1]`. The field
    /// is continuous with smooth first and second derivatives, and periodic
    /// with period 256 along each axis.
    #[must_use]
    #[expect(
        clippy::many_single_char_names,
        reason = "classic noise notation for eased deltas and corner hashes"
    )]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = floor(x);
        let yi = floor(y);
        let zi = floor(z);

        // Cell corner in table space; masking gives the 256-periodic wrap.
        let gx = (xi & 255) as usize;
        let gy = (yi & 255) as usize;
        let gz = (zi & 255) as usize;

        // Offsets within the cell, each in [0, 1).
        let fx = x - f64::from(xi);
        let fy = y - f64::from(yi);
        let fz = z - f64::from(zi);

        let u = smoothstep(fx);
        let v = smoothstep(fy);
        let w = smoothstep(fz);

        // Hash the 8 surrounding corners through chained table lookups.
        let a = self.p(gx) + gy;
        let aa = self.p(a) + gz;
        let ab = self.p(a + 1) + gz;
        let b = self.p(gx + 1) + gy;
        let ba = self.p(b) + gz;
        let bb = self.p(b + 1) + gz;

        lerp3(
            u,
            v,
            w,
            Self::grad(self.p(aa), fx, fy, fz),
            Self::grad(self.p(ba), fx - 1.0, fy, fz),
            Self::grad(self.p(ab), fx, fy - 1.0, fz),
            Self::grad(self.p(bb), fx - 1.0, fy - 1.0, fz),
            Self::grad(self.p(aa + 1), fx, fy, fz - 1.0),
            Self::grad(self.p(ba + 1), fx - 1.0, fy, fz - 1.0),
            Self::grad(self.p(ab + 1), fx, fy - 1.0, fz - 1.0),
            Self::grad(self.p(bb + 1), fx - 1.0, fy - 1.0, fz - 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The unshuffled table `[0, 1, ..., 255]`.
    fn identity_table() -> [u8; 256] {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        table
    }

    #[test]
    fn test_same_seed_bit_identical() {
        let a = PerlinNoise::from_seed(12345);
        let b = PerlinNoise::from_seed(12345);
        for i in 0..50 {
            let x = f64::from(i) * 0.37;
            let y = f64::from(i) * 1.91;
            let z = f64::from(i) * 0.05;
            assert_eq!(
                a.sample(x, y, z).to_bits(),
                b.sample(x, y, z).to_bits(),
                "mismatch at ({x}, {y}, {z})"
            );
        }
    }

    /// Coordinates are dyadic rationals so `x + 256.0` is exact and bit
    /// equality of the samples is meaningful.
    #[test]
    fn test_periodic_every_256_units() {
        let noise = PerlinNoise::from_seed(42);
        for i in 0..20 {
            let x = f64::from(i) * 0.75 + 0.3125;
            let y = f64::from(i) * 0.4375 + 0.1875;
            let z = f64::from(i) * 0.28125 + 0.53125;
            let base = noise.sample(x, y, z);
            assert_eq!(base.to_bits(), noise.sample(x + 256.0, y, z).to_bits());
            assert_eq!(base.to_bits(), noise.sample(x, y + 256.0, z).to_bits());
            assert_eq!(base.to_bits(), noise.sample(x, y, z + 256.0).to_bits());
        }
    }

    /// Gradient contributions vanish at lattice points, so the field is
    /// exactly zero on integer coordinates regardless of the table.
    #[expect(clippy::float_cmp, reason = "lattice values are exactly zero")]
    #[test]
    fn test_zero_on_lattice() {
        let noise = PerlinNoise::from_seed(7);
        for x in 0..4 {
            for y in 0..4 {
                assert_eq!(noise.sample(f64::from(x), f64::from(y), 0.0), 0.0);
            }
        }
    }

    /// Known values with the identity table, worked out by hand.
    ///
    /// At `(0.5, 0.5, 0.5)` the corner hashes are `0,1,1,2,1,2,2,3`; every
    /// intermediate value is a dyadic rational, so the result is exact.
    #[expect(clippy::float_cmp, reason = "all arithmetic is exact dyadic")]
    #[test]
    fn test_known_values_identity_table() {
        let noise = PerlinNoise::from_table(identity_table());
        assert_eq!(noise.sample(0.5, 0.5, 0.5), 0.25);
        assert_eq!(noise.sample(1.5, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_range_stays_near_unit() {
        let noise = PerlinNoise::from_seed(42);
        for x in 0..10 {
            for y in 0..10 {
                for z in 0..10 {
                    let value = noise.sample(
                        f64::from(x) * 0.1,
                        f64::from(y) * 0.1,
                        f64::from(z) * 0.1,
                    );
                    assert!(
                        (-1.5..=1.5).contains(&value),
                        "value out of range: {value}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_continuity() {
        let noise = PerlinNoise::from_seed(42);
        let step = 0.001;
        let base = noise.sample(0.5, 0.5, 0.5);
        let nearby = noise.sample(0.5 + step, 0.5, 0.5);
        assert!(
            (base - nearby).abs() < 0.1,
            "noise not continuous: {base} vs {nearby}"
        );
    }
}
