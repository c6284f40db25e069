//! Interpolation and easing helpers used by the noise code.

/// Linear interpolation: `start + delta * (end - start)`.
#[inline]
#[must_use]
pub const fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Bilinear interpolation over the four corners of a unit square.
///
/// Corner order: `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`.
#[inline]
#[must_use]
pub const fn lerp2(dx: f64, dy: f64, c00: f64, c10: f64, c01: f64, c11: f64) -> f64 {
    lerp(dy, lerp(dx, c00, c10), lerp(dx, c01, c11))
}

/// Trilinear interpolation over the eight corners of a unit cube.
///
/// Corner order: `(0,0,0)`, `(1,0,0)`, `(0,1,0)`, `(1,1,0)`, then the same
/// four with `z = 1`.
#[inline]
#[must_use]
#[expect(
    clippy::too_many_arguments,
    reason = "one argument per cube corner plus the three interpolation deltas"
)]
pub const fn lerp3(
    dx: f64,
    dy: f64,
    dz: f64,
    c000: f64,
    c100: f64,
    c010: f64,
    c110: f64,
    c001: f64,
    c101: f64,
    c011: f64,
    c111: f64,
) -> f64 {
    lerp(
        dz,
        lerp2(dx, dy, c000, c100, c010, c110),
        lerp2(dx, dy, c001, c101, c011, c111),
    )
}

/// Quintic easing curve `6t^5 - 15t^4 + 10t^3`.
///
/// Both the first and second derivatives vanish at `t = 0` and `t = 1`, which
/// is what keeps gradient noise free of visible seams at cell boundaries (a
/// cubic interpolant's second derivative does not vanish there).
#[inline]
#[must_use]
pub const fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Floor of `x` as an `i32`.
#[inline]
#[must_use]
pub const fn floor(x: f64) -> i32 {
    let i = x as i32;
    if x < i as f64 { i - 1 } else { i }
}
