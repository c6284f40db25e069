//! Numeric primitives for procedural height-field generation.
//!
//! This crate provides the building blocks consumed by `relief-core`:
//!
//! - [`noise`] - Coherent 3D gradient noise ([`noise::PerlinNoise`])
//! - [`random`] - Seedable deterministic random sources
//! - [`math`] - Interpolation and easing helpers shared by the noise code

pub mod math;
pub mod noise;
pub mod random;
