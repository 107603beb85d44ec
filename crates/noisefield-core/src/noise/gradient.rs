//! Classic 2D gradient (Perlin-style) noise over a hashed integer lattice.
//!
//! Each lattice point picks one of eight gradients from the low three bits of
//! `hash3(seed, cell_x, cell_y)`. A sample blends the four corner dot
//! products of its cell with quintic [`fade`] weights, then remaps the
//! result from roughly `[-1, 1]` to `[0, 1]`.
//!
//! Lattice points themselves always evaluate to exactly 0.5.

use serde::{Deserialize, Serialize};

use super::Sampler;
use crate::curves::{fade, lerp};
use crate::hash::hash3;

/// Gradient directions, indexed by the 3-bit lattice selector.
pub const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Dot product of the gradient at lattice point `(cell_x, cell_y)` with the
/// offset `(frac_x, frac_y)` from that point.
#[inline]
pub fn gradient_dot(seed: u32, cell_x: u32, cell_y: u32, frac_x: f64, frac_y: f64) -> f64 {
    let (h, _, _) = hash3(seed, cell_x, cell_y);
    match h & 7 {
        0 => frac_x + frac_y,
        1 => frac_x - frac_y,
        2 => -frac_x + frac_y,
        3 => -frac_x - frac_y,
        4 => frac_x,
        5 => -frac_x,
        6 => frac_y,
        7 => -frac_y,
        _ => unreachable!("gradient selector is masked to 3 bits"),
    }
}

/// Lattice id of a floored coordinate. Negative cells wrap to their
/// two's-complement `u32`.
#[inline]
fn lattice(v: f64) -> u32 {
    v as i64 as u32
}

/// 2D gradient noise for one seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Perlin2 {
    pub seed: u32,
}

impl Perlin2 {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl Sampler for Perlin2 {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let grid_x = x.floor();
        let grid_y = y.floor();
        let frac_x = x - grid_x;
        let frac_y = y - grid_y;
        let fade_x = fade(frac_x);
        let fade_y = fade(frac_y);

        let x0 = lattice(grid_x);
        let y0 = lattice(grid_y);
        let x1 = x0.wrapping_add(1);
        let y1 = y0.wrapping_add(1);

        let d00 = gradient_dot(self.seed, x0, y0, frac_x, frac_y);
        let d10 = gradient_dot(self.seed, x1, y0, frac_x - 1.0, frac_y);
        let d01 = gradient_dot(self.seed, x0, y1, frac_x, frac_y - 1.0);
        let d11 = gradient_dot(self.seed, x1, y1, frac_x - 1.0, frac_y - 1.0);

        lerp(lerp(d00, d10, fade_x), lerp(d01, d11, fade_x), fade_y) / 2.0 + 0.5
    }
}

/// Gradient-noise sampler factory.
pub fn perlin_noise_2d(seed: u32) -> Perlin2 {
    Perlin2::new(seed)
}
