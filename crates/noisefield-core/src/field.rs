use serde::{Deserialize, Serialize};

use crate::noise::Sampler;

/// A sampler evaluated over a pixel grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
}

/// Smallest and largest value of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    /// False when either bound is NaN or infinite, e.g. a field containing
    /// NaN samples or an empty field.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn approx_eq(&self, other: &FieldBounds, tolerance: f64) -> bool {
        (self.min - other.min).abs() <= tolerance && (self.max - other.max).abs() <= tolerance
    }
}

impl ScalarField {
    /// Sample `sampler` at `(col / period, row / period)` for every pixel.
    pub fn sample<S: Sampler + ?Sized>(sampler: &S, width: usize, height: usize, period: f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for r in 0..height {
            for c in 0..width {
                data.push(sampler.sample(c as f64 / period, r as f64 / period));
            }
        }
        Self { data, width, height }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// Smallest sample, or NaN if any sample is NaN.
    pub fn min_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, |acc, v| nan_or(acc, v, f64::min))
    }

    /// Largest sample, or NaN if any sample is NaN.
    pub fn max_value(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, |acc, v| nan_or(acc, v, f64::max))
    }

    pub fn bounds(&self) -> FieldBounds {
        FieldBounds { min: self.min_value(), max: self.max_value() }
    }

    /// 8-bit intensities, row-major. Values are clamped to `[0, 1]` first:
    /// rounding or out-of-domain curve parameters can push a sample slightly
    /// outside the unit interval.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8).collect()
    }
}

/// `f64::min`/`f64::max` skip NaN operands; a bad sample must poison the bound.
#[inline]
fn nan_or(acc: f64, v: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        pick(acc, v)
    }
}
