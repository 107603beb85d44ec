//! Fractal (multi-octave) combination of an arbitrary base sampler.
//!
//! Octave `i` samples the base at frequency `lacunarity^i` with weight
//! `persistence^i`. Each octave value is passed through the shaping chain
//! before it is weighted, and the weighted sum is divided by the total
//! weight, so the output range equals the range of the shaped octave values
//! regardless of octave count or persistence.
use serde::{Deserialize, Serialize};

use super::Sampler;
use crate::curves::Curve;
use crate::error::ParamError;

/// Octave count, amplitude decay and frequency growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Number of octaves; must be at least 1.
    pub octaves: u32,
    /// Per-octave amplitude multiplier (< 1 damps higher octaves).
    pub persistence: f64,
    /// Per-octave frequency multiplier (> 1 adds finer detail).
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self { octaves: 6, persistence: 0.5, lacunarity: 2.0 }
    }
}

impl FractalParams {
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Self {
        Self { octaves, persistence, lacunarity }
    }

    /// Configuration-time check. [`Fractal::sample`] does not validate:
    /// zero octaves divides by a zero total weight and yields NaN.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.octaves == 0 {
            return Err(ParamError::ZeroOctaves);
        }
        if !self.persistence.is_finite() {
            return Err(ParamError::NonFinite { name: "persistence", value: self.persistence });
        }
        if !self.lacunarity.is_finite() {
            return Err(ParamError::NonFinite { name: "lacunarity", value: self.lacunarity });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Fractal<S> {
    base: S,
    params: FractalParams,
    chain: Vec<Curve>,
}

impl<S: Sampler> Fractal<S> {
    pub fn new(base: S, params: FractalParams, chain: Vec<Curve>) -> Self {
        Self { base, params, chain }
    }
}

impl<S: Sampler> Sampler for Fractal<S> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0f64;
        let mut total_weight = 0.0f64;
        let mut amp = 1.0f64;
        let mut freq = 1.0f64;
        for _ in 0..self.params.octaves {
            let v = Curve::apply_chain(&self.chain, self.base.sample(x * freq, y * freq));
            total += v * amp;
            total_weight += amp;
            freq *= self.params.lacunarity;
            amp *= self.params.persistence;
        }
        total / total_weight
    }
}

/// Fractal combinator factory.
pub fn fractal<S: Sampler>(
    base: S,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
    chain: Vec<Curve>,
) -> Fractal<S> {
    Fractal::new(base, FractalParams::new(octaves, persistence, lacunarity), chain)
}
