pub mod fractal;
pub mod gradient;
pub mod params;
pub mod shaped;

use std::sync::Arc;

use crate::curves::Curve;
use fractal::{Fractal, FractalParams};
use shaped::Shaped;

/// A deterministic scalar field over continuous 2D coordinates.
///
/// Every sampler in this crate is a pure function of `(x, y)` and the
/// configuration captured when it was built: repeated calls agree bit for
/// bit, and a shared sampler may be evaluated from any number of threads.
/// Samplers built from well-formed parameters return values in `[0, 1]`.
pub trait Sampler {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Type-erased sampler, as produced by [`PipelineConfig::build`](params::PipelineConfig::build).
pub type BoxedSampler = Box<dyn Sampler + Send + Sync>;

impl<S: Sampler + ?Sized> Sampler for &S {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}

impl<S: Sampler + ?Sized> Sampler for Arc<S> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}

/// A closure used as a sampler. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSampler<F>(pub F);

impl<F: Fn(f64, f64) -> f64> Sampler for FnSampler<F> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        (self.0)(x, y)
    }
}

/// Lift a closure into a [`Sampler`]. The closure should be pure for the
/// determinism guarantees to hold.
pub fn from_fn<F: Fn(f64, f64) -> f64>(f: F) -> FnSampler<F> {
    FnSampler(f)
}

/// Adapter for a `noise` crate function with output in `[-1, 1]`, remapped
/// to `[0, 1]` so it composes with the rest of the crate.
#[derive(Debug, Clone)]
pub struct NoiseFnSampler<N>(pub N);

impl<N: ::noise::NoiseFn<f64, 2>> Sampler for NoiseFnSampler<N> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.0.get([x, y]) / 2.0 + 0.5
    }
}

/// Combinators available on every sized sampler.
pub trait SamplerExt: Sampler + Sized {
    /// Multi-octave combination of `self`, shaping each octave with
    /// `octave_chain` before weighting.
    fn fractal(self, params: FractalParams, octave_chain: Vec<Curve>) -> Fractal<Self> {
        Fractal::new(self, params, octave_chain)
    }

    /// Apply `chain` to every value this sampler returns.
    fn shaped(self, chain: Vec<Curve>) -> Shaped<Self> {
        Shaped::new(self, chain)
    }

    fn boxed(self) -> BoxedSampler
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<S: Sampler + Sized> SamplerExt for S {}
