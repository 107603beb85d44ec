use super::Sampler;
use crate::curves::Curve;

/// A sampler whose output is passed through a curve chain, in order.
#[derive(Debug, Clone)]
pub struct Shaped<S> {
    inner: S,
    chain: Vec<Curve>,
}

impl<S: Sampler> Shaped<S> {
    pub fn new(inner: S, chain: Vec<Curve>) -> Self {
        Self { inner, chain }
    }
}

impl<S: Sampler> Sampler for Shaped<S> {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        Curve::apply_chain(&self.chain, self.inner.sample(x, y))
    }
}
