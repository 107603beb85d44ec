//! Deterministic procedural noise over continuous 2D coordinates.
//!
//! Samplers are built by composition: hashed gradient noise, optionally
//! combined over several octaves, optionally reshaped by curves. Every
//! sampler is a pure function of its coordinates and captured configuration.
//!
//! ```
//! use noisefield_core::curves::Curve;
//! use noisefield_core::noise::{fractal::fractal, gradient::perlin_noise_2d, Sampler, SamplerExt};
//!
//! let field = fractal(perlin_noise_2d(88), 6, 0.5, 2.0, vec![Curve::Ridge])
//!     .shaped(vec![Curve::smoothstep(0.0, 0.95), Curve::bias(0.1)]);
//! let v = field.sample(1.0 / 50.0, 2.0 / 50.0);
//! assert!((0.0..=1.0).contains(&v));
//! ```

pub mod curves;
pub mod error;
pub mod field;
pub mod hash;
pub mod noise;

pub use curves::Curve;
pub use error::{CurveParseError, ParamError};
pub use field::{FieldBounds, ScalarField};
pub use crate::noise::fractal::{fractal, Fractal, FractalParams};
pub use crate::noise::gradient::{perlin_noise_2d, Perlin2};
pub use crate::noise::params::PipelineConfig;
pub use crate::noise::shaped::Shaped;
pub use crate::noise::{BoxedSampler, Sampler, SamplerExt};
