//! Shaping curves: stateless scalar transforms for reshaping a noise
//! distribution, either per octave inside [`Fractal`](crate::noise::fractal::Fractal)
//! or on a sampler's final output via [`Shaped`](crate::noise::shaped::Shaped).
//!
//! The parameterised curves come in two forms: closure constructors
//! ([`smoothstep`], [`bias`], [`gain`]) for direct use, and the [`Curve`]
//! enum, which is what sampler chains and pipeline configs store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CurveParseError, ParamError};

/// Quintic smoothing `t³(t(6t − 15) + 10)`: zero first and second derivative
/// at both ends of `[0, 1]`.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// `|2v − 1|`: folds the distribution around 0.5.
#[inline]
pub fn turbulence(v: f64) -> f64 {
    (v * 2.0 - 1.0).abs()
}

/// `(1 − |2v − 1|)²`: sharp ridges peaking at `v = 0.5`.
#[inline]
pub fn ridge(v: f64) -> f64 {
    let v = 1.0 - (v * 2.0 - 1.0).abs();
    v * v
}

/// Hermite step between two edges. Edges given in reverse order are swapped.
///
/// Inputs below the lower edge map to 0, above the upper edge to 1.
pub fn smoothstep(edge0: f64, edge1: f64) -> impl Fn(f64) -> f64 + Copy {
    let (lo, hi) = if edge0 > edge1 { (edge1, edge0) } else { (edge0, edge1) };
    move |x| {
        if x < lo {
            0.0
        } else if x > hi {
            1.0
        } else {
            let t = (x - lo) / (hi - lo);
            t * t * (3.0 - 2.0 * t)
        }
    }
}

/// Schlick bias. `b = 0.5` is the identity; smaller values pull the
/// distribution toward 0, larger toward 1.
///
/// `b` must lie strictly inside `(0, 1)`; the endpoints divide by zero.
pub fn bias(b: f64) -> impl Fn(f64) -> f64 + Copy {
    move |v| v / ((1.0 / b - 2.0) * (1.0 - v) + 1.0)
}

/// Contrast adjustment symmetric around 0.5, built from two halves of
/// [`bias`]. `g = 0.5` is the identity; `g < 0.5` raises contrast.
pub fn gain(g: f64) -> impl Fn(f64) -> f64 + Copy {
    let lower = bias(g);
    let upper = bias(1.0 - g);
    move |v| {
        if v < 0.5 {
            lower(v * 2.0) / 2.0
        } else {
            upper(v * 2.0 - 1.0) / 2.0 + 0.5
        }
    }
}

/// One step of a shaping chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum Curve {
    Fade,
    Turbulence,
    Ridge,
    SmoothStep { edge0: f64, edge1: f64 },
    Bias { b: f64 },
    Gain { g: f64 },
}

impl Curve {
    /// Smoothstep with its edges stored in ascending order.
    pub fn smoothstep(edge0: f64, edge1: f64) -> Self {
        if edge0 > edge1 {
            Curve::SmoothStep { edge0: edge1, edge1: edge0 }
        } else {
            Curve::SmoothStep { edge0, edge1 }
        }
    }

    pub fn bias(b: f64) -> Self {
        Curve::Bias { b }
    }

    pub fn gain(g: f64) -> Self {
        Curve::Gain { g }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        match *self {
            Curve::Fade => fade(v),
            Curve::Turbulence => turbulence(v),
            Curve::Ridge => ridge(v),
            Curve::SmoothStep { edge0, edge1 } => smoothstep(edge0, edge1)(v),
            Curve::Bias { b } => bias(b)(v),
            Curve::Gain { g } => gain(g)(v),
        }
    }

    /// Apply `chain` in order.
    #[inline]
    pub fn apply_chain(chain: &[Curve], v: f64) -> f64 {
        chain.iter().fold(v, |v, curve| curve.apply(v))
    }

    /// Check that the parameters are inside the curve's domain.
    pub fn validate(&self) -> Result<(), ParamError> {
        match *self {
            Curve::Fade | Curve::Turbulence | Curve::Ridge => Ok(()),
            Curve::SmoothStep { edge0, edge1 } => {
                finite("smoothstep edge0", edge0)?;
                finite("smoothstep edge1", edge1)
            }
            Curve::Bias { b } => open_unit("bias", b),
            Curve::Gain { g } => open_unit("gain", g),
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

fn open_unit(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ParamError::OutsideUnitInterval { name, value })
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Fade => f.write_str("fade"),
            Curve::Turbulence => f.write_str("turbulence"),
            Curve::Ridge => f.write_str("ridge"),
            Curve::SmoothStep { edge0, edge1 } => write!(f, "smoothstep:{edge0},{edge1}"),
            Curve::Bias { b } => write!(f, "bias:{b}"),
            Curve::Gain { g } => write!(f, "gain:{g}"),
        }
    }
}

/// Parses `fade`, `turbulence`, `ridge`, `smoothstep:E0,E1`, `bias:B`, `gain:G`.
impl FromStr for Curve {
    type Err = CurveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A colon introduces at least one argument; every comma-separated
        // field after it must hold a number.
        let (name, args): (&str, Vec<f64>) = match s.split_once(':') {
            Some((name, args)) => (
                name.trim(),
                args.split(',')
                    .map(str::trim)
                    .map(|a| a.parse().map_err(|_| CurveParseError::BadNumber(a.to_string())))
                    .collect::<Result<_, _>>()?,
            ),
            None => (s.trim(), Vec::new()),
        };

        let arity = |curve: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CurveParseError::ArgumentCount { curve, expected, got: args.len() })
            }
        };

        let curve = match name.to_ascii_lowercase().as_str() {
            "fade" => arity("fade", 0).map(|_| Curve::Fade)?,
            "turbulence" => arity("turbulence", 0).map(|_| Curve::Turbulence)?,
            "ridge" => arity("ridge", 0).map(|_| Curve::Ridge)?,
            "smoothstep" => arity("smoothstep", 2).map(|_| Curve::smoothstep(args[0], args[1]))?,
            "bias" => arity("bias", 1).map(|_| Curve::bias(args[0]))?,
            "gain" => arity("gain", 1).map(|_| Curve::gain(args[0]))?,
            _ => return Err(CurveParseError::UnknownCurve(name.to_string())),
        };
        curve.validate()?;
        Ok(curve)
    }
}
