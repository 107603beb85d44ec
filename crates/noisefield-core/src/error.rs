use thiserror::Error;

/// A pipeline parameter outside the domain the sampling math assumes.
///
/// Only configuration paths (`validate`, curve parsing) report these; the
/// samplers themselves never check their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("octave count must be at least 1")]
    ZeroOctaves,
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must lie strictly inside (0, 1), got {value}")]
    OutsideUnitInterval { name: &'static str, value: f64 },
}

/// Failure to parse the textual form of a [`Curve`](crate::curves::Curve).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveParseError {
    #[error("unknown curve `{0}` (expected fade, turbulence, ridge, smoothstep, bias or gain)")]
    UnknownCurve(String),
    #[error("curve `{curve}` takes {expected} argument(s), got {got}")]
    ArgumentCount { curve: &'static str, expected: usize, got: usize },
    #[error("invalid number `{0}`")]
    BadNumber(String),
    #[error(transparent)]
    Param(#[from] ParamError),
}
