use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fractal::{Fractal, FractalParams};
use super::gradient::Perlin2;
use super::shaped::Shaped;
use super::{BoxedSampler, SamplerExt};
use crate::curves::Curve;
use crate::error::ParamError;

/// Declarative description of a sampling pipeline:
/// gradient noise → optional fractal combination → optional post shaping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Hash namespace of the gradient noise.
    pub seed: u32,
    /// Multi-octave combination; `None` samples the gradient noise directly.
    pub fractal: Option<FractalParams>,
    /// Applied to every octave before weighting. Ignored without `fractal`.
    pub octave_curves: Vec<Curve>,
    /// Applied to the final value.
    pub post_curves: Vec<Curve>,
}

impl PipelineConfig {
    /// Ridged terrain: six ridge-shaped octaves, then a smoothstep cut at
    /// 0.95 and a strong bias toward 0.
    pub fn ridged(seed: u32) -> Self {
        Self {
            seed,
            fractal: Some(FractalParams::new(6, 0.5, 2.0)),
            octave_curves: vec![Curve::Ridge],
            post_curves: vec![Curve::smoothstep(0.0, 0.95), Curve::bias(0.1)],
        }
    }

    pub fn validate(&self) -> Result<(), ParamError> {
        if let Some(fractal) = &self.fractal {
            fractal.validate()?;
        }
        self.octave_curves
            .iter()
            .chain(&self.post_curves)
            .try_for_each(Curve::validate)
    }

    /// Assemble the sampler. Call [`validate`](Self::validate) first for
    /// untrusted configs; `build` does not check parameters.
    pub fn build(&self) -> BoxedSampler {
        debug!(
            seed = self.seed,
            fractal = ?self.fractal,
            octave_curves = self.octave_curves.len(),
            post_curves = self.post_curves.len(),
            "building sampler pipeline"
        );
        let base = Perlin2::new(self.seed);
        match (self.fractal, self.post_curves.is_empty()) {
            (None, true) => base.boxed(),
            (None, false) => Shaped::new(base, self.post_curves.clone()).boxed(),
            (Some(params), post_empty) => {
                let fractal = Fractal::new(base, params, self.octave_curves.clone());
                if post_empty {
                    fractal.boxed()
                } else {
                    fractal.shaped(self.post_curves.clone()).boxed()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::fractal::fractal;
    use crate::noise::gradient::perlin_noise_2d;
    use crate::noise::Sampler;

    #[test]
    fn default_is_plain_gradient_noise() {
        let s = PipelineConfig::default().build();
        assert_eq!(s.sample(0.5, 0.5), perlin_noise_2d(0).sample(0.5, 0.5));
    }

    #[test]
    fn ridged_matches_hand_built_pipeline() {
        let built = PipelineConfig::ridged(88).build();
        let by_hand = fractal(perlin_noise_2d(88), 6, 0.5, 2.0, vec![Curve::Ridge])
            .shaped(vec![Curve::smoothstep(0.0, 0.95), Curve::bias(0.1)]);
        for i in 0..100 {
            let (x, y) = (i as f64 / 50.0, (i * 3) as f64 / 50.0);
            assert_eq!(built.sample(x, y), by_hand.sample(x, y));
        }
    }

    #[test]
    fn octave_curves_need_a_fractal() {
        let cfg = PipelineConfig { seed: 3, octave_curves: vec![Curve::Ridge], ..Default::default() };
        assert_eq!(cfg.build().sample(0.2, 0.6), perlin_noise_2d(3).sample(0.2, 0.6));
    }

    #[test]
    fn validate_walks_every_part() {
        assert!(PipelineConfig::ridged(1).validate().is_ok());

        let mut cfg = PipelineConfig::ridged(1);
        cfg.post_curves.push(Curve::bias(0.0));
        assert!(matches!(cfg.validate(), Err(ParamError::OutsideUnitInterval { name: "bias", .. })));

        let mut cfg = PipelineConfig::ridged(1);
        cfg.fractal = Some(FractalParams { octaves: 0, ..FractalParams::default() });
        assert_eq!(cfg.validate(), Err(ParamError::ZeroOctaves));
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = PipelineConfig::ridged(88);
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let back: PipelineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"seed": 7, "post_curves": [{"curve": "turbulence"}]}"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert!(cfg.fractal.is_none());
        assert_eq!(cfg.post_curves, vec![Curve::Turbulence]);
    }
}
