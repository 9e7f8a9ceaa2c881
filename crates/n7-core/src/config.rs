use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{FUSION_RECEPTOR, HARMONIC_SAMPLE};
use crate::error::ConfigError;

/// Tunable constants shared by every component.
///
/// Built once at startup and read-only afterwards. Missing fields in a TOML
/// file fall back to [`Config::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encoder vector width.
    pub dimension: usize,
    /// Per-store multiplier applied to the previous performance value.
    pub memory_decay: f64,
    /// Scale applied to the harmonic weighted sum before tanh.
    pub harmonic_alpha: f64,
    /// Fused score must be strictly greater than this to act.
    pub decision_threshold: f64,
    /// Initial neurotransmitter levels, copied into each new state.
    pub neurotransmitter_baseline: BTreeMap<String, f64>,
    /// Initial receptor levels, copied into each new state.
    pub receptor_baseline: BTreeMap<String, f64>,
}

impl Default for Config {
    fn default() -> Self {
        let neurotransmitter_baseline = [
            "dopamine",
            "serotonin",
            "norepinephrine",
            "acetylcholine",
            "gaba",
        ]
        .into_iter()
        .map(|name| (name.to_string(), 1.0))
        .collect();

        let receptor_baseline = [(FUSION_RECEPTOR, 0.5), ("D2", 0.5)]
            .into_iter()
            .map(|(name, level)| (name.to_string(), level))
            .collect();

        Self {
            dimension: 128,
            memory_decay: 0.95,
            harmonic_alpha: 1.0,
            decision_threshold: 0.35,
            neurotransmitter_baseline,
            receptor_baseline,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < HARMONIC_SAMPLE {
            return Err(ConfigError::Dimension {
                min: HARMONIC_SAMPLE,
                got: self.dimension,
            });
        }
        if !(self.memory_decay > 0.0 && self.memory_decay <= 1.0) {
            return Err(ConfigError::Decay(self.memory_decay));
        }

        let scalars = [
            ("harmonic_alpha", self.harmonic_alpha),
            ("decision_threshold", self.decision_threshold),
        ];
        let baselines = self
            .neurotransmitter_baseline
            .iter()
            .chain(self.receptor_baseline.iter())
            .map(|(name, level)| (name.as_str(), *level));

        for (field, value) in scalars.into_iter().chain(baselines) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
