use std::collections::{BTreeMap, HashMap};

use crate::constants::{NEUROTRANSMITTER_MAX, RECEPTOR_MAX};
use crate::error::{EngineError, Result};

/// Neurotransmitter and receptor levels with clamped, caller-driven updates.
///
/// The key set is fixed by the baselines at construction. Operations on any
/// other name fail with [`EngineError::UnknownKey`] instead of growing the map.
/// Levels never drift on their own.
#[derive(Clone, Debug)]
pub struct NeurochemicalState {
    neurotransmitters: HashMap<String, f64>,
    receptors: HashMap<String, f64>,
}

impl NeurochemicalState {
    /// Deep-copy the baselines, clamping each level into its range.
    pub fn new(
        neurotransmitters: &BTreeMap<String, f64>,
        receptors: &BTreeMap<String, f64>,
    ) -> Self {
        Self {
            neurotransmitters: neurotransmitters
                .iter()
                .map(|(k, v)| (k.clone(), v.clamp(0.0, NEUROTRANSMITTER_MAX)))
                .collect(),
            receptors: receptors
                .iter()
                .map(|(k, v)| (k.clone(), v.clamp(0.0, RECEPTOR_MAX)))
                .collect(),
        }
    }

    /// level = clamp(level · factor, 0, 5.0). Returns the new level.
    pub fn modulate(&mut self, neurotransmitter: &str, factor: f64) -> Result<f64> {
        let level = self
            .neurotransmitters
            .get_mut(neurotransmitter)
            .ok_or_else(|| EngineError::UnknownKey(neurotransmitter.to_string()))?;
        *level = (*level * factor).clamp(0.0, NEUROTRANSMITTER_MAX);
        Ok(*level)
    }

    /// level = clamp(level + delta, 0, 1.5). Returns the new level.
    pub fn update_receptor(&mut self, receptor: &str, delta: f64) -> Result<f64> {
        let level = self
            .receptors
            .get_mut(receptor)
            .ok_or_else(|| EngineError::UnknownKey(receptor.to_string()))?;
        *level = (*level + delta).clamp(0.0, RECEPTOR_MAX);
        Ok(*level)
    }

    pub fn neurotransmitter(&self, name: &str) -> Option<f64> {
        self.neurotransmitters.get(name).copied()
    }

    pub fn receptor(&self, name: &str) -> Option<f64> {
        self.receptors.get(name).copied()
    }
}
