use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chemistry::NeurochemicalState;
use crate::config::Config;
use crate::constants::{
    CHEMISTRY_GAIN, FUSION_RECEPTOR, HARMONIC_WEIGHT, HOLD_ACTION, PERFORMANCE_WEIGHT,
    PERSONALITY_WEIGHT, REPORTED_NEUROTRANSMITTER,
};
use crate::error::{EngineError, Result};
use crate::harmonic::HarmonicScorer;
use crate::memory::AssociativeMemory;
use crate::personality::{PersonalityProfile, PersonalitySet};

/// Chemistry levels captured when the decision was made.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChemistrySnapshot {
    pub serotonin: f64,
    #[serde(rename = "5HT2A")]
    pub receptor_5ht2a: f64,
}

/// Everything that went into one decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub action: String,
    pub score: f64,
    pub personality: String,
    pub harmonic: f64,
    pub performance: f64,
    pub chemistry: ChemistrySnapshot,
}

/// Fuses associative recall, personality match and neurochemistry into a
/// single score per concept.
///
/// All mutable state lives in the owned sub-stores. The engine is not
/// internally synchronized: share it behind one lock per instance.
#[derive(Clone, Debug)]
pub struct DecisionEngine {
    threshold: f64,
    memory: AssociativeMemory,
    chemistry: NeurochemicalState,
    personalities: PersonalitySet,
}

impl DecisionEngine {
    pub fn new(config: &Config) -> Self {
        let scorer = HarmonicScorer::new(config.harmonic_alpha);
        Self {
            threshold: config.decision_threshold,
            memory: AssociativeMemory::new(scorer, config.memory_decay),
            chemistry: NeurochemicalState::new(
                &config.neurotransmitter_baseline,
                &config.receptor_baseline,
            ),
            personalities: PersonalitySet::new(),
        }
    }

    pub fn store(&mut self, key: &str, vector: Vec<f64>, reward: f64) {
        self.memory.store(key, vector, reward);
    }

    pub fn modulate(&mut self, neurotransmitter: &str, factor: f64) -> Result<f64> {
        self.chemistry.modulate(neurotransmitter, factor)
    }

    pub fn update_receptor(&mut self, receptor: &str, delta: f64) -> Result<f64> {
        self.chemistry.update_receptor(receptor, delta)
    }

    pub fn add_personality(&mut self, profile: PersonalityProfile) {
        self.personalities.add(profile);
    }

    /// Scale every stored performance value. See
    /// [`AssociativeMemory::scale_performance`].
    pub fn scale_performance(&mut self, factor: f64) {
        self.memory.scale_performance(factor);
    }

    pub fn memory(&self) -> &AssociativeMemory {
        &self.memory
    }

    pub fn chemistry(&self) -> &NeurochemicalState {
        &self.chemistry
    }

    pub fn personalities(&self) -> &PersonalitySet {
        &self.personalities
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `concept` under `context` and pick an action.
    ///
    /// ```text
    /// chem  = 1 + 0.5 · 5HT2A
    /// score = (0.4·harmonic + 0.3·performance + 0.3·match) · chem
    /// ```
    ///
    /// The action is `concept` when `score > threshold`, otherwise `"hold"`.
    pub fn decide(
        &self,
        context: &BTreeMap<String, f64>,
        concept: &str,
    ) -> Result<(String, Report)> {
        let (active, match_score) = self
            .personalities
            .best_match(context)
            .ok_or(EngineError::NoPersonalityRegistered)?;

        let recall = self.memory.recall(concept)?;

        let receptor = self
            .chemistry
            .receptor(FUSION_RECEPTOR)
            .ok_or_else(|| EngineError::MissingReceptor(FUSION_RECEPTOR.to_string()))?;
        let serotonin = self
            .chemistry
            .neurotransmitter(REPORTED_NEUROTRANSMITTER)
            .ok_or_else(|| EngineError::UnknownKey(REPORTED_NEUROTRANSMITTER.to_string()))?;

        let chem_factor = 1.0 + CHEMISTRY_GAIN * receptor;
        let score = (HARMONIC_WEIGHT * recall.harmonic
            + PERFORMANCE_WEIGHT * recall.performance
            + PERSONALITY_WEIGHT * match_score)
            * chem_factor;

        let action = if score > self.threshold {
            concept.to_string()
        } else {
            HOLD_ACTION.to_string()
        };

        tracing::debug!(
            concept,
            action = %action,
            score,
            personality = active.name(),
            harmonic = recall.harmonic,
            performance = recall.performance,
            chem_factor,
            "decision"
        );

        let report = Report {
            action: action.clone(),
            score,
            personality: active.name().to_string(),
            harmonic: recall.harmonic,
            performance: recall.performance,
            chemistry: ChemistrySnapshot {
                serotonin,
                receptor_5ht2a: receptor,
            },
        };
        Ok((action, report))
    }
}
