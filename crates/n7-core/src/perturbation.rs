//! Dose-driven perturbation of an engine's chemistry and memory.

use crate::constants::{FUSION_RECEPTOR, REPORTED_NEUROTRANSMITTER};
use crate::engine::DecisionEngine;
use crate::error::{EngineError, Result};

/// Serotonin multiplier slope: factor = 1 + dose / SEROTONIN_DIVISOR.
const SEROTONIN_DIVISOR: f64 = 20.0;

/// Receptor delta slope: delta = dose / RECEPTOR_DIVISOR.
const RECEPTOR_DIVISOR: f64 = 50.0;

/// Multiplier applied to every stored performance value.
const PERFORMANCE_BOOST: f64 = 1.2;

/// Apply a psychedelic dose (milligrams) to the engine.
///
/// Scales serotonin by `1 + dose/20`, raises `5HT2A` by `dose/50` and boosts
/// every performance value by 1.2 without clamping. Invalid doses are
/// rejected before anything is mutated.
pub fn simulate_psychedelic(engine: &mut DecisionEngine, dose_mg: f64) -> Result<()> {
    if !dose_mg.is_finite() || dose_mg < 0.0 {
        return Err(EngineError::InvalidDose(dose_mg));
    }
    if engine.chemistry().neurotransmitter(REPORTED_NEUROTRANSMITTER).is_none() {
        return Err(EngineError::UnknownKey(REPORTED_NEUROTRANSMITTER.to_string()));
    }
    if engine.chemistry().receptor(FUSION_RECEPTOR).is_none() {
        return Err(EngineError::MissingReceptor(FUSION_RECEPTOR.to_string()));
    }

    let serotonin = engine.modulate(REPORTED_NEUROTRANSMITTER, 1.0 + dose_mg / SEROTONIN_DIVISOR)?;
    let receptor = engine.update_receptor(FUSION_RECEPTOR, dose_mg / RECEPTOR_DIVISOR)?;
    engine.scale_performance(PERFORMANCE_BOOST);

    tracing::debug!(dose_mg, serotonin, receptor, "applied dose");
    Ok(())
}
