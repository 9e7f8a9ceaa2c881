/// Largest f64 below 1.0; harmonic scores never reach ±1.
pub const HARMONIC_BOUND: f64 = 1.0 - f64::EPSILON / 2.0;

/// Maximum number of vectors retained per memory key (FIFO eviction).
pub const HISTORY_CAPACITY: usize = 10;

/// Minimum number of stored vectors before recall evaluates the harmonic matrix.
pub const HARMONIC_SAMPLE: usize = 3;

/// Upper bound for any neurotransmitter level.
pub const NEUROTRANSMITTER_MAX: f64 = 5.0;

/// Upper bound for any receptor level.
pub const RECEPTOR_MAX: f64 = 1.5;

/// Bound (symmetric) on stored performance and personality traits.
pub const UNIT_BOUND: f64 = 1.0;

/// Receptor whose level scales the fused decision score.
pub const FUSION_RECEPTOR: &str = "5HT2A";

/// Neurotransmitter reported alongside every decision.
pub const REPORTED_NEUROTRANSMITTER: &str = "serotonin";

/// Fusion weight of the harmonic score.
pub const HARMONIC_WEIGHT: f64 = 0.4;

/// Fusion weight of the decayed performance.
pub const PERFORMANCE_WEIGHT: f64 = 0.3;

/// Fusion weight of the active personality's match score.
pub const PERSONALITY_WEIGHT: f64 = 0.3;

/// Chemistry factor slope: factor = 1 + CHEMISTRY_GAIN * receptor level.
pub const CHEMISTRY_GAIN: f64 = 0.5;

/// Action emitted when the fused score does not clear the threshold.
pub const HOLD_ACTION: &str = "hold";

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;
