//! Neuro-inspired decision fusion engine.
//!
//! Scores a concept by fusing four signals: a harmonic evaluation of recent
//! associative vectors, an exponentially-decayed performance value, the best
//! personality-context match, and a receptor-driven chemistry factor.
//!
//! Every coefficient is fixed. Nothing here learns.
//!
//! Zero I/O — pure math engine with no opinions about transport or persistence.

pub mod chemistry;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod harmonic;
pub mod memory;
pub mod personality;
pub mod perturbation;

pub use chemistry::NeurochemicalState;
pub use config::Config;
pub use constants::{FUSION_RECEPTOR, HISTORY_CAPACITY, HOLD_ACTION};
pub use encoder::{Encoder, HashEncoder};
pub use engine::{ChemistrySnapshot, DecisionEngine, Report};
pub use error::{ConfigError, EncodeError, EngineError, Result};
pub use harmonic::HarmonicScorer;
pub use memory::{AssociativeMemory, Recall};
pub use personality::{PersonalityProfile, PersonalitySet};
pub use perturbation::simulate_psychedelic;
