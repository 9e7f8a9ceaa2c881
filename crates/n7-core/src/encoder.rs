//! Concept → fixed-width unit vector.
//!
//! The engine only needs finite vectors with at least three components; how
//! they are produced is up to the [`Encoder`] implementation.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::EPSILON;
use crate::error::EncodeError;

pub trait Encoder {
    fn dimension(&self) -> usize;
    fn encode(&self, concept: &str) -> Vec<f64>;
}

/// Embedding-table encoder with a deterministic hash fallback.
///
/// Known concepts map to their (normalized) embedding. Unknown concepts get a
/// pseudo-random vector seeded from a hash of the concept, so the same concept
/// always encodes to the same vector within a build.
#[derive(Clone, Debug)]
pub struct HashEncoder {
    dimension: usize,
    embeddings: HashMap<String, Vec<f64>>,
}

impl HashEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            embeddings: HashMap::new(),
        }
    }

    pub fn with_embeddings(
        embeddings: HashMap<String, Vec<f64>>,
        dimension: usize,
    ) -> Result<Self, EncodeError> {
        for (concept, embedding) in &embeddings {
            if embedding.len() != dimension {
                return Err(EncodeError::DimensionMismatch {
                    concept: concept.clone(),
                    expected: dimension,
                    got: embedding.len(),
                });
            }
        }
        Ok(Self {
            dimension,
            embeddings,
        })
    }

    fn hashed(&self, concept: &str) -> Vec<f64> {
        let mut hasher = DefaultHasher::new();
        concept.hash(&mut hasher);
        let mut rng = SmallRng::seed_from_u64(hasher.finish());
        (0..self.dimension)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect()
    }
}

impl Encoder for HashEncoder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode(&self, concept: &str) -> Vec<f64> {
        let raw = match self.embeddings.get(concept) {
            Some(embedding) => embedding.clone(),
            None => self.hashed(concept),
        };
        normalize(raw)
    }
}

/// L2-normalize. Near-zero vectors are returned unchanged.
pub fn normalize(mut v: Vec<f64>) -> Vec<f64> {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm < EPSILON {
        return v;
    }
    for x in &mut v {
        *x /= norm;
    }
    v
}
