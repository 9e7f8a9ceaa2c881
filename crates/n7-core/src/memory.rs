//! Bounded associative memory with exponentially-decayed performance.
//!
//! Each key keeps a FIFO window of the last [`HISTORY_CAPACITY`] vectors and a
//! scalar performance value. Recall reads the FIRST three vectors of the
//! current window, not the three most recent ones.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::constants::{HARMONIC_SAMPLE, HISTORY_CAPACITY, UNIT_BOUND};
use crate::error::{EngineError, Result};
use crate::harmonic::{HarmonicScorer, SampleMatrix};

/// Output of [`AssociativeMemory::recall`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recall {
    pub harmonic: f64,
    pub performance: f64,
}

#[derive(Clone, Debug)]
struct Entry {
    history: VecDeque<Vec<f64>>,
    performance: f64,
}

#[derive(Clone, Debug)]
pub struct AssociativeMemory {
    scorer: HarmonicScorer,
    decay: f64,
    entries: HashMap<String, Entry>,
}

impl AssociativeMemory {
    pub fn new(scorer: HarmonicScorer, decay: f64) -> Self {
        Self {
            scorer,
            decay,
            entries: HashMap::new(),
        }
    }

    /// Append a vector to the key's window and fold the reward into its
    /// performance: `clamp(old · decay + reward, -1, 1)`, with `old = 0` for
    /// a fresh key.
    pub fn store(&mut self, key: &str, vector: Vec<f64>, reward: f64) {
        let entry = self.entries.entry(key.to_string()).or_insert_with(|| Entry {
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
            performance: 0.0,
        });

        if entry.history.len() == HISTORY_CAPACITY {
            entry.history.pop_front();
        }
        entry.history.push_back(vector);
        entry.performance =
            (entry.performance * self.decay + reward).clamp(-UNIT_BOUND, UNIT_BOUND);

        tracing::trace!(
            key,
            reward,
            performance = entry.performance,
            retained = entry.history.len(),
            "stored memory vector"
        );
    }

    /// Harmonic score of the first three retained vectors plus the stored
    /// performance. Keys with fewer than three vectors score 0.0.
    ///
    /// Performance is returned as stored; values pushed outside [-1, 1] by
    /// [`scale_performance`](Self::scale_performance) are not re-clamped.
    pub fn recall(&self, key: &str) -> Result<Recall> {
        let Some(entry) = self.entries.get(key) else {
            return Ok(Recall {
                harmonic: 0.0,
                performance: 0.0,
            });
        };

        if entry.history.len() < HARMONIC_SAMPLE {
            return Ok(Recall {
                harmonic: 0.0,
                performance: entry.performance,
            });
        }

        let mut matrix: SampleMatrix = [[0.0; 3]; 3];
        for (row, vector) in matrix.iter_mut().zip(entry.history.iter()) {
            if vector.len() < HARMONIC_SAMPLE {
                return Err(EngineError::InvalidVectorDimension {
                    key: key.to_string(),
                    len: vector.len(),
                });
            }
            row.copy_from_slice(&vector[..HARMONIC_SAMPLE]);
        }

        Ok(Recall {
            harmonic: self.scorer.evaluate(&matrix),
            performance: entry.performance,
        })
    }

    /// Multiply every key's performance by `factor`. No clamping: the next
    /// `store` on a key brings it back into range.
    pub fn scale_performance(&mut self, factor: f64) {
        for entry in self.entries.values_mut() {
            entry.performance *= factor;
        }
    }

    /// Stored performance, `None` if the key was never stored.
    pub fn performance(&self, key: &str) -> Option<f64> {
        self.entries.get(key).map(|e| e.performance)
    }

    /// Retained vectors for a key, oldest first.
    pub fn history(&self, key: &str) -> Option<&VecDeque<Vec<f64>>> {
        self.entries.get(key).map(|e| &e.history)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn memory() -> AssociativeMemory {
        AssociativeMemory::new(HarmonicScorer::new(1.0), 0.95)
    }

    fn v(a: f64, b: f64, c: f64) -> Vec<f64> {
        vec![a, b, c, 0.0]
    }

    #[test]
    fn test_unknown_key_cold_start() {
        let mem = memory();
        let r = mem.recall("nothing").unwrap();
        assert_eq!(r.harmonic, 0.0);
        assert_eq!(r.performance, 0.0);
        assert_eq!(mem.performance("nothing"), None);
    }

    #[test]
    fn test_cold_start_under_three_vectors() {
        let mut mem = memory();
        mem.store("k", v(0.1, 0.2, 0.3), 0.5);
        let r = mem.recall("k").unwrap();
        assert_eq!(r.harmonic, 0.0);
        assert_abs_diff_eq!(r.performance, 0.5);

        mem.store("k", v(0.3, 0.2, 0.1), 0.2);
        let r = mem.recall("k").unwrap();
        assert_eq!(r.harmonic, 0.0);
        assert_abs_diff_eq!(r.performance, 0.5 * 0.95 + 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_performance_clamped_on_store() {
        let mut mem = memory();
        mem.store("hi", v(0.0, 0.0, 0.0), 5.0);
        assert_eq!(mem.performance("hi"), Some(1.0));
        mem.store("lo", v(0.0, 0.0, 0.0), -3.0);
        assert_eq!(mem.performance("lo"), Some(-1.0));
    }

    #[test]
    fn test_recall_uses_first_three_of_window() {
        let mut mem = memory();
        let vectors = [
            v(0.1, 0.0, 0.0),
            v(0.2, 0.3, 0.1),
            v(0.4, 0.1, 0.5),
            v(0.9, 0.8, 0.7),
        ];
        for vec in &vectors {
            mem.store("k", vec.clone(), 0.1);
        }

        let scorer = HarmonicScorer::new(1.0);
        let first = [[0.1, 0.0, 0.0], [0.2, 0.3, 0.1], [0.4, 0.1, 0.5]];
        let last = [[0.2, 0.3, 0.1], [0.4, 0.1, 0.5], [0.9, 0.8, 0.7]];

        let r = mem.recall("k").unwrap();
        assert_eq!(r.harmonic, scorer.evaluate(&first));
        assert_ne!(r.harmonic, scorer.evaluate(&last));
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut mem = memory();
        for i in 0..11 {
            mem.store("k", v(i as f64, 0.0, 0.0), 0.0);
        }
        let history = mem.history("k").unwrap();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.front().unwrap()[0], 1.0);
        assert_eq!(history.back().unwrap()[0], 10.0);
    }

    #[test]
    fn test_recall_after_eviction_shifts_window() {
        let mut mem = memory();
        for i in 0..11 {
            mem.store("k", v(0.01 * i as f64, 0.02, 0.03), 0.0);
        }
        let scorer = HarmonicScorer::new(1.0);
        let expected = [[0.01, 0.02, 0.03], [0.02, 0.02, 0.03], [0.03, 0.02, 0.03]];
        let r = mem.recall("k").unwrap();
        assert_abs_diff_eq!(r.harmonic, scorer.evaluate(&expected), epsilon = 1e-12);
    }

    #[test]
    fn test_short_vector_rejected_at_recall() {
        let mut mem = memory();
        mem.store("k", vec![0.1, 0.2, 0.3], 0.0);
        mem.store("k", vec![0.1, 0.2], 0.0);
        mem.store("k", vec![0.1, 0.2, 0.3], 0.0);
        match mem.recall("k") {
            Err(EngineError::InvalidVectorDimension { key, len }) => {
                assert_eq!(key, "k");
                assert_eq!(len, 2);
            }
            other => panic!("expected InvalidVectorDimension, got {other:?}"),
        }
    }

    #[test]
    fn test_scale_performance_is_unclamped() {
        let mut mem = memory();
        mem.store("a", v(0.0, 0.0, 0.0), 1.0);
        mem.store("b", v(0.0, 0.0, 0.0), -0.5);
        mem.scale_performance(1.2);

        assert_abs_diff_eq!(mem.recall("a").unwrap().performance, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(mem.performance("b").unwrap(), -0.6, epsilon = 1e-12);

        // next store re-clamps
        mem.store("a", v(0.0, 0.0, 0.0), 0.0);
        assert_eq!(mem.performance("a"), Some(1.0));
    }

    #[test]
    fn test_keys_independent() {
        let mut mem = memory();
        mem.store("a", v(0.0, 0.0, 0.0), 0.3);
        mem.store("b", v(0.0, 0.0, 0.0), 0.6);
        assert_eq!(mem.len(), 2);
        let mut keys: Vec<&str> = mem.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b"]);
        assert_abs_diff_eq!(mem.performance("a").unwrap(), 0.3);
        assert_abs_diff_eq!(mem.performance("b").unwrap(), 0.6);
    }
}
