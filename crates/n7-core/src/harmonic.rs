use std::f64::consts::FRAC_PI_3;

use crate::constants::HARMONIC_BOUND;

/// 3x3 sample built from the first three components of three vectors.
pub type SampleMatrix = [[f64; 3]; 3];

/// Fixed trigonometric weighting of a 3x3 sample, squashed by tanh.
///
/// `W[i][j] = sin(π/3 · i) · cos(π/3 · j)`. Row 0 is identically zero, so
/// the first sampled vector never moves the score. Not learned, never updated.
#[derive(Clone, Debug)]
pub struct HarmonicScorer {
    alpha: f64,
    weights: SampleMatrix,
}

impl HarmonicScorer {
    pub fn new(alpha: f64) -> Self {
        let mut weights = [[0.0; 3]; 3];
        for (i, row) in weights.iter_mut().enumerate() {
            for (j, w) in row.iter_mut().enumerate() {
                *w = (FRAC_PI_3 * i as f64).sin() * (FRAC_PI_3 * j as f64).cos();
            }
        }
        Self { alpha, weights }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn weights(&self) -> &SampleMatrix {
        &self.weights
    }

    /// tanh(alpha · Σ W[i][j] · m[i][j]). Range: (-1, 1), saturated tanh
    /// is pinned to the nearest value inside.
    pub fn evaluate(&self, matrix: &SampleMatrix) -> f64 {
        let sum: f64 = self
            .weights
            .iter()
            .flatten()
            .zip(matrix.iter().flatten())
            .map(|(w, m)| w * m)
            .sum();
        (self.alpha * sum)
            .tanh()
            .clamp(-HARMONIC_BOUND, HARMONIC_BOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_weight_pattern() {
        let scorer = HarmonicScorer::new(1.0);
        let w = scorer.weights();
        let s = 3f64.sqrt() / 2.0;
        assert_eq!(w[0], [0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(w[1][0], s, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1][1], s * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1][2], -s * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(w[2][0], s, epsilon = 1e-12);
        assert_abs_diff_eq!(w[2][2], -s * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_matrix_scores_zero() {
        let scorer = HarmonicScorer::new(2.0);
        assert_eq!(scorer.evaluate(&[[0.0; 3]; 3]), 0.0);
    }

    #[test]
    fn test_first_row_ignored() {
        let scorer = HarmonicScorer::new(1.0);
        let a = [[9.0, -4.0, 2.0], [0.1, 0.2, 0.3], [0.3, 0.2, 0.1]];
        let b = [[0.0, 0.0, 0.0], [0.1, 0.2, 0.3], [0.3, 0.2, 0.1]];
        assert_eq!(scorer.evaluate(&a), scorer.evaluate(&b));
    }

    #[test]
    fn test_known_value() {
        let scorer = HarmonicScorer::new(0.5);
        let m = [[0.0; 3], [1.0, 0.0, 0.0], [0.0; 3]];
        let expected = (0.5 * 3f64.sqrt() / 2.0).tanh();
        assert_abs_diff_eq!(scorer.evaluate(&m), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_alpha_sign_flips_score() {
        let m = [[0.0; 3], [0.4, 0.1, 0.2], [0.3, 0.0, 0.1]];
        let pos = HarmonicScorer::new(1.0).evaluate(&m);
        let neg = HarmonicScorer::new(-1.0).evaluate(&m);
        assert_abs_diff_eq!(pos, -neg, epsilon = 1e-12);
    }

    #[test]
    fn test_saturated_input_stays_inside_unit_interval() {
        let scorer = HarmonicScorer::new(1.0);
        let hi = scorer.evaluate(&[[0.0; 3], [30.0, 0.0, 0.0], [0.0; 3]]);
        let lo = scorer.evaluate(&[[0.0; 3], [-30.0, 0.0, 0.0], [0.0; 3]]);
        assert_eq!(hi, HARMONIC_BOUND);
        assert_eq!(lo, -HARMONIC_BOUND);
        assert!(hi < 1.0 && lo > -1.0);
    }

    #[test]
    fn test_large_alpha_stays_inside_unit_interval() {
        let scorer = HarmonicScorer::new(1e6);
        let r = scorer.evaluate(&[[0.0; 3], [0.2, 0.1, 0.3], [0.1, 0.0, 0.4]]);
        assert!(r > -1.0 && r < 1.0);
    }

    proptest! {
        #[test]
        fn evaluate_bounded_and_deterministic(
            values in prop::array::uniform9(-1e300f64..=1e300),
            alpha in -1e6f64..=1e6,
        ) {
            let m = [
                [values[0], values[1], values[2]],
                [values[3], values[4], values[5]],
                [values[6], values[7], values[8]],
            ];
            let scorer = HarmonicScorer::new(alpha);
            let first = scorer.evaluate(&m);
            prop_assert!(first > -1.0 && first < 1.0);
            prop_assert_eq!(first, scorer.evaluate(&m));
        }
    }
}
