//! Metrics aggregator - explicit evaluation-pass state machine

use ndarray::ArrayView1;

use super::curves::EffPurCurves;
use super::roc::roc_curve;
use crate::{Error, Result};

/// Lifecycle of an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Accumulating,
    Finalized,
}

/// Accumulates (predictions, truth) batches and computes the telemetry
/// curves of one evaluation pass.
///
/// The lifecycle is `Idle → Accumulating → Finalized`, driven explicitly:
/// [`begin`](Self::begin) resets and enters Accumulating,
/// [`observe`](Self::observe) appends one batch,
/// [`finalize`](Self::finalize) consumes the accumulated data exactly once.
/// Out-of-sequence calls are usage errors, never silently ignored — a fully
/// skipped pass must not produce empty curves.
#[derive(Debug)]
pub struct MetricsAggregator {
    state: State,
    scores: Vec<f64>,
    truth: Vec<f64>,
}

impl MetricsAggregator {
    /// Create an idle aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Idle,
            scores: Vec::new(),
            truth: Vec::new(),
        }
    }

    /// Start an evaluation pass.
    ///
    /// Valid from any state; clears previously accumulated data, so a
    /// finalized aggregator can be reused for a fresh pass.
    pub fn begin(&mut self) {
        self.scores.clear();
        self.truth.clear();
        self.state = State::Accumulating;
    }

    /// Append one batch of predictions and matching truth labels.
    ///
    /// Order across calls is preserved, but the final computation is
    /// order-independent.
    ///
    /// # Errors
    ///
    /// [`Error::Usage`] if no pass is active or the batch lengths differ.
    pub fn observe(
        &mut self,
        predictions: ArrayView1<'_, f32>,
        truth: ArrayView1<'_, f32>,
    ) -> Result<()> {
        if self.state != State::Accumulating {
            return Err(Error::Usage("observe() called without begin()"));
        }
        if predictions.len() != truth.len() {
            return Err(Error::Usage("batch predictions and truth differ in length"));
        }
        self.scores.extend(predictions.iter().map(|&p| f64::from(p)));
        self.truth.extend(truth.iter().map(|&t| f64::from(t)));
        Ok(())
    }

    /// Number of samples accumulated so far.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.scores.len()
    }

    /// Finish the pass and compute the curves.
    ///
    /// Sweeps the ROC curve over the full accumulated set, derives
    /// `pur = 1 - fpr`, computes the trapezoidal area under the
    /// efficiency–purity curve, and filters the sentinel so only entries
    /// with `cut <= 1` remain. The accumulated data is consumed; the
    /// aggregator ends Finalized and needs a new [`begin`](Self::begin)
    /// before further use.
    ///
    /// # Errors
    ///
    /// - [`Error::Usage`] if no pass is active or no batch was observed.
    /// - [`Error::Degenerate`] for single-class truth, or if no curve entry
    ///   survives the cut filter (scores outside the probability range).
    pub fn finalize(&mut self) -> Result<EffPurCurves> {
        if self.state != State::Accumulating {
            return Err(Error::Usage("finalize() called without begin()"));
        }
        if self.scores.is_empty() {
            return Err(Error::Usage("finalize() called on an empty evaluation pass"));
        }

        let scores = std::mem::take(&mut self.scores);
        let truth = std::mem::take(&mut self.truth);
        self.state = State::Finalized;

        let roc = roc_curve(&scores, &truth)?;
        let pur: Vec<f64> = roc.fpr.iter().map(|&f| 1.0 - f).collect();

        // Area under eff-pur, anchored at the sentinel origin (eff 0, pur 1)
        let auc: f64 = roc
            .tpr
            .windows(2)
            .zip(pur.windows(2))
            .map(|(e, p)| (e[1] - e[0]) * (p[1] + p[0]) / 2.0)
            .sum();

        let mut eff_kept = Vec::new();
        let mut pur_kept = Vec::new();
        let mut cuts_kept = Vec::new();
        for (i, &cut) in roc.thresholds.iter().enumerate() {
            if cut <= 1.0 {
                eff_kept.push(roc.tpr[i]);
                pur_kept.push(pur[i]);
                cuts_kept.push(cut);
            }
        }
        if cuts_kept.is_empty() {
            return Err(Error::Degenerate(
                "no score cut at or below 1; scores are outside the probability range".to_string(),
            ));
        }

        Ok(EffPurCurves::new(eff_kept, pur_kept, cuts_kept, auc))
    }
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::arr1;

    use super::*;

    fn observe_pair(aggregator: &mut MetricsAggregator, scores: &[f32], truth: &[f32]) {
        aggregator
            .observe(arr1(scores).view(), arr1(truth).view())
            .unwrap();
    }

    #[test]
    fn test_observe_before_begin_rejected() {
        let mut aggregator = MetricsAggregator::new();
        let err = aggregator
            .observe(arr1(&[0.5_f32]).view(), arr1(&[1.0_f32]).view())
            .unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_finalize_before_begin_rejected() {
        let mut aggregator = MetricsAggregator::new();
        assert!(matches!(aggregator.finalize(), Err(Error::Usage(_))));
    }

    #[test]
    fn test_finalize_empty_pass_rejected() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        assert!(matches!(aggregator.finalize(), Err(Error::Usage(_))));
    }

    #[test]
    fn test_double_finalize_rejected() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        observe_pair(&mut aggregator, &[0.9, 0.1], &[1.0, 0.0]);
        aggregator.finalize().unwrap();
        assert!(matches!(aggregator.finalize(), Err(Error::Usage(_))));
    }

    #[test]
    fn test_begin_after_finalize_starts_clean() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        observe_pair(&mut aggregator, &[0.9, 0.1], &[1.0, 0.0]);
        aggregator.finalize().unwrap();

        aggregator.begin();
        assert_eq!(aggregator.sample_count(), 0);
        observe_pair(&mut aggregator, &[0.7, 0.2], &[1.0, 0.0]);
        assert!(aggregator.finalize().is_ok());
    }

    #[test]
    fn test_mismatched_batch_rejected() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        let err = aggregator
            .observe(arr1(&[0.5_f32, 0.6]).view(), arr1(&[1.0_f32]).view())
            .unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_single_class_truth_rejected() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        observe_pair(&mut aggregator, &[0.9, 0.8, 0.7], &[1.0, 1.0, 1.0]);
        assert!(matches!(aggregator.finalize(), Err(Error::Degenerate(_))));
    }

    #[test]
    fn test_worked_example() {
        // truth [0,0,1,1], scores [0.1,0.4,0.35,0.8]:
        // the tightest cut keeps only the best true edge (eff 0.5, pur 1.0);
        // the loosest cut keeps everything (eff 1.0, fpr 1.0)
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        observe_pair(&mut aggregator, &[0.1, 0.4, 0.35, 0.8], &[0.0, 0.0, 1.0, 1.0]);
        let curves = aggregator.finalize().unwrap();

        // Cuts are the observed f32 scores, widened once
        let expected_cuts = [0.8_f32, 0.4, 0.35, 0.1].map(f64::from);
        assert_eq!(curves.cuts().to_vec(), expected_cuts.to_vec());
        assert!((curves.eff()[0] - 0.5).abs() < 1e-12);
        assert!((curves.pur()[0] - 1.0).abs() < 1e-12);
        assert!((curves.eff()[3] - 1.0).abs() < 1e-12);
        assert!(curves.pur()[3].abs() < 1e-12);

        // Efficiency-purity trade-off is non-increasing
        for pair in curves.pur().windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert!((curves.auc() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_accumulation_spans_batches() {
        // The same samples split across two batches give the same curves
        let mut one = MetricsAggregator::new();
        one.begin();
        observe_pair(&mut one, &[0.1, 0.4, 0.35, 0.8], &[0.0, 0.0, 1.0, 1.0]);
        let whole = one.finalize().unwrap();

        let mut two = MetricsAggregator::new();
        two.begin();
        observe_pair(&mut two, &[0.1, 0.4], &[0.0, 0.0]);
        observe_pair(&mut two, &[0.35, 0.8], &[1.0, 1.0]);
        let split = two.finalize().unwrap();

        assert_eq!(whole, split);
    }

    #[test]
    fn test_perfect_separation_auc() {
        let mut aggregator = MetricsAggregator::new();
        aggregator.begin();
        observe_pair(&mut aggregator, &[0.9, 0.8, 0.2, 0.1], &[1.0, 1.0, 0.0, 0.0]);
        let curves = aggregator.finalize().unwrap();
        assert!((curves.auc() - 1.0).abs() < 1e-12);
    }
}
