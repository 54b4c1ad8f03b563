//! Finalized efficiency/purity curves

use serde::{Deserialize, Serialize};

/// The three telemetry curves of one evaluation pass.
///
/// `eff`, `pur`, and `cuts` share the same length and are ordered by
/// decreasing cut; every cut is a real score threshold (`<= 1`), the
/// reject-everything sentinel having been filtered during finalization.
/// Over this order efficiency is non-decreasing and purity non-increasing,
/// which makes the efficiency–purity plot the conventional operating-point
/// trade-off curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffPurCurves {
    eff: Vec<f64>,
    pur: Vec<f64>,
    cuts: Vec<f64>,
    auc: f64,
}

impl EffPurCurves {
    pub(crate) fn new(eff: Vec<f64>, pur: Vec<f64>, cuts: Vec<f64>, auc: f64) -> Self {
        debug_assert_eq!(eff.len(), pur.len());
        debug_assert_eq!(eff.len(), cuts.len());
        Self {
            eff,
            pur,
            cuts,
            auc,
        }
    }

    /// Efficiency (true-positive rate) per cut.
    #[must_use]
    pub fn eff(&self) -> &[f64] {
        &self.eff
    }

    /// Purity (one minus false-positive rate) per cut.
    #[must_use]
    pub fn pur(&self) -> &[f64] {
        &self.pur
    }

    /// Score cuts, decreasing; never greater than 1.
    #[must_use]
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }

    /// Trapezoidal area under the efficiency–purity curve, anchored at the
    /// zero-efficiency origin.
    #[must_use]
    pub const fn auc(&self) -> f64 {
        self.auc
    }

    /// Number of curve points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// Check whether the curves have no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Efficiency-vs-cut plot data `(x, y)`.
    #[must_use]
    pub fn eff_plot(&self) -> (&[f64], &[f64]) {
        (&self.cuts, &self.eff)
    }

    /// Purity-vs-cut plot data `(x, y)`.
    #[must_use]
    pub fn pur_plot(&self) -> (&[f64], &[f64]) {
        (&self.cuts, &self.pur)
    }

    /// Purity-vs-efficiency plot data `(x, y)`.
    #[must_use]
    pub fn auc_plot(&self) -> (&[f64], &[f64]) {
        (&self.eff, &self.pur)
    }
}
