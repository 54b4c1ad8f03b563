//! Rank-based performance metrics
//!
//! An evaluation pass accumulates per-batch (predictions, truth) pairs and,
//! on completion, derives the three telemetry curves from a single ROC
//! sweep: efficiency vs. cut, purity vs. cut, and the efficiency–purity
//! operating-point trade-off. The accumulator is an explicit state machine
//! any caller can drive directly; it is not tied to a training-loop's
//! callback lifecycle.
//!
//! ## Usage
//!
//! ```rust
//! use edgescore::metrics::MetricsAggregator;
//! use ndarray::arr1;
//!
//! let mut aggregator = MetricsAggregator::new();
//! aggregator.begin();
//! aggregator.observe(
//!     arr1(&[0.1_f32, 0.4, 0.35, 0.8]).view(),
//!     arr1(&[0.0_f32, 0.0, 1.0, 1.0]).view(),
//! )?;
//! let curves = aggregator.finalize()?;
//! assert!(curves.auc() > 0.0);
//! # Ok::<(), edgescore::Error>(())
//! ```

mod aggregator;
mod curves;
mod roc;

pub use aggregator::MetricsAggregator;
pub use curves::EffPurCurves;
pub use roc::{roc_curve, RocCurve};

use ndarray::Axis;

use crate::event::EventGraph;
use crate::model::{score_event, EdgeClassifier};
use crate::Result;

/// Run one full evaluation pass over a slice of events.
///
/// Scores an independent copy of each event, pairs every probability of the
/// symmetrized edge list with its truth label (each directed edge carries
/// its label in both directions), and finalizes the accumulated curves.
///
/// # Errors
///
/// Propagates classifier errors, [`crate::Error::Usage`] for an empty event
/// slice, and [`crate::Error::Degenerate`] for single-class truth.
pub fn evaluate<M>(model: &M, events: &[EventGraph]) -> Result<EffPurCurves>
where
    M: EdgeClassifier + ?Sized,
{
    let mut aggregator = MetricsAggregator::new();
    aggregator.begin();
    for event in events {
        let scored = score_event(model, event.clone())?;
        let truth = event.truth();
        let doubled = ndarray::concatenate![Axis(0), truth.view(), truth.view()];
        aggregator.observe(scored.scores().view(), doubled.view())?;
    }
    aggregator.finalize()
}
