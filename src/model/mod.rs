//! Classifier boundary and scoring adapter
//!
//! The trained model lives outside this crate; [`EdgeClassifier`] is its
//! interface. Scoring is inference-only by construction: the trait takes
//! `&self`, so no normalization statistics or gradient state can be updated
//! during a pass. A classifier that rejects its input (shape mismatch,
//! out-of-range node index, non-finite features) fails the whole operation;
//! there is no retry or fallback at this layer.

mod linear;

pub use linear::LinearEdgeClassifier;

use ndarray::{Array1, ArrayView2};

use crate::event::{EventGraph, ScoredEvent};
use crate::graph::symmetrize;
use crate::Result;

/// A trained binary edge classifier.
///
/// `forward` returns one raw (pre-squash) value per column of the given
/// edge list. Implementations are expected to be deterministic for a fixed
/// input; internal vectorization is opaque to the caller.
pub trait EdgeClassifier {
    /// Raw classifier output for each edge.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Inference`] when the input is malformed.
    fn forward(
        &self,
        features: ArrayView2<'_, f32>,
        edge_index: ArrayView2<'_, i64>,
    ) -> Result<Array1<f32>>;

    /// Extract the model's input from a record.
    ///
    /// Defaults to the full node-feature matrix; models trained on a
    /// feature subset override this.
    fn input_data<'a>(&self, event: &'a EventGraph) -> ArrayView2<'a, f32> {
        event.features().view()
    }
}

/// Logistic squashing of a raw classifier output into `[0, 1]`.
#[must_use]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Score an owned event record.
///
/// Symmetrizes the record's edge list, extracts the model input, invokes
/// the classifier once, squashes the raw output into probabilities, and
/// returns the typed scored variant. The caller passes an independent copy
/// when the record is shared; this function never touches the original.
///
/// The returned scores have length `2E`: one probability per direction of
/// every directed edge.
///
/// # Errors
///
/// Propagates [`crate::Error::Inference`] from the classifier.
pub fn score_event<M>(model: &M, event: EventGraph) -> Result<ScoredEvent>
where
    M: EdgeClassifier + ?Sized,
{
    let doubled = symmetrize(event.edge_index());
    let raw = model.forward(model.input_data(&event), doubled.view())?;
    let scores = raw.mapv(sigmoid);
    Ok(ScoredEvent::new(event, scores))
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2, Array1, ArrayView2};

    use super::*;

    /// Scores every edge with a fixed raw value.
    struct ConstantScorer(f32);

    impl EdgeClassifier for ConstantScorer {
        fn forward(
            &self,
            _features: ArrayView2<'_, f32>,
            edge_index: ArrayView2<'_, i64>,
        ) -> crate::Result<Array1<f32>> {
            Ok(Array1::from_elem(edge_index.ncols(), self.0))
        }
    }

    #[test]
    fn test_sigmoid_bounds() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(20.0) > 0.999);
        assert!(sigmoid(-20.0) < 0.001);
    }

    #[test]
    fn test_score_event_doubles_edges() {
        let event = EventGraph::new(
            "0000000009",
            arr2(&[[0, 1, 2], [1, 2, 0]]),
            arr2(&[[1.0], [2.0], [3.0]]),
            arr1(&[1.0, 0.0, 1.0]),
        );

        let scored = score_event(&ConstantScorer(0.0), event).unwrap();
        assert_eq!(scored.scores().len(), 6);
        for &s in scored.scores() {
            assert!((s - 0.5).abs() < 1e-6);
        }
        // The record itself is carried through unchanged
        assert_eq!(scored.event().num_edges(), 3);
    }
}
