//! Event records - raw and scored graph data

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::EventId;
use crate::Result;

/// One raw graph-structured event.
///
/// - `event_ref`: opaque path-like external reference; its numeric suffix is
///   the event identity (see [`EventId::parse`]).
/// - `edge_index`: directed edges as a `(2, E)` matrix of node indices
///   (row 0 = source, row 1 = destination).
/// - `features`: per-node feature matrix of shape `(N, F)`.
/// - `truth`: per-edge ground-truth label (`0.0` / `1.0`), length `E`.
///
/// Records are owned by the dataset; a build takes an independent copy
/// before attaching scores, so the in-memory dataset is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventGraph {
    event_ref: String,
    edge_index: Array2<i64>,
    features: Array2<f32>,
    truth: Array1<f32>,
}

impl EventGraph {
    /// Create a new raw event record.
    #[must_use]
    pub fn new(
        event_ref: impl Into<String>,
        edge_index: Array2<i64>,
        features: Array2<f32>,
        truth: Array1<f32>,
    ) -> Self {
        Self {
            event_ref: event_ref.into(),
            edge_index,
            features,
            truth,
        }
    }

    /// Get the external event reference.
    #[must_use]
    pub fn event_ref(&self) -> &str {
        &self.event_ref
    }

    /// Derive the numeric event identity from the reference suffix.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IdentifierFormat`] for a malformed reference.
    pub fn event_id(&self) -> Result<EventId> {
        EventId::parse(&self.event_ref)
    }

    /// Get the directed edge list, shape `(2, E)`.
    #[must_use]
    pub fn edge_index(&self) -> &Array2<i64> {
        &self.edge_index
    }

    /// Get the node feature matrix, shape `(N, F)`.
    #[must_use]
    pub fn features(&self) -> &Array2<f32> {
        &self.features
    }

    /// Get the per-edge truth labels, length `E`.
    #[must_use]
    pub fn truth(&self) -> &Array1<f32> {
        &self.truth
    }

    /// Number of directed edges `E`.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.edge_index.ncols()
    }

    /// Number of nodes `N`.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.features.nrows()
    }
}

/// A scored event: the raw record plus attached classifier probabilities.
///
/// `scores` has length `2E` — one probability per column of the
/// *symmetrized* edge list (original edges first, reversed edges second),
/// while `edge_index` keeps the directed `E` columns. The downstream stage
/// owns the fold-back convention for the two directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    event: EventGraph,
    scores: Array1<f32>,
}

impl ScoredEvent {
    /// Attach scores to an owned event record.
    #[must_use]
    pub fn new(event: EventGraph, scores: Array1<f32>) -> Self {
        Self { event, scores }
    }

    /// Get the underlying event record.
    #[must_use]
    pub fn event(&self) -> &EventGraph {
        &self.event
    }

    /// Get the per-edge probabilities over the symmetrized edge list.
    #[must_use]
    pub fn scores(&self) -> &Array1<f32> {
        &self.scores
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2};

    use super::*;

    fn sample_event() -> EventGraph {
        EventGraph::new(
            "data/event0000000003",
            arr2(&[[0, 1], [1, 2]]),
            arr2(&[[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]]),
            arr1(&[1.0, 0.0]),
        )
    }

    #[test]
    fn test_event_shape_accessors() {
        let event = sample_event();
        assert_eq!(event.num_edges(), 2);
        assert_eq!(event.num_nodes(), 3);
        assert_eq!(event.event_id().unwrap().value(), 3);
    }

    #[test]
    fn test_scored_event_round_trip() {
        let scored = ScoredEvent::new(sample_event(), arr1(&[0.9, 0.2, 0.8, 0.1]));
        let json = serde_json::to_string(&scored).unwrap();
        let back: ScoredEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scored);
    }
}
