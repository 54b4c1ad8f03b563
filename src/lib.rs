//! # Edgescore: Edge-Classifier Telemetry and Artifact Materialization
//!
//! Edgescore is the evaluation-and-materialization stage of a graph-based
//! edge-classification pipeline. It turns a trained binary classifier's raw
//! scores into efficiency/purity/AUC curves, and it runs that classifier over
//! every partition of a dataset to produce persisted, per-event scored
//! artifacts for the next pipeline stage.
//!
//! ## Design Principles
//!
//! - **Resumable by construction**: artifact existence at a deterministic
//!   path is the sole skip signal; a re-run after a crash resumes from the
//!   first unbuilt event with no explicit checkpoint.
//! - **Inference is read-only**: the classifier is held behind `&impl
//!   EdgeClassifier` for the whole build, so no model state can mutate.
//! - **Typed scoring**: scoring produces a [`ScoredEvent`](event::ScoredEvent)
//!   from an owned copy of the raw record; shared dataset records are never
//!   mutated in place.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use edgescore::build::{ArtifactBuilder, BuildConfig};
//! use edgescore::event::PartitionedDataset;
//! use edgescore::model::LinearEdgeClassifier;
//!
//! let config = BuildConfig::new("output/gnn");
//! let dataset = PartitionedDataset::new(vec![], vec![], vec![]);
//! let model = LinearEdgeClassifier::new(vec![0.5; 6], 0.0)?;
//!
//! let builder = ArtifactBuilder::new(&config);
//! let report = builder.build(&dataset, &model)?;
//! println!("built {} of {} events", report.built(), report.total());
//! # Ok::<(), edgescore::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod build;
pub mod error;
pub mod event;
pub mod graph;
pub mod metrics;
pub mod model;
pub mod plot;
pub mod store;

pub use error::{Error, Result};
