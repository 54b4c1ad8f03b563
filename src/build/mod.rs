//! Artifact build orchestration
//!
//! Runs the classifier over every partition of a dataset and persists one
//! scored artifact per event. The build is resumable by construction:
//! artifact existence at the deterministic store path is the sole skip
//! signal, so a re-run after a crash resumes from the first unbuilt event
//! with no explicit checkpoint. Any error — malformed identifier,
//! classifier rejection, storage failure — aborts the whole run; there is
//! no per-record isolation or retry.

mod config;
mod report;

pub use config::BuildConfig;
pub use report::BuildReport;

use std::io::{self, Write};

use chrono::Utc;
use tracing::{debug, info};

use crate::event::{Partition, PartitionedDataset};
use crate::model::{score_event, EdgeClassifier};
use crate::store::ArtifactStore;
use crate::Result;

/// Single-line stdout progress indicator, overwritten in place.
struct Progress {
    done: usize,
    total: usize,
}

impl Progress {
    const fn new(total: usize) -> Self {
        Self { done: 0, total }
    }

    /// Advance by one record and redraw.
    #[allow(clippy::cast_precision_loss)]
    fn tick(&mut self) -> Result<()> {
        self.done += 1;
        let percent = if self.total == 0 {
            100.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        };
        let mut out = io::stdout();
        write!(out, "\r{percent:.1}% inference complete")?;
        out.flush()?;
        Ok(())
    }

    /// Terminate the indicator line.
    fn finish(&self) -> Result<()> {
        if self.done > 0 {
            writeln!(io::stdout())?;
        }
        Ok(())
    }
}

/// Builds scored artifacts for every partition of a dataset.
///
/// ## Example
///
/// ```rust,no_run
/// use edgescore::build::{ArtifactBuilder, BuildConfig};
/// use edgescore::event::PartitionedDataset;
/// use edgescore::model::LinearEdgeClassifier;
///
/// let config = BuildConfig::new("output/gnn");
/// let dataset = PartitionedDataset::default();
/// let model = LinearEdgeClassifier::new(vec![1.0, 1.0], 0.0)?;
///
/// let report = ArtifactBuilder::new(&config).build(&dataset, &model)?;
/// assert_eq!(report.total(), report.built() + report.skipped());
/// # Ok::<(), edgescore::Error>(())
/// ```
#[derive(Debug)]
pub struct ArtifactBuilder {
    store: ArtifactStore,
    overwrite: bool,
}

impl ArtifactBuilder {
    /// Create a builder for the configured output root.
    #[must_use]
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            store: ArtifactStore::new(config.output_dir()),
            overwrite: config.overwrite(),
        }
    }

    /// The store this builder writes through.
    #[must_use]
    pub const fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Build artifacts for every record of every partition.
    ///
    /// Partitions are processed in the fixed order train, val, test;
    /// records in dataset order. For each record: derive the event id from
    /// the reference suffix, skip if the artifact exists (unless overwrite
    /// is forced), otherwise score an independent copy and persist it. The
    /// model is borrowed immutably for the whole call, so no training-mode
    /// state can change mid-build. Progress is reported on stdout after
    /// every record, including skipped ones.
    ///
    /// # Errors
    ///
    /// Propagates the first [`crate::Error`] encountered; the run stops at
    /// that record. A later re-invocation skips everything already on disk
    /// and resumes from the first unbuilt record.
    pub fn build<M>(&self, dataset: &PartitionedDataset, model: &M) -> Result<BuildReport>
    where
        M: EdgeClassifier + ?Sized,
    {
        let started_at = Utc::now();
        self.store.ensure_layout()?;

        let mut progress = Progress::new(dataset.total_len());
        let mut built = 0_usize;
        let mut skipped = 0_usize;

        for partition in Partition::ALL {
            for event in dataset.partition(partition) {
                let event_id = event.event_id()?;

                if self.overwrite || !self.store.exists(partition, event_id) {
                    let scored = score_event(model, event.clone())?;
                    self.store.write(partition, event_id, &scored)?;
                    info!(event = %event_id, partition = %partition, "saved scored artifact");
                    built += 1;
                } else {
                    debug!(event = %event_id, partition = %partition, "artifact exists, skipping");
                    skipped += 1;
                }

                progress.tick()?;
            }
        }
        progress.finish()?;

        Ok(BuildReport::new(
            dataset.total_len(),
            built,
            skipped,
            started_at,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{arr1, arr2};
    use tempfile::TempDir;

    use super::*;
    use crate::event::EventGraph;
    use crate::model::LinearEdgeClassifier;

    fn event(reference: &str) -> EventGraph {
        EventGraph::new(
            reference,
            arr2(&[[0, 1], [1, 0]]),
            arr2(&[[1.0], [-1.0]]),
            arr1(&[1.0, 0.0]),
        )
    }

    fn model() -> LinearEdgeClassifier {
        LinearEdgeClassifier::new(vec![1.0, -1.0], 0.0).unwrap()
    }

    #[test]
    fn test_build_counts_add_up() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path());
        let dataset = PartitionedDataset::new(
            vec![event("0000000001"), event("0000000002")],
            vec![event("0000000003")],
            vec![event("0000000004")],
        );

        let report = ArtifactBuilder::new(&config).build(&dataset, &model()).unwrap();
        assert_eq!(report.total(), 4);
        assert_eq!(report.built(), 4);
        assert_eq!(report.skipped(), 0);
        assert!(report.duration() >= chrono::Duration::zero());
    }

    #[test]
    fn test_empty_dataset_builds_nothing() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path());
        let report = ArtifactBuilder::new(&config)
            .build(&PartitionedDataset::default(), &model())
            .unwrap();
        assert_eq!(report.total(), 0);
        assert_eq!(report.built(), 0);
    }

    #[test]
    fn test_malformed_reference_aborts() {
        let dir = TempDir::new().unwrap();
        let config = BuildConfig::new(dir.path());
        let dataset = PartitionedDataset::new(vec![event("bad-ref")], vec![], vec![]);

        let err = ArtifactBuilder::new(&config)
            .build(&dataset, &model())
            .unwrap_err();
        assert!(matches!(err, crate::Error::IdentifierFormat { .. }));
    }
}
