//! Partitioned dataset - the read-only boundary to the data collaborator

use super::{EventGraph, Partition};

/// The three named, ordered event collections a build runs over.
///
/// Produced and owned by the external dataset-preparation stage; this crate
/// only reads it. Iteration order within a partition is the dataset's order.
#[derive(Debug, Clone, Default)]
pub struct PartitionedDataset {
    train: Vec<EventGraph>,
    val: Vec<EventGraph>,
    test: Vec<EventGraph>,
}

impl PartitionedDataset {
    /// Assemble a dataset from its three partitions.
    #[must_use]
    pub const fn new(
        train: Vec<EventGraph>,
        val: Vec<EventGraph>,
        test: Vec<EventGraph>,
    ) -> Self {
        Self { train, val, test }
    }

    /// Get one partition's events, in dataset order.
    #[must_use]
    pub fn partition(&self, partition: Partition) -> &[EventGraph] {
        match partition {
            Partition::Train => &self.train,
            Partition::Val => &self.val,
            Partition::Test => &self.test,
        }
    }

    /// Number of events in one partition.
    #[must_use]
    pub fn len(&self, partition: Partition) -> usize {
        self.partition(partition).len()
    }

    /// Total number of events across all partitions.
    #[must_use]
    pub fn total_len(&self) -> usize {
        Partition::ALL.iter().map(|&p| self.len(p)).sum()
    }

    /// Check whether every partition is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}
