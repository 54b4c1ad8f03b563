//! Build report - durable accounting of one build run

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one completed build.
///
/// `total == built + skipped` always holds for a run that returned; a run
/// that errored returns no report at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    total: usize,
    built: usize,
    skipped: usize,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl BuildReport {
    pub(crate) fn new(
        total: usize,
        built: usize,
        skipped: usize,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            total,
            built,
            skipped,
            started_at,
            finished_at,
        }
    }

    /// Total number of records across all partitions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of artifacts written by this run.
    #[must_use]
    pub const fn built(&self) -> usize {
        self.built
    }

    /// Number of records skipped because their artifact already existed.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// When the build started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the build finished.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Wall-clock duration of the build.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
