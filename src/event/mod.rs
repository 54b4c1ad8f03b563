//! Event data model
//!
//! One *event* is a graph-structured record: node features, directed edges,
//! per-edge truth labels, and an opaque external reference whose numeric
//! suffix identifies the event. The types here separate the raw record
//! ([`EventGraph`]) from its scored form ([`ScoredEvent`]) so inference never
//! mutates a shared record in place.
//!
//! ## Schema Overview
//!
//! ```text
//! PartitionedDataset ──< Partition (train/val/test)
//!                             │
//!                             └──< EventGraph ──(scoring)──> ScoredEvent
//! ```

mod dataset;
mod id;
mod partition;
mod record;

pub use dataset::PartitionedDataset;
pub use id::{EventId, ID_SUFFIX_WIDTH};
pub use partition::Partition;
pub use record::{EventGraph, ScoredEvent};
