//! Partition - named subset of the dataset

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three named dataset partitions.
///
/// Builds iterate partitions in the fixed order given by [`Partition::ALL`];
/// the directory name under the output root is [`Partition::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Training set.
    Train,
    /// Validation set.
    Val,
    /// Held-out test set.
    Test,
}

impl Partition {
    /// All partitions, in build order.
    pub const ALL: [Self; 3] = [Self::Train, Self::Val, Self::Test];

    /// Directory name for this partition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Val => "val",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order() {
        assert_eq!(
            Partition::ALL.map(Partition::as_str),
            ["train", "val", "test"]
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Partition::Val).unwrap(), "\"val\"");
    }
}
