//! Build configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Options recognized by the artifact builder.
///
/// Deserializable from the pipeline's configuration object; `overwrite`
/// defaults to `false` when absent. The config is passed explicitly into
/// [`ArtifactBuilder::new`](super::ArtifactBuilder::new) — there is no
/// shared mutable configuration global.
///
/// ## Example
///
/// ```rust
/// use edgescore::build::BuildConfig;
///
/// let config: BuildConfig = serde_json::from_str(r#"{"output_dir": "out"}"#)?;
/// assert!(!config.overwrite());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    output_dir: PathBuf,
    #[serde(default)]
    overwrite: bool,
}

impl BuildConfig {
    /// Create a config with `overwrite` off.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            overwrite: false,
        }
    }

    /// Set whether existing artifacts are rebuilt.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Root directory artifacts are written under.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether existing artifacts are rebuilt.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }
}
