//! Event Id - numeric identity derived from an external event reference

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Width of the numeric suffix on an event reference.
///
/// Event references look like `path/to/event0000000042`: an opaque prefix
/// followed by a fixed-width zero-padded decimal id. Only the suffix is
/// meaningful here.
pub const ID_SUFFIX_WIDTH: usize = 10;

/// Numeric identity of one event.
///
/// Derived from the last [`ID_SUFFIX_WIDTH`] characters of the event's
/// external reference, with leading zeros dropped. The [`fmt::Display`] form
/// (plain decimal, no padding, no extension) is the artifact path component.
///
/// ## Example
///
/// ```rust
/// use edgescore::event::EventId;
///
/// let id = EventId::parse("path/to/event0000000042")?;
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// # Ok::<(), edgescore::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(u64);

impl EventId {
    /// Wrap a raw numeric id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Derive the id from an external event reference.
    ///
    /// The reference is treated as a string and its fixed-width suffix is
    /// taken verbatim; the suffix must be exactly [`ID_SUFFIX_WIDTH`] ASCII
    /// digits. Anything shorter, or a suffix containing a non-digit, is a
    /// malformed reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentifierFormat`] if the reference is shorter than
    /// the suffix width or the suffix is not all ASCII digits.
    pub fn parse(reference: &str) -> Result<Self> {
        let malformed = |reason: String| Error::IdentifierFormat {
            reference: reference.to_string(),
            reason,
        };

        let start = reference
            .len()
            .checked_sub(ID_SUFFIX_WIDTH)
            .ok_or_else(|| malformed(format!("shorter than {ID_SUFFIX_WIDTH} characters")))?;
        let suffix = reference
            .get(start..)
            .ok_or_else(|| malformed("suffix is not ASCII".to_string()))?;

        if !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!(
                "suffix {suffix:?} contains a non-digit character"
            )));
        }

        // 10 decimal digits always fit in u64
        let value = suffix
            .parse::<u64>()
            .map_err(|e| malformed(format!("suffix {suffix:?} did not parse: {e}")))?;

        Ok(Self(value))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
