use core::fmt;
use serde::{Deserialize, Serialize};

/// Labels for the views a dashboard exposes per sensor.
///
/// Each kind maps to one presentation variable name via [`ViewKind::context_key`],
/// and has a short stable label for logs and errors via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ViewKind {
    /// Raw samples sorted by time.
    Raw,
    /// Min-max normalized samples.
    Normalized,
    /// Means over fixed minute buckets of the given length.
    Bucketed(i64),
}

impl ViewKind {
    /// Presentation variable name for this view of `sensor`.
    ///
    /// - `Raw` → `{sensor}_data`
    /// - `Normalized` → `normalized_{sensor}_data`
    /// - `Bucketed(k)` → `{sensor}_{k}_data`
    #[must_use]
    pub fn context_key(self, sensor: &str) -> String {
        match self {
            Self::Raw => format!("{sensor}_data"),
            Self::Normalized => format!("normalized_{sensor}_data"),
            Self::Bucketed(minutes) => format!("{sensor}_{minutes}_data"),
        }
    }

    /// All view kinds for the given bucket intervals, in presentation order.
    #[must_use]
    pub fn all_for(intervals: &[i64]) -> Vec<Self> {
        let mut kinds = vec![Self::Raw, Self::Normalized];
        kinds.extend(intervals.iter().copied().map(Self::Bucketed));
        kinds
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Normalized => f.write_str("normalized"),
            Self::Bucketed(minutes) => write!(f, "bucketed-{minutes}m"),
        }
    }
}
