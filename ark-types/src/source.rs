//! Source metadata types usable across crates.

/// Typed key identifying a series source (the query client behind a dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceKey(pub &'static str);

impl SourceKey {
    /// Construct a new typed source key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<SourceKey> for &'static str {
    fn from(k: SourceKey) -> Self {
        k.0
    }
}
