//! Signature predicates.

use std::fmt;
use std::sync::Arc;

/// A pure function from a byte buffer to "matches / does not match".
///
/// Predicates must treat short or malformed input as a non-match and must
/// never index past the slice they are given. They are shared between the
/// registry snapshot and in-flight sniffs, hence the `Arc`.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&[u8]) -> bool + Send + Sync>);

impl Predicate {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[u8]) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn matches(&self, data: &[u8]) -> bool {
        (self.0)(data)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

impl<F> From<F> for Predicate
where
    F: Fn(&[u8]) -> bool + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
