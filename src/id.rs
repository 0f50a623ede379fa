use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Global counter, never reset, so ids are unique for the life of the process.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier assigned to every `StepRange` at construction.
///
/// Ids take no part in equality between ranges; they only let callers tell
/// individual values apart. Copies of a range share its id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeId(u64);

impl RangeId {
    /// Allocates the next id.
    #[inline]
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeId({})", self)
    }
}

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RG{:012X}", self.0)
    }
}
