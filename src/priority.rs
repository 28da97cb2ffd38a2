use std::cmp::Ordering;
use std::fmt;

use crate::HeapError;

/// A floating-point priority that is never NaN, so it can be totally ordered.
#[derive(Debug, Clone, Copy)]
pub struct Priority(f64);

impl Priority {
    pub fn new(value: f64) -> Result<Self, HeapError> {
        if value.is_nan() {
            return Err(HeapError::IncomparablePriority);
        }
        // -0.0 and 0.0 must compare equal.
        let value = if value == 0.0 { 0.0 } else { value };
        Ok(Priority(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Priority {
    type Error = HeapError;

    fn try_from(value: f64) -> Result<Self, HeapError> {
        Priority::new(value)
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> f64 {
        priority.0
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A payload queued under a priority. Equality and ordering look at the
/// priority alone.
#[derive(Debug, Clone, Copy)]
pub struct Prioritized<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Prioritized<P, V> {
    pub fn new(priority: P, value: V) -> Self {
        Prioritized { priority, value }
    }

    pub fn into_parts(self) -> (P, V) {
        (self.priority, self.value)
    }
}

impl<P: Ord, V> PartialEq for Prioritized<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: Ord, V> Eq for Prioritized<P, V> {}

impl<P: Ord, V> PartialOrd for Prioritized<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, V> Ord for Prioritized<P, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}
