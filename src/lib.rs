mod error;
mod min_heap;
mod priority;

pub use error::HeapError;
pub use min_heap::{DrainSorted, IntoSorted, MinHeap, PriorityQueue};
pub use priority::{Prioritized, Priority};
