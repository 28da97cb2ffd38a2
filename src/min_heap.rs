//! Binary min-heap priority queue.
//!
//! The heap is a complete binary tree stored breadth-first in a `Vec`,
//! 0-indexed:
//!
//!   parent(i)      = (i - 1) / 2
//!   left_child(i)  = 2*i + 1
//!   right_child(i) = 2*i + 2
//!
//! Invariant: `data[parent(i)] <= data[i]` for every `i > 0`.

use std::iter::FusedIterator;

use log::trace;

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

pub type PriorityQueue<T> = MinHeap<T>;

fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

fn left_child(idx: usize) -> usize {
    2 * idx + 1
}

fn right_child(idx: usize) -> usize {
    2 * idx + 2
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from an arbitrary vector in O(n).
    pub fn from_vec(vec: Vec<T>) -> Self {
        let mut heap = MinHeap { data: vec };
        heap.heapify();
        heap
    }

    /// Adds `item` as the rightmost leaf and sifts it up. Returns the queue so
    /// calls can be chained.
    pub fn insert(&mut self, item: T) -> &mut Self {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        self
    }

    /// Removes and returns the smallest element, or `None` if the queue is
    /// empty. An empty queue is left untouched.
    pub fn extract_min(&mut self) -> Option<T> {
        let last = match self.data.len() {
            0 => {
                trace!("extract_min on empty queue");
                return None;
            }
            len => len - 1,
        };
        if last > 0 {
            self.data.swap(0, last);
        }
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            trace!("clearing {} queued elements", self.data.len());
        }
        self.data.clear();
    }

    /// The backing storage in breadth-first order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Extracts minima until the queue is empty. Dropping the iterator early
    /// keeps the remaining elements queued.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }

    fn heapify(&mut self) {
        if self.data.len() <= 1 {
            return;
        }
        trace!("heapifying {} elements", self.data.len());
        let last_parent = parent(self.data.len() - 1);
        for idx in (0..=last_parent).rev() {
            self.sift_down(idx);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let up = parent(idx);
            if self.data[idx] < self.data[up] {
                self.data.swap(idx, up);
                idx = up;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = left_child(idx);
            if left >= len {
                break;
            }
            let right = right_child(idx);
            // A lone left child is the lesser child by default.
            let lesser = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[idx] > self.data[lesser] {
                self.data.swap(idx, lesser);
                idx = lesser;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        MinHeap::from_vec(vec)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let vec: Vec<T> = iter.into_iter().collect();
        MinHeap::from_vec(vec)
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoSorted<T>;

    fn into_iter(self) -> IntoSorted<T> {
        IntoSorted { heap: self }
    }
}

/// Owning iterator yielding elements in non-decreasing order.
#[derive(Debug, Clone)]
pub struct IntoSorted<T> {
    heap: MinHeap<T>,
}

impl<T: Ord> Iterator for IntoSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for IntoSorted<T> {}

impl<T: Ord> FusedIterator for IntoSorted<T> {}

#[derive(Debug)]
pub struct DrainSorted<'a, T> {
    heap: &'a mut MinHeap<T>,
}

impl<T: Ord> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T: Ord> FusedIterator for DrainSorted<'_, T> {}
