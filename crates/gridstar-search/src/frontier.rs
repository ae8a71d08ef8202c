//! The A* open set.
//!
//! Entries live in a min-heap keyed by `(score, insertion_order)`. Lower
//! scores are popped first; ties are broken by insertion order (FIFO), so
//! cells never need to be compared with each other. A membership set
//! mirrors the heap so a cell is queued at most once at a time.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use gridstar_core::Pos;

#[derive(Debug)]
struct Entry {
    pos: Pos,
    score: usize,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority queue of cells ordered by ascending score, then by ascending
/// insertion order.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    members: HashSet<Pos>,
    seq: u64,
    peak: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with the given score unless it is already queued.
    ///
    /// Returns `false`, leaving the existing entry and its score untouched,
    /// if `pos` is a member. The insertion counter only advances on an
    /// actual insertion, the first of which gets counter 0.
    pub fn push(&mut self, pos: Pos, score: usize) -> bool {
        if !self.members.insert(pos) {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { pos, score, seq }));
        self.peak = self.peak.max(self.heap.len());
        true
    }

    /// Pop the cell with the lowest `(score, insertion_order)`, together
    /// with the score it was queued at.
    pub fn pop(&mut self) -> Option<(Pos, usize)> {
        let Reverse(entry) = self.heap.pop()?;
        self.members.remove(&entry.pos);
        Some((entry.pos, entry.score))
    }

    /// Whether `pos` is currently queued.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.members.contains(&pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of entries queued at once.
    #[inline]
    pub fn peak_len(&self) -> usize {
        self.peak
    }

    /// Number of insertions so far.
    #[inline]
    pub fn inserted(&self) -> u64 {
        self.seq
    }
}
