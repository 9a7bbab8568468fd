//! Circular suffix ordering for the block transform.
//!
//! Sorting the n cyclic rotations of a block is the expensive half of the
//! forward transform. The rotations are never materialized: the sort
//! permutes an index array and probes characters through ring arithmetic,
//! so the workspace beyond the permutation itself stays O(n).
//!
//! The algorithm is a three-way partitioning quicksort keyed on the d-th
//! circular character of each rotation, with the divide-and-conquer
//! expressed as an explicit work list of index ranges. That keeps the
//! memory footprint bounded regardless of input shape: a block of one
//! repeated byte degenerates to O(n^2) character probes, which is the
//! documented worst case, but it cannot grow the call stack.

use crate::error::{BlockSortError, Result};
use std::cmp::Ordering;

/// Partitions at or below this size are finished with insertion sort.
const INSERTION_CUTOFF: usize = 6;

/// Wrap a probe position into the ring of length `n`.
///
/// All circular addressing in the crate goes through this helper so the
/// sorter and both transform directions agree on wraparound.
#[inline]
pub(crate) fn wrap(pos: usize, n: usize) -> usize {
    pos % n
}

/// The n cyclic rotations of a block, in sorted order.
///
/// `index(i)` is the starting offset of the i-th smallest rotation under
/// circular lexicographic comparison. Equal rotations (possible when the
/// block is a whole number of repetitions of a shorter pattern) may appear
/// in any relative order; the inverse transform does not depend on how
/// such ties resolve.
#[derive(Debug, Clone)]
pub struct CircularSuffixArray {
    index: Vec<u32>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `block`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockSortError::EmptyBlock`] for an empty block and
    /// [`BlockSortError::BlockTooLarge`] when the block length exceeds
    /// [`MAX_BLOCK_SIZE`](crate::MAX_BLOCK_SIZE).
    pub fn new(block: &[u8]) -> Result<Self> {
        if block.is_empty() {
            return Err(BlockSortError::EmptyBlock);
        }
        if block.len() > crate::MAX_BLOCK_SIZE {
            return Err(BlockSortError::BlockTooLarge { len: block.len() });
        }

        let mut index: Vec<u32> = (0..block.len() as u32).collect();
        sort_rotations(block, &mut index);
        Ok(Self { index })
    }

    /// Number of rotations (the block length).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the array holds no rotations. Construction rejects empty
    /// blocks, so this is false for every constructed array.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Starting offset of the i-th smallest rotation.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn index(&self, i: usize) -> usize {
        self.index[i] as usize
    }

    /// The full permutation, smallest rotation first.
    pub fn as_slice(&self) -> &[u32] {
        &self.index
    }
}

/// Three-way quicksort of the rotation indices, keyed on the character at
/// the current probe depth.
///
/// Ranges are half-open `[lo, hi)` and carry the depth `d` at which every
/// rotation inside them still agrees. The equal partition re-enters the
/// work list at depth d + 1 until it would probe beyond two full cycles;
/// by then its rotations have compared equal over the whole ring, so any
/// order is correct and the range is dropped.
fn sort_rotations(block: &[u8], ind: &mut [u32]) {
    let n = block.len();
    if n < 2 {
        return;
    }

    let mut work: Vec<(usize, usize, usize)> = vec![(0, n, 0)];

    while let Some((lo, hi, d)) = work.pop() {
        if hi - lo <= INSERTION_CUTOFF {
            insertion(block, ind, lo, hi, d);
            continue;
        }

        // Partition on the d-th circular character: [lo, lt) below the
        // pivot, [lt, gt) equal, [gt, hi) above.
        let pivot = block[wrap(ind[lo] as usize + d, n)];
        let mut lt = lo;
        let mut gt = hi;
        let mut i = lo + 1;
        while i < gt {
            let c = block[wrap(ind[i] as usize + d, n)];
            match c.cmp(&pivot) {
                Ordering::Less => {
                    ind.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    ind.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        if lt - lo > 1 {
            work.push((lo, lt, d));
        }
        if gt - lt > 1 && d + 1 < 2 * n {
            work.push((lt, gt, d + 1));
        }
        if hi - gt > 1 {
            work.push((gt, hi, d));
        }
    }
}

/// Insertion sort of `ind[lo..hi]`, comparing full rotations lazily from
/// probe depth `d`.
fn insertion(block: &[u8], ind: &mut [u32], lo: usize, hi: usize, d: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && less(block, ind[j] as usize, ind[j - 1] as usize, d) {
            ind.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Is the rotation starting at `v` smaller than the one starting at `w`?
///
/// Both rotations are known to agree on their first `d` characters, so
/// probing continues from depth `d`; after n total probes without a
/// mismatch the rotations are equal and neither is smaller.
fn less(block: &[u8], v: usize, w: usize, d: usize) -> bool {
    let n = block.len();
    for k in d..n {
        let a = block[wrap(v + k, n)];
        let b = block[wrap(w + k, n)];
        if a != b {
            return a < b;
        }
    }
    false
}
