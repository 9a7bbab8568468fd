//! Forward and inverse block transform.
//!
//! The forward direction permutes a block into the last column of its
//! sorted rotation matrix plus the index of the origin row. The inverse
//! rebuilds the block in linear time from key-indexed counting alone; it
//! never re-sorts.

use crate::ALPHABET_SIZE;
use crate::error::{BlockSortError, Result};
use crate::suffix::{CircularSuffixArray, wrap};

/// Transform a block into `(origin index, last column)`.
///
/// The origin index is the rank, among the sorted rotations, of the
/// rotation starting at offset 0. Position i of the output holds the byte
/// circularly preceding the i-th ranked rotation.
///
/// # Errors
///
/// Returns [`BlockSortError::EmptyBlock`] for an empty block and
/// [`BlockSortError::BlockTooLarge`] when the block length exceeds
/// [`MAX_BLOCK_SIZE`](crate::MAX_BLOCK_SIZE).
pub fn forward(block: &[u8]) -> Result<(u32, Vec<u8>)> {
    let rotations = CircularSuffixArray::new(block)?;
    let n = block.len();

    let mut origin = 0u32;
    let mut transformed = Vec::with_capacity(n);
    for i in 0..n {
        let start = rotations.index(i);
        if start == 0 {
            origin = i as u32;
        }
        transformed.push(block[wrap(start + n - 1, n)]);
    }

    Ok((origin, transformed))
}

/// Rebuild the original block from `(origin, last column)`.
///
/// Key-indexed counting recovers, for each row of the sorted matrix, the
/// row holding its successor: counting the byte frequencies of the last
/// column, cumulating them into per-value starting rows, and assigning
/// each occurrence left to right reproduces the first column while
/// preserving the relative order of equal bytes. Following that `next`
/// chain for n steps from the origin row replays the block in order,
/// in O(n + alphabet) time.
///
/// # Errors
///
/// Returns [`BlockSortError::EmptyBlock`] for an empty sequence and
/// [`BlockSortError::OriginOutOfRange`] when `origin` does not address a
/// row.
pub fn inverse(origin: u32, transformed: &[u8]) -> Result<Vec<u8>> {
    if transformed.is_empty() {
        return Err(BlockSortError::EmptyBlock);
    }
    let n = transformed.len();
    if origin as usize >= n {
        return Err(BlockSortError::OriginOutOfRange { origin, len: n });
    }

    let mut counts = [0usize; ALPHABET_SIZE];
    for &byte in transformed {
        counts[byte as usize] += 1;
    }

    // Cumulate frequencies into the starting row of each byte value in
    // the first column.
    let mut starts = [0usize; ALPHABET_SIZE];
    let mut total = 0;
    for (value, &count) in counts.iter().enumerate() {
        starts[value] = total;
        total += count;
    }

    // Stable assignment: equal bytes keep their relative order, which is
    // what makes the matrix rows consistent rotations of one another.
    let mut next = vec![0usize; n];
    for (i, &byte) in transformed.iter().enumerate() {
        next[starts[byte as usize]] = i;
        starts[byte as usize] += 1;
    }

    let mut block = Vec::with_capacity(n);
    let mut row = origin as usize;
    for _ in 0..n {
        row = next[row];
        block.push(transformed[row]);
    }

    Ok(block)
}
