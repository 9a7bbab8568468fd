//! # blocksort
//!
//! Block-sorting transform front end for a bzip-class compressor.
//!
//! The crate implements the reversible preprocessing pipeline that turns a
//! raw block of bytes into entropy-coder-ready rank codes:
//!
//! 1. **Circular suffix sorting** - order the n cyclic rotations of the
//!    block without materializing them ([`suffix`]).
//! 2. **Block transform** - emit the last column of the sorted rotation
//!    matrix together with the origin row index; invertible in linear time
//!    without re-sorting ([`bwt`]).
//! 3. **Move-to-front recoding** - replace each byte with its recency rank
//!    so the clustered transform output collapses toward zero ([`mtf`]).
//!
//! Entropy coding, stream framing, and file I/O are upstream and
//! downstream collaborators, not part of this crate. The crate consumes
//! and produces in-memory byte buffers only, one finite block at a time.
//!
//! ## Example
//!
//! ```rust
//! use blocksort::{decode_block, encode_block};
//!
//! let block = b"ABRACADABRA!";
//! let artifact = encode_block(block)?;
//! let restored = decode_block(&artifact)?;
//! assert_eq!(restored, block.as_slice());
//! # Ok::<(), blocksort::BlockSortError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bwt;
mod decode;
mod encode;
mod error;
pub mod mtf;
pub mod suffix;

pub use decode::decode_block;
pub use encode::encode_block;
pub use error::{BlockSortError, Result};
pub use suffix::CircularSuffixArray;

#[cfg(feature = "parallel")]
pub use decode::decode_blocks_parallel;
#[cfg(feature = "parallel")]
pub use encode::encode_blocks_parallel;

/// Number of distinct byte values in the transform alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Largest block the 4-byte origin-index wire field can address.
pub const MAX_BLOCK_SIZE: usize = u32::MAX as usize;
