//! Forward pipeline: raw block in, entropy-coder-ready artifact out.

use crate::error::Result;
use crate::{bwt, mtf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Bytes of origin-index header preceding the rank codes.
pub(crate) const HEADER_LEN: usize = 4;

/// Run the forward pipeline on one block.
///
/// The block is transformed (sorted-rotation last column), the transform
/// output is rank-recoded, and the result is framed as the wire artifact:
/// a 4-byte big-endian origin index followed by one rank code per input
/// byte. The artifact is what a downstream entropy coder consumes.
///
/// # Errors
///
/// Propagates [`forward`](bwt::forward)'s errors for empty or oversized
/// blocks.
pub fn encode_block(block: &[u8]) -> Result<Vec<u8>> {
    let (origin, transformed) = bwt::forward(block)?;
    let ranks = mtf::encode(&transformed);

    let mut artifact = Vec::with_capacity(HEADER_LEN + ranks.len());
    artifact.extend_from_slice(&origin.to_be_bytes());
    artifact.extend_from_slice(&ranks);
    Ok(artifact)
}

/// Encode independent blocks in parallel (requires the `parallel`
/// feature).
///
/// Each block runs the whole pipeline on its own; no state is shared
/// between invocations. The first failing block fails the batch with no
/// partial output.
#[cfg(feature = "parallel")]
pub fn encode_blocks_parallel(blocks: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
    blocks.par_iter().map(|block| encode_block(block)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_block_abracadabra() {
        let artifact = encode_block(b"ABRACADABRA!").unwrap();
        assert_eq!(&artifact[..HEADER_LEN], &3u32.to_be_bytes());
        // Rank codes of "ARD!RCAAAABB" against a fresh alphabet.
        assert_eq!(artifact[HEADER_LEN..].len(), 12);
        assert_eq!(artifact[HEADER_LEN..], mtf::encode(b"ARD!RCAAAABB"));
    }

    #[test]
    fn test_encode_block_single_byte() {
        let artifact = encode_block(b"A").unwrap();
        assert_eq!(&artifact, &[0, 0, 0, 0, 65]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_encode_blocks_parallel_matches_serial() {
        let blocks: [&[u8]; 3] = [b"ABRACADABRA!", b"banana", b"A"];
        let parallel = encode_blocks_parallel(&blocks).unwrap();
        for (block, artifact) in blocks.iter().zip(&parallel) {
            assert_eq!(artifact, &encode_block(block).unwrap());
        }
    }
}
