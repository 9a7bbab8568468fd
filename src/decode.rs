//! Inverse pipeline: wire artifact in, original block out.

use crate::encode::HEADER_LEN;
use crate::error::{BlockSortError, Result};
use crate::{bwt, mtf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Undo [`encode_block`](crate::encode_block).
///
/// # Errors
///
/// Returns [`BlockSortError::TruncatedArtifact`] when the artifact cannot
/// hold its 4-byte header plus at least one rank code, and propagates
/// [`inverse`](bwt::inverse)'s error for an out-of-range origin index.
pub fn decode_block(artifact: &[u8]) -> Result<Vec<u8>> {
    if artifact.len() <= HEADER_LEN {
        return Err(BlockSortError::TruncatedArtifact {
            len: artifact.len(),
        });
    }

    let (header, ranks) = artifact.split_at(HEADER_LEN);
    let origin = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);

    let transformed = mtf::decode(ranks);
    bwt::inverse(origin, &transformed)
}

/// Decode independent artifacts in parallel (requires the `parallel`
/// feature).
#[cfg(feature = "parallel")]
pub fn decode_blocks_parallel(artifacts: &[&[u8]]) -> Result<Vec<Vec<u8>>> {
    artifacts
        .par_iter()
        .map(|artifact| decode_block(artifact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_block;

    #[test]
    fn test_decode_block_abracadabra() {
        let artifact = encode_block(b"ABRACADABRA!").unwrap();
        assert_eq!(decode_block(&artifact).unwrap(), b"ABRACADABRA!");
    }

    #[test]
    fn test_decode_rejects_bad_origin() {
        // Origin 12 with a 12-byte body: one past the last row.
        let mut artifact = encode_block(b"ABRACADABRA!").unwrap();
        artifact[..4].copy_from_slice(&12u32.to_be_bytes());
        assert!(matches!(
            decode_block(&artifact),
            Err(BlockSortError::OriginOutOfRange { origin: 12, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_truncated() {
        assert!(matches!(
            decode_block(&[0, 0, 0, 0]),
            Err(BlockSortError::TruncatedArtifact { len: 4 })
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_decode_blocks_parallel_matches_serial() {
        let a = encode_block(b"ABRACADABRA!").unwrap();
        let b = encode_block(b"mississippi").unwrap();
        let artifacts: [&[u8]; 2] = [&a, &b];
        let decoded = decode_blocks_parallel(&artifacts).unwrap();
        assert_eq!(decoded[0], b"ABRACADABRA!");
        assert_eq!(decoded[1], b"mississippi");
    }
}
