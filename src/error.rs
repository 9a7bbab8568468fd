//! Error types for the block-sorting pipeline.

use thiserror::Error;

/// Errors for block transform and recoding operations.
///
/// Every failure is a caller contract violation detected up front; no
/// operation produces partial output. There is no transient failure mode
/// and therefore nothing to retry.
#[derive(Debug, Error)]
pub enum BlockSortError {
    /// The input block (or transformed sequence) was empty.
    #[error("empty input block")]
    EmptyBlock,

    /// The block does not fit the 4-byte origin-index wire field.
    #[error("block of {len} bytes does not fit a 4-byte origin index")]
    BlockTooLarge {
        /// Length of the rejected block.
        len: usize,
    },

    /// The origin index does not address a row of the sorted matrix.
    #[error("origin index {origin} out of range for a block of {len} bytes")]
    OriginOutOfRange {
        /// The rejected origin index.
        origin: u32,
        /// Length of the transformed sequence.
        len: usize,
    },

    /// The artifact is too short to hold its header and any data.
    #[error("artifact of {len} bytes is shorter than header plus one data byte")]
    TruncatedArtifact {
        /// Length of the rejected artifact.
        len: usize,
    },
}

/// Result type for block-sorting operations.
pub type Result<T> = std::result::Result<T, BlockSortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlockSortError::OriginOutOfRange { origin: 9, len: 4 };
        assert!(err.to_string().contains("origin index 9"));
        assert!(err.to_string().contains("4 bytes"));

        let err = BlockSortError::TruncatedArtifact { len: 2 };
        assert!(err.to_string().contains("2 bytes"));
    }
}
