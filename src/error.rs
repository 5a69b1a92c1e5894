use thiserror::Error;

/// Broad classification of a [`LayoutError`].
///
/// - `Domain`: a math primitive was called outside of its domain.
/// - `InvalidInput`: a parameter is unusable on its own (zero, non-finite, out of range).
/// - `Configuration`: every parameter is individually valid, but together they
///   do not fit into a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Domain,
    InvalidInput,
    Configuration,
}

/// Errors produced while deriving a block layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("log2_ceil is undefined for non-positive input {value}")]
    Domain { value: i64 },

    #[error("expected a finite number, got {value}")]
    NonFiniteInput { value: f64 },

    #[error("{value} does not fit into a 64-bit signed integer")]
    OutOfRange { value: f64 },

    #[error("`{parameter}` must be greater than zero")]
    ZeroParameter { parameter: &'static str },

    #[error(
        "block over-committed: {reserved_bits} bits requested for the OTA and fullness counters, \
         but the block only holds {block_size_bits} bits"
    )]
    OverCommitted {
        block_size_bits: u32,
        reserved_bits: u64,
    },

    #[error(
        "no room for fingerprints: {available_bits} bits remain, but one fingerprint needs \
         {fingerprint_len_bits} bits"
    )]
    NoFingerprintCapacity {
        available_bits: i64,
        fingerprint_len_bits: u32,
    },
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::Domain { .. } => ErrorKind::Domain,
            LayoutError::NonFiniteInput { .. }
            | LayoutError::OutOfRange { .. }
            | LayoutError::ZeroParameter { .. } => ErrorKind::InvalidInput,
            LayoutError::OverCommitted { .. } | LayoutError::NoFingerprintCapacity { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}
