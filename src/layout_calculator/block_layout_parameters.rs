use super::constants::*;
use super::{BlockLayoutResult, FingerprintBudget, compute};
use crate::error::LayoutError;
use serde::Serialize;

/// Inputs describing one Morton filter block.
///
/// All widths are in bits. Negative values cannot be represented, so the only
/// invalid single-parameter inputs are zeros (see [`validate`](Self::validate)).
///
/// # Example
/// ```
/// use morton_layout::BlockLayoutParameters;
///
/// let params = BlockLayoutParameters::new(64, 2, 8, 16);
/// assert_eq!(params.block_size_bits, 512);
/// assert_eq!(params, BlockLayoutParameters::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BlockLayoutParameters {
    /// Total bits in one storage block.
    pub block_size_bits: u32,

    /// Buckets sharing the block.
    pub buckets_per_block: u32,

    /// Logical fingerprint slots per bucket.
    pub slots_per_bucket: u32,

    /// Bits per stored fingerprint.
    pub fingerprint_len_bits: u32,

    /// Bits the caller wants reserved for the overflow-tracking array.
    pub target_ota_len: u32,

    /// Whether the fingerprint capacity is kept fractional or floored.
    pub budget: FingerprintBudget,
}

impl Default for BlockLayoutParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_BUCKETS_PER_BLOCK,
            DEFAULT_SLOTS_PER_BUCKET,
            DEFAULT_FINGERPRINT_LEN_BITS,
            DEFAULT_TARGET_OTA_LEN,
        )
    }
}

impl BlockLayoutParameters {
    /// Creates parameters for a [`DEFAULT_BLOCK_SIZE_BITS`] block using the
    /// analytical fingerprint budget.
    pub fn new(
        buckets_per_block: u32,
        slots_per_bucket: u32,
        fingerprint_len_bits: u32,
        target_ota_len: u32,
    ) -> Self {
        Self {
            block_size_bits: DEFAULT_BLOCK_SIZE_BITS,
            buckets_per_block,
            slots_per_bucket,
            fingerprint_len_bits,
            target_ota_len,
            budget: FingerprintBudget::default(),
        }
    }

    pub fn with_block_size_bits(mut self, block_size_bits: u32) -> Self {
        self.block_size_bits = block_size_bits;
        self
    }

    pub fn with_budget(mut self, budget: FingerprintBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Rejects parameters that can never describe a block, regardless of how
    /// the others are chosen.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let checks = [
            ("block_size_bits", self.block_size_bits),
            ("buckets_per_block", self.buckets_per_block),
            ("slots_per_bucket", self.slots_per_bucket),
            ("fingerprint_len_bits", self.fingerprint_len_bits),
        ];

        match checks.iter().find(|(_, value)| *value == 0) {
            Some(&(parameter, _)) => Err(LayoutError::ZeroParameter { parameter }),
            None => Ok(()),
        }
    }

    /// Logical slot count of an uncompressed block with the same bucket shape.
    #[inline]
    pub fn logical_slots_per_block(&self) -> u64 {
        u64::from(self.buckets_per_block) * u64::from(self.slots_per_bucket)
    }

    /// Shorthand for [`compute`].
    pub fn compute(&self) -> Result<BlockLayoutResult, LayoutError> {
        compute(self)
    }
}
