use super::BlockLayoutParameters;
use crate::error::LayoutError;
use serde::Serialize;

/// Derived layout of a single Morton filter block.
///
/// Produced by [`compute`](super::compute); never mutated afterwards.
///
/// For every successful result the block is fully accounted for:
///
/// ```text
/// fullness_counter_array_len
///   + max_fingerprints_per_block * fingerprint_len_bits
///   + available_bits_for_ota == block_size_bits
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockLayoutResult {
    /// The inputs this layout was derived from.
    pub parameters: BlockLayoutParameters,

    /// Bits per fullness counter (enough to count `0..=slots_per_bucket`).
    pub fullness_counter_width: u32,

    /// Bits used by the fullness counters of every bucket in the block.
    pub fullness_counter_array_len: u64,

    /// Bits left for fingerprints once the counters and the requested OTA
    /// are reserved.
    pub available_bits: u64,

    /// Fingerprints that fit into `available_bits`. Fractional under
    /// [`FingerprintBudget::Analytical`](super::FingerprintBudget::Analytical).
    pub max_fingerprints_per_block: f64,

    /// Bits actually left for the OTA once the block is padded out. At least
    /// `target_ota_len`, up to floating-point rounding of the analytical budget.
    pub available_bits_for_ota: f64,

    /// `max_fingerprints_per_block / (buckets_per_block * slots_per_bucket)`,
    /// i.e. the `C` parameter of a Morton filter.
    pub slot_compression_ratio: f64,

    /// Requested OTA length, echoed from the parameters.
    pub target_ota_len: u32,
}

impl BlockLayoutResult {
    /// `true` when the block stores more fingerprints than an uncompressed
    /// block with the same bucket shape has slots (`C > 1`).
    #[inline]
    pub fn exceeds_uncompressed_capacity(&self) -> bool {
        self.slot_compression_ratio > 1.0
    }

    /// Number of blocks a filter with `total_slots` logical slots needs.
    ///
    /// Exact for the whole `u64` range.
    ///
    /// # Example
    /// ```
    /// use morton_layout::BlockLayoutParameters;
    ///
    /// let layout = BlockLayoutParameters::default().compute().unwrap();
    /// // 128 logical slots per block
    /// assert_eq!(layout.blocks_required(1_000), 8);
    /// ```
    #[inline]
    pub fn blocks_required(&self, total_slots: u64) -> u64 {
        total_slots.div_ceil(self.parameters.logical_slots_per_block())
    }

    /// Total storage, in bits, of the blocks backing `total_slots` logical slots.
    pub fn storage_bits(&self, total_slots: u64) -> Result<u64, LayoutError> {
        let blocks = self.blocks_required(total_slots);
        let block_size_bits = u64::from(self.parameters.block_size_bits);

        blocks
            .checked_mul(block_size_bits)
            .ok_or(LayoutError::OutOfRange {
                value: blocks as f64 * block_size_bits as f64,
            })
    }

    /// Key/value pairs in a fixed order, formatted for display.
    ///
    /// Fractional quantities always carry a decimal point (`46.0`) so that
    /// they are distinguishable from the integer-valued fields.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "fullness_counter_width",
                self.fullness_counter_width.to_string(),
            ),
            (
                "fullness_counter_array_len",
                self.fullness_counter_array_len.to_string(),
            ),
            ("available_bits", self.available_bits.to_string()),
            (
                "max_fingerprints_per_block",
                format!("{:?}", self.max_fingerprints_per_block),
            ),
            (
                "available_bits_for_ota",
                format!("{:?}", self.available_bits_for_ota),
            ),
            (
                "slot_compression_ratio",
                format!("{:?}", self.slot_compression_ratio),
            ),
            ("target_ota_len", self.target_ota_len.to_string()),
        ]
    }
}
