use super::{BlockLayoutParameters, BlockLayoutResult};
use crate::error::LayoutError;
use crate::utils::log2_ceil;
use tracing::{debug, warn};

/// Derives the block layout for `params`.
///
/// 1. Each bucket gets a fullness counter wide enough for
///    `slots_per_bucket + 1` states.
/// 2. The counters and the requested OTA are reserved from the block.
/// 3. The rest holds fingerprints, counted per `params.budget`.
/// 4. Whatever the fingerprints leave unused is handed to the OTA.
///
/// # Errors
/// - [`LayoutError::ZeroParameter`] for a zero block size, bucket count,
///   slot count or fingerprint length.
/// - [`LayoutError::OverCommitted`] if the counters and the OTA alone
///   exceed the block.
/// - [`LayoutError::NoFingerprintCapacity`] if not even one fingerprint fits.
///
/// # Example
/// ```
/// use morton_layout::{BlockLayoutParameters, compute};
///
/// let layout = compute(&BlockLayoutParameters::new(64, 2, 8, 16)).unwrap();
/// assert_eq!(layout.fullness_counter_width, 2);
/// assert_eq!(layout.max_fingerprints_per_block, 46.0);
/// assert_eq!(layout.slot_compression_ratio, 0.359375);
/// ```
pub fn compute(params: &BlockLayoutParameters) -> Result<BlockLayoutResult, LayoutError> {
    params.validate()?;

    let fullness_counter_width = log2_ceil(i64::from(params.slots_per_bucket) + 1)?;
    let fullness_counter_array_len =
        u64::from(fullness_counter_width) * u64::from(params.buckets_per_block);

    // Every term is bounded by u32::MAX * 33, so this cannot overflow
    let available_bits = i64::from(params.block_size_bits)
        - i64::from(params.target_ota_len)
        - fullness_counter_array_len as i64;

    if available_bits < 0 {
        return Err(LayoutError::OverCommitted {
            block_size_bits: params.block_size_bits,
            reserved_bits: u64::from(params.target_ota_len) + fullness_counter_array_len,
        });
    }

    if available_bits < i64::from(params.fingerprint_len_bits) {
        return Err(LayoutError::NoFingerprintCapacity {
            available_bits,
            fingerprint_len_bits: params.fingerprint_len_bits,
        });
    }

    let available_bits = available_bits as u64;
    let max_fingerprints_per_block = params
        .budget
        .fingerprints_for(available_bits, params.fingerprint_len_bits);

    let available_bits_for_ota = f64::from(params.block_size_bits)
        - fullness_counter_array_len as f64
        - max_fingerprints_per_block * f64::from(params.fingerprint_len_bits);

    let slot_compression_ratio =
        max_fingerprints_per_block / params.logical_slots_per_block() as f64;

    debug!(
        ?params,
        fullness_counter_width,
        fullness_counter_array_len,
        available_bits,
        max_fingerprints_per_block,
        available_bits_for_ota,
        slot_compression_ratio,
        "Derived block layout"
    );

    if slot_compression_ratio > 1.0 {
        warn!(
            "Slot compression ratio {} exceeds 1: the block holds more fingerprints than its {} logical slots",
            slot_compression_ratio,
            params.logical_slots_per_block()
        );
    }

    Ok(BlockLayoutResult {
        parameters: *params,
        fullness_counter_width,
        fullness_counter_array_len,
        available_bits,
        max_fingerprints_per_block,
        available_bits_for_ota,
        slot_compression_ratio,
        target_ota_len: params.target_ota_len,
    })
}

/// Five-argument form of [`compute`] using the analytical budget.
/// `block_size_bits` defaults to
/// [`DEFAULT_BLOCK_SIZE_BITS`](super::DEFAULT_BLOCK_SIZE_BITS) when `None`.
pub fn compute_layout(
    buckets_per_block: u32,
    slots_per_bucket: u32,
    fingerprint_len_bits: u32,
    target_ota_len: u32,
    block_size_bits: Option<u32>,
) -> Result<BlockLayoutResult, LayoutError> {
    let mut params = BlockLayoutParameters::new(
        buckets_per_block,
        slots_per_bucket,
        fingerprint_len_bits,
        target_ota_len,
    );

    if let Some(block_size_bits) = block_size_bits {
        params = params.with_block_size_bits(block_size_bits);
    }

    compute(&params)
}
