use super::constants::*;
use super::{BlockLayoutParameters, BlockLayoutResult, FingerprintBudget, compute};
use crate::error::LayoutError;
use tracing::{debug, info};

/// A grid of candidate bucket shapes evaluated against fixed fingerprint,
/// OTA and block sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepParameters {
    pub buckets_per_block: Vec<u32>,
    pub slots_per_bucket: Vec<u32>,
    pub fingerprint_len_bits: u32,
    pub target_ota_len: u32,
    pub block_size_bits: u32,
    pub budget: FingerprintBudget,
}

impl Default for SweepParameters {
    fn default() -> Self {
        Self {
            buckets_per_block: vec![16, 32, 64],
            slots_per_bucket: vec![1, 2, 3, 4],
            fingerprint_len_bits: DEFAULT_FINGERPRINT_LEN_BITS,
            target_ota_len: DEFAULT_TARGET_OTA_LEN,
            block_size_bits: DEFAULT_BLOCK_SIZE_BITS,
            budget: FingerprintBudget::default(),
        }
    }
}

/// Outcome of one grid point. A failing combination is recorded, not fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub parameters: BlockLayoutParameters,
    pub outcome: Result<BlockLayoutResult, LayoutError>,
}

/// Evaluates every `(buckets_per_block, slots_per_bucket)` pair in input
/// order, bucket counts outermost.
pub fn sweep(sweep_params: &SweepParameters) -> Vec<SweepRow> {
    let rows: Vec<SweepRow> = sweep_params
        .buckets_per_block
        .iter()
        .flat_map(|&buckets_per_block| {
            sweep_params
                .slots_per_bucket
                .iter()
                .map(move |&slots_per_bucket| {
                    BlockLayoutParameters::new(
                        buckets_per_block,
                        slots_per_bucket,
                        sweep_params.fingerprint_len_bits,
                        sweep_params.target_ota_len,
                    )
                    .with_block_size_bits(sweep_params.block_size_bits)
                    .with_budget(sweep_params.budget)
                })
        })
        .map(|parameters| {
            let outcome = compute(&parameters);

            if let Err(err) = &outcome {
                debug!(?parameters, "Skipping layout: {}", err);
            }

            SweepRow {
                parameters,
                outcome,
            }
        })
        .collect();

    info!(
        "Sweep evaluated {} combinations ({} valid)",
        rows.len(),
        rows.iter().filter(|row| row.outcome.is_ok()).count()
    );

    rows
}
