use crate::layout_calculator::{
    BlockLayoutParameters, DEFAULT_BLOCK_SIZE_BITS, DEFAULT_BUCKETS_PER_BLOCK,
    DEFAULT_FINGERPRINT_LEN_BITS, DEFAULT_SLOTS_PER_BUCKET, DEFAULT_TARGET_OTA_LEN,
    FingerprintBudget, SweepParameters,
};
use clap::{Args, Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the layout of a single block
    Calc {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Logical slot count of the whole filter; also reports the blocks and storage it needs
        #[arg(long = "total-slots", value_name = "SLOTS")]
        total_slots: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Derive layouts for every combination of bucket counts and bucket sizes
    Sweep {
        /// Candidate bucket counts (comma-separated)
        #[arg(
            long = "buckets-per-block",
            value_name = "N,..",
            value_delimiter = ',',
            default_values_t = [16, 32, 64]
        )]
        buckets_per_block: Vec<u32>,

        /// Candidate slots per bucket (comma-separated)
        #[arg(
            long = "slots-per-bucket",
            value_name = "N,..",
            value_delimiter = ',',
            default_values_t = [1, 2, 3, 4]
        )]
        slots_per_bucket: Vec<u32>,

        #[command(flatten)]
        fixed: FixedArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Parameters describing one block.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LayoutArgs {
    /// Buckets sharing one block
    #[arg(long = "buckets-per-block", value_name = "N", default_value_t = DEFAULT_BUCKETS_PER_BLOCK)]
    pub buckets_per_block: u32,

    /// Fingerprint slots per bucket
    #[arg(long = "slots-per-bucket", value_name = "N", default_value_t = DEFAULT_SLOTS_PER_BUCKET)]
    pub slots_per_bucket: u32,

    #[command(flatten)]
    pub fixed: FixedArgs,
}

/// Parameters shared by `calc` and `sweep`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FixedArgs {
    /// Bits per fingerprint
    #[arg(long = "fingerprint-len-bits", value_name = "BITS", default_value_t = DEFAULT_FINGERPRINT_LEN_BITS)]
    pub fingerprint_len_bits: u32,

    /// Bits to reserve for the overflow-tracking array
    #[arg(long = "target-ota-len", value_name = "BITS", default_value_t = DEFAULT_TARGET_OTA_LEN)]
    pub target_ota_len: u32,

    /// Bits per block (512 = one cache line)
    #[arg(long = "block-size-bits", value_name = "BITS", default_value_t = DEFAULT_BLOCK_SIZE_BITS)]
    pub block_size_bits: u32,

    /// Keep the fingerprint capacity fractional (analytical) or floor it to whole slots (packed)
    #[arg(long, value_enum, default_value_t = FingerprintBudget::Analytical)]
    pub budget: FingerprintBudget,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `key: value` pair per line
    Text,
    Json,
}

impl Default for LayoutArgs {
    fn default() -> Self {
        let params = BlockLayoutParameters::default();

        Self {
            buckets_per_block: params.buckets_per_block,
            slots_per_bucket: params.slots_per_bucket,
            fixed: FixedArgs {
                fingerprint_len_bits: params.fingerprint_len_bits,
                target_ota_len: params.target_ota_len,
                block_size_bits: params.block_size_bits,
                budget: params.budget,
            },
        }
    }
}

impl From<&LayoutArgs> for BlockLayoutParameters {
    fn from(args: &LayoutArgs) -> Self {
        BlockLayoutParameters::new(
            args.buckets_per_block,
            args.slots_per_bucket,
            args.fixed.fingerprint_len_bits,
            args.fixed.target_ota_len,
        )
        .with_block_size_bits(args.fixed.block_size_bits)
        .with_budget(args.fixed.budget)
    }
}

impl FixedArgs {
    pub fn sweep_parameters(
        &self,
        buckets_per_block: &[u32],
        slots_per_bucket: &[u32],
    ) -> SweepParameters {
        SweepParameters {
            buckets_per_block: buckets_per_block.to_vec(),
            slots_per_bucket: slots_per_bucket.to_vec(),
            fingerprint_len_bits: self.fingerprint_len_bits,
            target_ota_len: self.target_ota_len,
            block_size_bits: self.block_size_bits,
            budget: self.budget,
        }
    }
}
