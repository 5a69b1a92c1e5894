use clap::ValueEnum;
use serde::Serialize;

/// How the per-block fingerprint capacity is derived from the bits left over
/// after the fullness counters and the requested OTA are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintBudget {
    /// Real-valued division. The capacity may be fractional; it is an upper
    /// bound for analysis rather than an allocatable slot count. `46.0` for
    /// the example block.
    #[default]
    Analytical,

    /// Floors the capacity to a whole number of fingerprint slots (integer
    /// division). Bits lost to the rounding are handed to the OTA.
    Packed,
}

impl FingerprintBudget {
    /// Number of fingerprints that fit into `available_bits`.
    #[inline]
    pub fn fingerprints_for(self, available_bits: u64, fingerprint_len_bits: u32) -> f64 {
        match self {
            FingerprintBudget::Analytical => available_bits as f64 / fingerprint_len_bits as f64,
            FingerprintBudget::Packed => (available_bits / u64::from(fingerprint_len_bits)) as f64,
        }
    }
}
