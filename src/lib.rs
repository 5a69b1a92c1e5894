//! Block-layout parameter calculator for Morton filters.
//!
//! A Morton filter packs several cuckoo-filter buckets into one fixed-size
//! block (typically a 512-bit cache line). Each block holds:
//!
//! - a fullness counter per bucket,
//! - a compressed fingerprint store, and
//! - an overflow-tracking array (OTA).
//!
//! Given the bucket shape, the fingerprint width and how many bits should be
//! reserved for the OTA, [`compute`] derives how many fingerprints fit into
//! the block and the resulting slot compression ratio `C`.
//!
//! ```
//! use morton_layout::{BlockLayoutParameters, FingerprintBudget};
//!
//! let layout = BlockLayoutParameters::new(64, 2, 8, 16)
//!     .with_budget(FingerprintBudget::Packed)
//!     .compute()
//!     .unwrap();
//!
//! assert_eq!(layout.fullness_counter_array_len, 128);
//! assert_eq!(layout.max_fingerprints_per_block, 46.0);
//! assert_eq!(layout.available_bits_for_ota, 16.0);
//! ```

pub mod error;
pub use error::{ErrorKind, LayoutError};

pub mod layout_calculator;
pub use layout_calculator::*;

pub mod utils;

pub mod cli;
