mod constants;
pub use constants::*;

mod fingerprint_budget;
pub use fingerprint_budget::FingerprintBudget;

mod block_layout_parameters;
pub use block_layout_parameters::BlockLayoutParameters;

mod block_layout_result;
pub use block_layout_result::BlockLayoutResult;

mod compute;
pub use compute::{compute, compute_layout};

mod sweep;
pub use sweep::{SweepParameters, SweepRow, sweep};
