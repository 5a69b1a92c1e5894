mod format_bits;
pub use format_bits::format_bits;

mod int_ceil;
pub use int_ceil::int_ceil;

mod log2_ceil;
pub use log2_ceil::log2_ceil;
