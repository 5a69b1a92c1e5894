/// Bits in one storage block. 512 bits is a single 64-byte cache line.
pub const DEFAULT_BLOCK_SIZE_BITS: u32 = 512;

// Smoke-test configuration used when the CLI is run without arguments
pub const DEFAULT_BUCKETS_PER_BLOCK: u32 = 64;
pub const DEFAULT_SLOTS_PER_BUCKET: u32 = 2;
pub const DEFAULT_FINGERPRINT_LEN_BITS: u32 = 8;
pub const DEFAULT_TARGET_OTA_LEN: u32 = 16;
