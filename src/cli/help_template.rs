use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Layout of the built-in example block (64 buckets x 2 slots, 8-bit fingerprints, 16-bit OTA)
      %BINARY_NAME%

      # Custom bucket shape in a 512-bit block
      %BINARY_NAME% calc --buckets-per-block 32 --slots-per-bucket 3 --fingerprint-len-bits 12

      # Whole fingerprint slots only, 1024-bit block
      %BINARY_NAME% calc --budget packed --block-size-bits 1024

      # Blocks and storage needed for a filter with one million logical slots
      %BINARY_NAME% calc --total-slots 1000000

      # Machine-readable output
      %BINARY_NAME% calc --format json

      # Compare bucket shapes
      %BINARY_NAME% sweep --buckets-per-block 16,32,64 --slots-per-bucket 1,2,3,4
"#};
