#[cfg(test)]
mod tests {

    use morton_layout::{
        BlockLayoutParameters, DEFAULT_BLOCK_SIZE_BITS, ErrorKind, FingerprintBudget, LayoutError,
        compute, compute_layout,
    };

    /// Sum of every region of the block, in bits
    fn accounted_bits(layout: &morton_layout::BlockLayoutResult) -> f64 {
        layout.fullness_counter_array_len as f64
            + layout.max_fingerprints_per_block
                * f64::from(layout.parameters.fingerprint_len_bits)
            + layout.available_bits_for_ota
    }

    #[test]
    fn test_reference_block_layout() {
        let layout = compute(&BlockLayoutParameters::new(64, 2, 8, 16)).expect("Valid layout");

        assert_eq!(layout.fullness_counter_width, 2);
        assert_eq!(layout.fullness_counter_array_len, 128);
        assert_eq!(layout.available_bits, 368);
        assert_eq!(layout.max_fingerprints_per_block, 46.0);
        assert_eq!(layout.available_bits_for_ota, 16.0);
        assert_eq!(layout.slot_compression_ratio, 46.0 / 128.0);
        assert_eq!(layout.slot_compression_ratio, 0.359375);
        assert_eq!(layout.target_ota_len, 16);
        assert_eq!(accounted_bits(&layout), 512.0);
    }

    #[test]
    fn test_default_parameters_match_reference_block() {
        let params = BlockLayoutParameters::default();

        assert_eq!(params.buckets_per_block, 64);
        assert_eq!(params.slots_per_bucket, 2);
        assert_eq!(params.fingerprint_len_bits, 8);
        assert_eq!(params.target_ota_len, 16);
        assert_eq!(params.block_size_bits, DEFAULT_BLOCK_SIZE_BITS);
        assert_eq!(params.budget, FingerprintBudget::Analytical);
    }

    #[test]
    fn test_compute_layout_defaults_block_size() {
        let defaulted = compute_layout(64, 2, 8, 16, None).expect("Valid layout");
        let explicit = compute_layout(64, 2, 8, 16, Some(512)).expect("Valid layout");

        assert_eq!(defaulted, explicit);
        assert_eq!(defaulted.parameters.block_size_bits, 512);
    }

    #[test]
    fn test_analytical_budget_keeps_fractional_fingerprints() {
        let layout = compute(&BlockLayoutParameters::new(64, 2, 12, 16)).expect("Valid layout");

        // 368 bits / 12 bits per fingerprint
        assert!((layout.max_fingerprints_per_block - 368.0 / 12.0).abs() < 1e-12);
        assert!((layout.available_bits_for_ota - 16.0).abs() < 1e-9);
        assert!((accounted_bits(&layout) - 512.0).abs() < 1e-9);
    }

    #[test]
    fn test_packed_budget_floors_fingerprints_and_pads_ota() {
        let layout = BlockLayoutParameters::new(64, 2, 12, 16)
            .with_budget(FingerprintBudget::Packed)
            .compute()
            .expect("Valid layout");

        assert_eq!(layout.max_fingerprints_per_block, 30.0);
        // 512 - 128 - 30 * 12
        assert_eq!(layout.available_bits_for_ota, 24.0);
        assert_eq!(layout.slot_compression_ratio, 30.0 / 128.0);
        assert_eq!(accounted_bits(&layout), 512.0);
    }

    #[test]
    fn test_packed_and_analytical_agree_on_exact_division() {
        let analytical = BlockLayoutParameters::default().compute().unwrap();
        let packed = BlockLayoutParameters::default()
            .with_budget(FingerprintBudget::Packed)
            .compute()
            .unwrap();

        assert_eq!(
            analytical.max_fingerprints_per_block,
            packed.max_fingerprints_per_block
        );
        assert_eq!(analytical.available_bits_for_ota, packed.available_bits_for_ota);
        assert_eq!(analytical.slot_compression_ratio, packed.slot_compression_ratio);
    }

    #[test]
    fn test_fullness_counter_width_per_slot_count() {
        let expected = [(1, 1), (2, 2), (3, 2), (4, 3), (7, 3), (8, 4), (15, 4), (16, 5)];

        for (slots_per_bucket, width) in expected {
            let layout = compute(&BlockLayoutParameters::new(4, slots_per_bucket, 8, 0))
                .expect("Valid layout");

            assert_eq!(
                layout.fullness_counter_width, width,
                "Unexpected counter width for {} slots per bucket",
                slots_per_bucket
            );
            assert_eq!(layout.fullness_counter_array_len, u64::from(width) * 4);
        }
    }

    #[test]
    fn test_larger_block_size() {
        let layout = compute(&BlockLayoutParameters::new(64, 2, 8, 16).with_block_size_bits(1024))
            .expect("Valid layout");

        assert_eq!(layout.available_bits, 1024 - 16 - 128);
        assert_eq!(layout.max_fingerprints_per_block, 110.0);
        assert_eq!(layout.available_bits_for_ota, 16.0);
    }

    #[test]
    fn test_ratio_above_one_is_flagged_not_clamped() {
        let layout = compute(&BlockLayoutParameters::new(1, 1, 8, 0)).expect("Valid layout");

        assert_eq!(layout.fullness_counter_array_len, 1);
        assert_eq!(layout.max_fingerprints_per_block, 511.0 / 8.0);
        assert_eq!(layout.slot_compression_ratio, 511.0 / 8.0);
        assert!(layout.exceeds_uncompressed_capacity());

        let reference = BlockLayoutParameters::default().compute().unwrap();
        assert!(!reference.exceeds_uncompressed_capacity());
    }

    #[test]
    fn test_over_committed_block_is_rejected() {
        let err = compute(&BlockLayoutParameters::new(64, 2, 8, 400)).unwrap_err();

        assert_eq!(
            err,
            LayoutError::OverCommitted {
                block_size_bits: 512,
                reserved_bits: 528,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_zero_fingerprint_capacity_is_rejected() {
        // 512 - 380 - 128 = 4 bits left, one fingerprint needs 8
        let err = compute(&BlockLayoutParameters::new(64, 2, 8, 380)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NoFingerprintCapacity {
                available_bits: 4,
                fingerprint_len_bits: 8,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Configuration);

        // Exactly zero bits left
        let err = compute(&BlockLayoutParameters::new(64, 2, 8, 384)).unwrap_err();
        assert_eq!(
            err,
            LayoutError::NoFingerprintCapacity {
                available_bits: 0,
                fingerprint_len_bits: 8,
            }
        );
    }

    #[test]
    fn test_exactly_one_fingerprint_fits() {
        let layout = compute(&BlockLayoutParameters::new(64, 2, 8, 376)).expect("Valid layout");

        assert_eq!(layout.available_bits, 8);
        assert_eq!(layout.max_fingerprints_per_block, 1.0);
    }

    #[test]
    fn test_zero_parameters_are_rejected() {
        let cases = [
            (BlockLayoutParameters::new(0, 2, 8, 16), "buckets_per_block"),
            (BlockLayoutParameters::new(64, 0, 8, 16), "slots_per_bucket"),
            (BlockLayoutParameters::new(64, 2, 0, 16), "fingerprint_len_bits"),
            (
                BlockLayoutParameters::new(64, 2, 8, 16).with_block_size_bits(0),
                "block_size_bits",
            ),
        ];

        for (params, parameter) in cases {
            let err = compute(&params).unwrap_err();
            assert_eq!(err, LayoutError::ZeroParameter { parameter });
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_zero_target_ota_is_valid() {
        let layout = compute(&BlockLayoutParameters::new(64, 2, 8, 0)).expect("Valid layout");

        assert_eq!(layout.max_fingerprints_per_block, 48.0);
        assert_eq!(layout.available_bits_for_ota, 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let params = BlockLayoutParameters::new(48, 3, 7, 23);

        let first = compute(&params).unwrap();
        let second = compute(&params).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.slot_compression_ratio.to_bits(),
            second.slot_compression_ratio.to_bits()
        );
    }

    #[test]
    fn test_blocks_required_and_storage_bits() {
        // 128 logical slots per block
        let layout = BlockLayoutParameters::default().compute().unwrap();

        assert_eq!(layout.blocks_required(0), 0);
        assert_eq!(layout.blocks_required(1), 1);
        assert_eq!(layout.blocks_required(128), 1);
        assert_eq!(layout.blocks_required(129), 2);
        assert_eq!(layout.blocks_required(1_000), 8);

        assert_eq!(layout.storage_bits(1_000).unwrap(), 8 * 512);
        assert_eq!(layout.storage_bits(1 << 20).unwrap(), (1 << 13) * 512);

        // Beyond 2^53 slots the last partial block must still be counted
        assert_eq!(layout.blocks_required((1 << 60) + 1), (1 << 53) + 1);
        assert_eq!(layout.blocks_required(u64::MAX), u64::MAX.div_ceil(128));

        // One logical slot per block: one block per slot
        let single = BlockLayoutParameters::new(1, 1, 8, 0).compute().unwrap();
        assert_eq!(single.blocks_required((1 << 53) + 1), (1 << 53) + 1);
        assert_eq!(single.blocks_required(u64::MAX), u64::MAX);

        // Storage for that many blocks no longer fits in a u64
        assert!(matches!(
            single.storage_bits(u64::MAX),
            Err(LayoutError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_fields_are_ordered_and_formatted() {
        let layout = BlockLayoutParameters::default().compute().unwrap();
        let fields = layout.fields();

        let keys: Vec<&str> = fields.iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            vec![
                "fullness_counter_width",
                "fullness_counter_array_len",
                "available_bits",
                "max_fingerprints_per_block",
                "available_bits_for_ota",
                "slot_compression_ratio",
                "target_ota_len",
            ]
        );

        let values: Vec<&str> = fields.iter().map(|(_, value)| value.as_str()).collect();
        assert_eq!(
            values,
            vec!["2", "128", "368", "46.0", "16.0", "0.359375", "16"]
        );
    }

    #[test]
    fn test_result_serializes_to_json() {
        let layout = BlockLayoutParameters::default()
            .with_budget(FingerprintBudget::Packed)
            .compute()
            .unwrap();

        let value = serde_json::to_value(layout).expect("Serializable layout");

        assert_eq!(value["fullness_counter_width"], 2);
        assert_eq!(value["max_fingerprints_per_block"], 46.0);
        assert_eq!(value["slot_compression_ratio"], 0.359375);
        assert_eq!(value["parameters"]["budget"], "packed");
        assert_eq!(value["parameters"]["block_size_bits"], 512);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::ZeroParameter {
                parameter: "slots_per_bucket"
            }
            .to_string(),
            "`slots_per_bucket` must be greater than zero"
        );

        let err = compute(&BlockLayoutParameters::new(64, 2, 8, 400)).unwrap_err();
        assert!(err.to_string().contains("over-committed"));
        assert!(err.to_string().contains("528"));
    }
}
