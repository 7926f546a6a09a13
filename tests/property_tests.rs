use huffman::{compression_ratio, decode, encode, CodeTable, FrequencyModel, HuffmanTree};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let (bits, tree) = encode(&input).unwrap();
        let tree = tree.unwrap();
        let output = decode(&bits, &tree).unwrap();
        prop_assert_eq!(input, output);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(any::<u8>(), 2..300)) {
        let model = FrequencyModel::from_bytes(&input);
        let tree = HuffmanTree::from_frequencies(&model).unwrap();
        let table = CodeTable::from_tree(&tree);

        let codes: Vec<(u8, &[u8])> = table.iter().collect();
        for &(a, code_a) in &codes {
            for &(b, code_b) in &codes {
                if a != b {
                    prop_assert!(!code_b.starts_with(code_a));
                }
            }
        }
    }

    #[test]
    fn test_stream_length_matches_code_lengths(
        input in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let model = FrequencyModel::from_bytes(&input);
        let tree = HuffmanTree::from_frequencies(&model).unwrap();
        let table = CodeTable::from_tree(&tree);

        let expected: usize = table
            .iter()
            .map(|(s, code)| model.count(s) as usize * code.len())
            .sum();
        let bits = table.encode(&input).unwrap();
        prop_assert_eq!(bits.len(), expected);
    }

    #[test]
    fn test_root_frequency_is_input_length(
        input in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let model = FrequencyModel::from_bytes(&input);
        let tree = HuffmanTree::from_frequencies(&model).unwrap();
        prop_assert_eq!(tree.total_freq(), input.len() as u64);
    }

    #[test]
    fn test_ratio_never_beats_one_bit_per_symbol(
        input in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        // Every code is at least one digit, so 12.5% is the floor.
        let (bits, _) = encode(&input).unwrap();
        prop_assert!(compression_ratio(input.len(), bits.len()) >= 12.5);
    }
}
