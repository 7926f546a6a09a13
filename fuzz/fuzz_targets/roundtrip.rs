#![no_main]
use huffman::{decode, encode, model, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (bits, tree) = encode(data).unwrap();

    let Some(tree) = tree else {
        assert!(data.is_empty());
        assert!(bits.is_empty());
        return;
    };

    let output = decode(&bits, &tree).unwrap();
    assert_eq!(data, output.as_slice());

    // Persisted tree must decode identically.
    let mut buf = Vec::new();
    model::write_tree(&mut buf, &tree).unwrap();
    let reloaded: HuffmanTree = model::read_tree(&mut buf.as_slice()).unwrap();
    assert_eq!(decode(&bits, &reloaded).unwrap(), output);
});
