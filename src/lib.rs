//! # Canonical Huffman Coding
//!
//! *Optimal prefix-free entropy coding over a static symbol distribution.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot because `E` is common, and `Q` a
//! long sequence because `Q` is rare. Huffman coding is the same idea
//! made optimal: count how often each symbol occurs, then hand out short
//! bit patterns to frequent symbols and long ones to rare symbols, in a
//! way that is provably the best any per-symbol code can do.
//!
//! The construction is a binary tree built bottom-up: repeatedly merge
//! the two least frequent nodes until one root remains. Each symbol's
//! code is its root-to-leaf path (0 = left, 1 = right). Because symbols
//! only live at leaves, no code is a prefix of another, so the encoded
//! stream needs no delimiters.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon   Entropy as the fundamental limit
//! 1949  Fano      Top-down code construction (suboptimal)
//! 1952  Huffman   Bottom-up merging: optimal prefix codes, as a term paper
//! 1976  Rissanen  Arithmetic coding: beats Huffman's 1-bit-per-symbol gap
//! 2007  Duda      ANS: arithmetic-coding rate at Huffman speed
//! ```
//!
//! David Huffman solved the problem as an MIT term paper after his
//! professor, Fano, assigned his own open research question. The key
//! inversion: build the tree from the least frequent symbols up, not
//! from the root down.
//!
//! ## Complexity Analysis
//!
//! - **Tree construction**: $O(n \log n)$ in the number of distinct
//!   symbols, via a binary min-heap.
//! - **Encoding / decoding**: $O(L)$ in the total output/input bit count.
//!
//! ## Implementation Notes
//!
//! This crate is the full pipeline: [`FrequencyModel`] tallies symbols,
//! [`HuffmanTree`] is built from the tally and drives decoding,
//! [`CodeTable`] is derived from the tree and drives encoding, and
//! [`model`] persists the tree in a versioned wire format so a decoder
//! can run without the original data. The encoded stream stores one
//! digit per byte (values 0/1); it is a model of the bitstream, not a
//! packed one.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."
//! - Cover, T. & Thomas, J. (2006). "Elements of Information Theory,"
//!   ch. 5.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod freq;
pub mod model;
pub mod tree;

pub use code::CodeTable;
pub use error::{Error, Result};
pub use freq::FrequencyModel;
pub use tree::{HuffmanTree, Node};

/// Encode `data`, returning the digit stream and the tree that encodes it.
///
/// The tree handle is what [`decode`] and [`model::save_tree`] consume.
/// Empty input is a distinguished case: it yields an empty stream and no
/// tree, since there is nothing to model.
///
/// # Errors
/// Propagates tree-construction and table-lookup failures; neither can
/// occur for the table derived from `data`'s own frequencies.
pub fn encode(data: &[u8]) -> Result<(Vec<u8>, Option<HuffmanTree>)> {
    if data.is_empty() {
        return Ok((Vec::new(), None));
    }
    let model = FrequencyModel::from_bytes(data);
    let tree = HuffmanTree::from_frequencies(&model)?;
    let bits = CodeTable::from_tree(&tree).encode(data)?;
    Ok((bits, Some(tree)))
}

/// Decode a digit stream with the tree that produced it.
///
/// # Errors
/// Returns [`Error::TruncatedStream`] if `bits` ends mid-codeword.
pub fn decode(bits: &[u8], tree: &HuffmanTree) -> Result<Vec<u8>> {
    tree.decode(bits)
}

/// Compressed size as a percentage of an 8-bits-per-symbol baseline.
///
/// Reporting only; decode never consumes this. Returns `0.0` for an
/// empty original rather than dividing by zero.
pub fn compression_ratio(original_len: usize, encoded_bits: usize) -> f64 {
    if original_len == 0 {
        return 0.0;
    }
    encoded_bits as f64 / (original_len as f64 * 8.0) * 100.0
}
