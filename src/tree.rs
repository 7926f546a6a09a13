//! Huffman tree construction and decoding.
//!
//! The tree is built bottom-up by repeatedly merging the two
//! lowest-frequency nodes, giving leaf depths that minimize the expected
//! codeword length. The same tree later drives decoding: each bit walks
//! one edge, each leaf emits one symbol.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyModel;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node carrying one symbol.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u8,
        /// Occurrence count of the symbol.
        freq: u64,
    },
    /// Merge node owning exactly two children.
    Internal {
        /// Sum of the two children's frequencies.
        freq: u64,
        /// Subtree reached on bit 0.
        left: Box<Node>,
        /// Subtree reached on bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Frequency of the subtree rooted at this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// True if every internal frequency equals the sum of its children's.
    fn sums_consistent(&self) -> bool {
        match self {
            Node::Leaf { .. } => true,
            Node::Internal { freq, left, right } => {
                *freq == left.freq() + right.freq()
                    && left.sums_consistent()
                    && right.sums_consistent()
            }
        }
    }
}

/// Heap entry with an explicit min-ordering and tie-break.
///
/// Ties on frequency break by insertion sequence (oldest first), so a
/// given frequency model always merges in the same order and produces
/// the same code table.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: Node,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the minimum on top.
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        (self.freq, self.seq) == (other.freq, other.seq)
    }
}

impl Eq for HeapEntry {}

/// An immutable Huffman tree: the model shared by encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    /// Degenerate one-symbol alphabet. The lone code is the single
    /// digit 0, and any bit in a stream decodes to this symbol.
    Single {
        /// The only symbol in the alphabet.
        symbol: u8,
        /// Occurrence count of that symbol.
        freq: u64,
    },
    /// Proper binary tree with at least two leaves; the root is always
    /// an [`Node::Internal`].
    Binary(Node),
}

impl HuffmanTree {
    /// Build the optimal prefix tree for `model`.
    ///
    /// Leaves are seeded into the priority queue in ascending symbol
    /// order, and frequency ties break by insertion order, so the result
    /// is deterministic for a given model.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if the model has no symbols.
    pub fn from_frequencies(model: &FrequencyModel) -> Result<Self> {
        let mut leaves: Vec<(u8, u64)> = model.iter().collect();
        if leaves.is_empty() {
            return Err(Error::EmptyInput);
        }
        leaves.sort_unstable_by_key(|&(symbol, _)| symbol);

        if let [(symbol, freq)] = leaves[..] {
            return Ok(HuffmanTree::Single { symbol, freq });
        }

        let mut heap = BinaryHeap::with_capacity(leaves.len());
        for (seq, (symbol, freq)) in leaves.into_iter().enumerate() {
            heap.push(HeapEntry {
                freq,
                seq: seq as u64,
                node: Node::Leaf { symbol, freq },
            });
        }

        let mut seq = heap.len() as u64;
        while heap.len() > 1 {
            let a = heap.pop().expect("heap holds at least two entries");
            let b = heap.pop().expect("heap holds at least two entries");
            let freq = a.freq + b.freq;
            heap.push(HeapEntry {
                freq,
                seq,
                node: Node::Internal {
                    freq,
                    left: Box::new(a.node),
                    right: Box::new(b.node),
                },
            });
            seq += 1;
        }

        let root = heap.pop().expect("merge loop leaves exactly one entry");
        Ok(HuffmanTree::Binary(root.node))
    }

    /// Total frequency at the root, i.e. the length of the modeled input.
    pub fn total_freq(&self) -> u64 {
        match self {
            HuffmanTree::Single { freq, .. } => *freq,
            HuffmanTree::Binary(root) => root.freq(),
        }
    }

    /// Decode a bit stream back into the original symbol sequence.
    ///
    /// Walks root-to-leaf for each codeword: 0 goes left, any other
    /// digit goes right. An empty stream decodes to an empty sequence.
    ///
    /// # Errors
    /// Returns [`Error::TruncatedStream`] if the stream ends in the
    /// middle of a codeword, or [`Error::MalformedModel`] if a binary
    /// tree was constructed with a bare leaf as its root.
    pub fn decode(&self, bits: &[u8]) -> Result<Vec<u8>> {
        let root = match self {
            // The single placeholder code does not discriminate; decode
            // by repetition count.
            HuffmanTree::Single { symbol, .. } => return Ok(vec![*symbol; bits.len()]),
            HuffmanTree::Binary(root) => root,
        };

        let mut out = Vec::new();
        let mut curr = root;
        for &bit in bits {
            curr = match curr {
                Node::Internal { left, right, .. } => {
                    if bit == 0 {
                        left
                    } else {
                        right
                    }
                }
                // The walk resets to the root at each leaf, so this is
                // only reachable for a tree rooted at a bare leaf.
                Node::Leaf { .. } => {
                    return Err(Error::MalformedModel("binary tree rooted at a bare leaf"))
                }
            };
            if let Node::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = root;
            }
        }

        if !std::ptr::eq(curr, root) {
            return Err(Error::TruncatedStream);
        }
        Ok(out)
    }

    /// Check the structural invariants of a tree.
    ///
    /// Used on deserialized trees: the root of a binary tree must be an
    /// internal node, and every internal frequency must equal the sum of
    /// its children's.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            HuffmanTree::Single { freq, .. } => {
                if *freq == 0 {
                    return Err(Error::MalformedModel("leaf with zero frequency"));
                }
            }
            HuffmanTree::Binary(root) => {
                if matches!(root, Node::Leaf { .. }) {
                    return Err(Error::MalformedModel("binary tree rooted at a bare leaf"));
                }
                if !root.sums_consistent() {
                    return Err(Error::MalformedModel(
                        "internal frequency does not match children",
                    ));
                }
            }
        }
        Ok(())
    }
}
