//! Code table generation and encoding.
//!
//! A code table maps each symbol to its root-to-leaf path in the tree,
//! written as a digit sequence (0 = left, 1 = right). Because symbols
//! live only at leaves, no code is a prefix of another.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to its prefix-free codeword.
///
/// Digits are stored one per byte with values 0 and 1, matching the
/// stream representation used throughout this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<u8, Vec<u8>>,
}

impl CodeTable {
    /// Derive the code table from a tree by depth-first traversal.
    ///
    /// A degenerate single-symbol tree assigns the one-digit code `0`,
    /// never the empty code, so the stream still carries one digit per
    /// input symbol.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        match tree {
            HuffmanTree::Single { symbol, .. } => {
                codes.insert(*symbol, vec![0]);
            }
            HuffmanTree::Binary(root) => {
                collect_codes(root, Vec::new(), &mut codes);
            }
        }
        Self { codes }
    }

    /// Codeword for `symbol`, if present.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, codeword)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_slice()))
    }

    /// Encode a symbol sequence by concatenating codewords in order.
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if `data` contains a symbol with
    /// no entry in this table. No default code is ever substituted.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for &symbol in data {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(Error::UnknownSymbol(symbol))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

fn collect_codes(node: &Node, prefix: Vec<u8>, codes: &mut HashMap<u8, Vec<u8>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            collect_codes(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            collect_codes(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyModel;

    fn table_for(data: &[u8]) -> CodeTable {
        let tree = HuffmanTree::from_frequencies(&FrequencyModel::from_bytes(data)).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_single_symbol_code_is_one_digit() {
        let table = table_for(b"aaaaa");
        assert_eq!(table.code(b'a'), Some(&[0u8][..]));
        assert_eq!(table.encode(b"aaaaa").unwrap(), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_free() {
        let table = table_for(b"the quick brown fox jumps over the lazy dog");
        let codes: Vec<&[u8]> = table.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_uniform_alphabet_code_lengths() {
        // 26 equiprobable symbols: Huffman assigns lengths 4 and 5
        // (2^5 = 32 slots, 6 leaves promoted a level up).
        let table = table_for(b"abcdefghijklmnopqrstuvwxyz");
        assert_eq!(table.len(), 26);
        let mut fours = 0;
        let mut fives = 0;
        for (_, code) in table.iter() {
            match code.len() {
                4 => fours += 1,
                5 => fives += 1,
                n => panic!("unexpected code length {n}"),
            }
        }
        // Kraft equality for a full binary tree: sum of 2^-len == 1.
        assert_eq!(fours * 2 + fives, 32);
        assert_eq!(fours + fives, 26);
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        let table = table_for(b"aaaaaaaabbbbccd");
        let len = |s| table.code(s).unwrap().len();
        assert!(len(b'a') <= len(b'b'));
        assert!(len(b'b') <= len(b'c'));
        assert!(len(b'b') <= len(b'd'));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let table = table_for(b"abracadabra");
        assert!(matches!(
            table.encode(b"abraxas"),
            Err(Error::UnknownSymbol(b'x'))
        ));
    }
}
