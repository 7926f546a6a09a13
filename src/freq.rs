//! Symbol frequency modeling.
//!
//! The frequency model is the input to tree construction: a tally of how
//! often each distinct byte occurs in the data to be encoded.

use std::collections::HashMap;

/// Occurrence counts for each distinct symbol in an input.
///
/// The sum of all counts equals the input length, and every symbol that
/// occurs in the input appears exactly once as a key with a positive count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyModel {
    counts: HashMap<u8, u64>,
}

impl FrequencyModel {
    /// Tally the symbols of `data`. Empty input yields an empty model.
    pub fn from_bytes(data: &[u8]) -> Self {
        let counts = data.iter().copied().fold(HashMap::new(), |mut acc, b| {
            *acc.entry(b).or_insert(0u64) += 1;
            acc
        });
        Self { counts }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the tallied input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Count for `symbol`, or 0 if it never occurred.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Iterate over `(symbol, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let model = FrequencyModel::from_bytes(b"abracadabra");
        assert_eq!(model.len(), 5);
        assert_eq!(model.total(), 11);
        assert_eq!(model.count(b'a'), 5);
        assert_eq!(model.count(b'b'), 2);
        assert_eq!(model.count(b'r'), 2);
        assert_eq!(model.count(b'c'), 1);
        assert_eq!(model.count(b'd'), 1);
        assert_eq!(model.count(b'z'), 0);
    }

    #[test]
    fn test_empty_input() {
        let model = FrequencyModel::from_bytes(b"");
        assert!(model.is_empty());
        assert_eq!(model.total(), 0);
    }
}
