//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol in the input has no entry in the supplied code table.
    #[error("symbol {0:#04x} not present in code table")]
    UnknownSymbol(u8),

    /// The bit stream ended in the middle of a codeword.
    #[error("bit stream truncated mid-codeword")]
    TruncatedStream,

    /// Tree construction was requested for an empty frequency model.
    #[error("cannot build a tree from an empty frequency model")]
    EmptyInput,

    /// A deserialized tree violates a structural invariant.
    #[error("malformed tree model: {0}")]
    MalformedModel(&'static str),

    /// An I/O error occurred while persisting or loading a tree.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
