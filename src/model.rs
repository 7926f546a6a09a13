//! Durable persistence for Huffman trees.
//!
//! A decoder needs the tree that encoded the stream, so the tree can be
//! written out and reloaded without access to the original data. The wire
//! format is an explicit versioned schema rather than a language-native
//! object graph: a magic/version prefix followed by a preorder walk of
//! tagged nodes, each leaf carrying its symbol and little-endian
//! frequency. Structural invariants are checked at load time, not at
//! first decode.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::tree::{HuffmanTree, Node};

/// Format tag and version. Bump the last byte on incompatible changes.
const MAGIC: [u8; 4] = *b"HUF\x01";

const TAG_LEAF: u8 = 0x00;
const TAG_INTERNAL: u8 = 0x01;
const TAG_SINGLE: u8 = 0x02;

/// Nesting limit while reading. A byte alphabet never exceeds 255 levels;
/// anything deeper is corrupt data, not a tree.
const MAX_DEPTH: u32 = 512;

/// Serialize `tree` to `writer` in the versioned wire format.
pub fn write_tree<W: Write>(writer: &mut W, tree: &HuffmanTree) -> Result<()> {
    writer.write_all(&MAGIC)?;
    match tree {
        HuffmanTree::Single { symbol, freq } => {
            writer.write_all(&[TAG_SINGLE, *symbol])?;
            writer.write_all(&freq.to_le_bytes())?;
        }
        HuffmanTree::Binary(root) => write_node(writer, root)?,
    }
    Ok(())
}

fn write_node<W: Write>(writer: &mut W, node: &Node) -> Result<()> {
    match node {
        Node::Leaf { symbol, freq } => {
            writer.write_all(&[TAG_LEAF, *symbol])?;
            writer.write_all(&freq.to_le_bytes())?;
        }
        Node::Internal { freq, left, right } => {
            writer.write_all(&[TAG_INTERNAL])?;
            writer.write_all(&freq.to_le_bytes())?;
            write_node(writer, left)?;
            write_node(writer, right)?;
        }
    }
    Ok(())
}

/// Deserialize a tree from `reader` and validate it.
///
/// # Errors
/// Returns [`Error::MalformedModel`] for a bad magic/version, an unknown
/// node tag, truncated or trailing data, excessive nesting, or frequency
/// sums that do not match the tree structure; [`Error::Io`] for
/// underlying I/O failures.
pub fn read_tree<R: Read>(reader: &mut R) -> Result<HuffmanTree> {
    let mut magic = [0u8; 4];
    read_exact_or_malformed(reader, &mut magic)?;
    if magic != MAGIC {
        return Err(Error::MalformedModel("bad magic or unsupported version"));
    }

    let tag = read_u8(reader)?;
    let tree = match tag {
        TAG_SINGLE => {
            let symbol = read_u8(reader)?;
            let freq = read_u64(reader)?;
            HuffmanTree::Single { symbol, freq }
        }
        TAG_LEAF | TAG_INTERNAL => HuffmanTree::Binary(read_node(reader, tag, 0)?),
        _ => return Err(Error::MalformedModel("unknown node tag")),
    };

    let mut trailing = [0u8; 1];
    match reader.read(&mut trailing) {
        Ok(0) => {}
        Ok(_) => return Err(Error::MalformedModel("trailing data after tree")),
        Err(e) => return Err(Error::Io(e)),
    }

    tree.validate()?;
    Ok(tree)
}

fn read_node<R: Read>(reader: &mut R, tag: u8, depth: u32) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(Error::MalformedModel("tree nesting too deep"));
    }
    match tag {
        TAG_LEAF => {
            let symbol = read_u8(reader)?;
            let freq = read_u64(reader)?;
            if freq == 0 {
                return Err(Error::MalformedModel("leaf with zero frequency"));
            }
            Ok(Node::Leaf { symbol, freq })
        }
        TAG_INTERNAL => {
            let freq = read_u64(reader)?;
            let left_tag = read_u8(reader)?;
            let left = read_node(reader, left_tag, depth + 1)?;
            let right_tag = read_u8(reader)?;
            let right = read_node(reader, right_tag, depth + 1)?;
            Ok(Node::Internal {
                freq,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        _ => Err(Error::MalformedModel("unknown node tag")),
    }
}

/// Write `tree` to the file at `path`, creating or truncating it.
pub fn save_tree<P: AsRef<Path>>(path: P, tree: &HuffmanTree) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tree(&mut writer, tree)?;
    writer.flush()?;
    Ok(())
}

/// Load and validate a tree from the file at `path`.
pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<HuffmanTree> {
    let mut reader = BufReader::new(File::open(path)?);
    read_tree(&mut reader)
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    read_exact_or_malformed(reader, &mut buf)?;
    Ok(buf[0])
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64> {
    let mut buf = [0u8; 8];
    read_exact_or_malformed(reader, &mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_exact_or_malformed<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::MalformedModel("truncated serialized tree")
        } else {
            Error::Io(e)
        }
    })
}
