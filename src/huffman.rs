//! Static Huffman codec over the 256-symbol byte alphabet.
//!
//! Tree construction is the standard min-two-merge procedure, but operates
//! on a sorted `Vec` rather than a heap: the alphabet is fixed at 256
//! symbols, so a `Vec` with linear insertion is simpler and fast enough.
//! Ties are broken by stable insertion order — a new node is always placed
//! after every existing node of equal frequency — which the encoder and
//! decoder must agree on bit-for-bit, since the decoder rebuilds the tree
//! from the transmitted frequency table rather than receiving it directly.

use std::collections::HashMap;
use bit_vec::BitVec;
use crate::error::{Error, Result};

/// Count of each byte value 0..=255 in a message. Capped at `u8` because
/// `MAX_MESSAGE_SIZE` bounds any single symbol's count to at most 255.
pub type FrequencyTable = [u8; 256];

/// A node in the Huffman tree. Internal nodes own their two children
/// outright; dropping the root drops the whole tree.
#[derive(Debug)]
pub enum HuffmanNode {
    Leaf { symbol: u8, freq: u32 },
    Internal { freq: u32, left: Box<HuffmanNode>, right: Box<HuffmanNode> },
}

impl HuffmanNode {
    fn freq(&self) -> u32 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// Bitstring assigned to each byte value with nonzero frequency.
pub type CodeTable = HashMap<u8, BitVec>;

/// Build the frequency table for a message.
pub fn count_frequencies(message: &[u8]) -> FrequencyTable {
    let mut table = [0u8; 256];
    for &byte in message {
        table[byte as usize] = table[byte as usize].saturating_add(1);
    }
    table
}

/// Insert `node` into `list` (kept sorted ascending by frequency), placing
/// it after every node already present with the same frequency.
fn insert_sorted(list: &mut Vec<HuffmanNode>, node: HuffmanNode) {
    let freq = node.freq();
    let pos = list.iter().position(|n| n.freq() > freq).unwrap_or(list.len());
    list.insert(pos, node);
}

/// Rebuild the canonical Huffman tree from a frequency table. Leaves are
/// inserted in ascending byte-value order, which together with the
/// stable tie-break gives encoder and decoder an identical tree whenever
/// they start from the same frequency table.
pub fn build_tree(freq_table: &FrequencyTable) -> Result<HuffmanNode> {
    let mut list: Vec<HuffmanNode> = Vec::new();
    for symbol in 0..256usize {
        let freq = freq_table[symbol];
        if freq > 0 {
            insert_sorted(&mut list, HuffmanNode::Leaf { symbol: symbol as u8, freq: freq as u32 });
        }
    }
    if list.is_empty() {
        return Err(Error::CompressionError("frequency table has no nonzero entries".into()));
    }
    while list.len() > 1 {
        let left = list.remove(0);
        let right = list.remove(0);
        let freq = left.freq() + right.freq();
        insert_sorted(&mut list, HuffmanNode::Internal { freq, left: Box::new(left), right: Box::new(right) });
    }
    Ok(list.remove(0))
}

fn walk(node: &HuffmanNode, path: &mut BitVec, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            table.insert(*symbol, path.clone());
        }
        HuffmanNode::Internal { left, right, .. } => {
            path.push(false);
            walk(left, path, table);
            path.pop();
            path.push(true);
            walk(right, path, table);
            path.pop();
        }
    }
}

/// Depth-first traversal assigning `0` on the left edge and `1` on the
/// right. A tree that has collapsed to a single leaf (one distinct byte in
/// the message) is the degenerate case: that leaf gets the one-bit code
/// `0` rather than an empty code, so the decoder has something to consume.
pub fn build_code_table(root: &HuffmanNode) -> CodeTable {
    let mut table = HashMap::new();
    match root {
        HuffmanNode::Leaf { symbol, .. } => {
            let mut code = BitVec::new();
            code.push(false);
            table.insert(*symbol, code);
        }
        HuffmanNode::Internal { .. } => {
            let mut path = BitVec::new();
            walk(root, &mut path, &mut table);
        }
    }
    table
}

/// Build a frequency table and code table for `message`, then encode it
/// into a compressed bitstream. Returns the bitstream alongside the
/// frequency table needed to rebuild the tree on the decoding side.
pub fn compress(message: &[u8]) -> Result<(BitVec, FrequencyTable)> {
    let freq_table = count_frequencies(message);
    let root = build_tree(&freq_table)?;
    let code_table = build_code_table(&root);
    let mut bits = BitVec::new();
    for &byte in message {
        let code = code_table.get(&byte)
            .ok_or_else(|| Error::CompressionError(format!("no code assigned for byte {byte}")))?;
        for bit in code.iter() {
            bits.push(bit);
        }
    }
    log::debug!("huffman: {} symbols compressed to {} bits", message.len(), bits.len());
    Ok((bits, freq_table))
}

/// Rebuild the tree from `freq_table` and decode `bits` back into
/// `message_length` symbols.
///
/// A single-leaf tree is decoded without consuming any bits: the root
/// symbol is simply emitted `message_length` times, mirroring the
/// encoder's degenerate one-symbol case.
pub fn decompress(bits: &BitVec, freq_table: &FrequencyTable, message_length: usize) -> Result<Vec<u8>> {
    let root = build_tree(freq_table)?;
    if let HuffmanNode::Leaf { symbol, .. } = &root {
        return Ok(vec![*symbol; message_length]);
    }
    let mut output = Vec::with_capacity(message_length);
    let mut node = &root;
    for bit in bits.iter() {
        node = match node {
            HuffmanNode::Internal { left, right, .. } => if bit { right.as_ref() } else { left.as_ref() },
            HuffmanNode::Leaf { .. } => return Err(Error::CompressionError("descended past a leaf".into())),
        };
        if let HuffmanNode::Leaf { symbol, .. } = node {
            output.push(*symbol);
            if output.len() == message_length {
                break;
            }
            node = &root;
        }
    }
    if output.len() != message_length {
        return Err(Error::CompressionError(format!(
            "expected {message_length} symbols, decoded {}",
            output.len()
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitvec_to_string(bits: &BitVec) -> String {
        bits.iter().map(|b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn two_symbol_message_ab() {
        let (bits, freq) = compress(b"AB").unwrap();
        assert_eq!(bitvec_to_string(&bits), "01");
        let decoded = decompress(&bits, &freq, 2).unwrap();
        assert_eq!(decoded, b"AB");
    }

    #[test]
    fn single_symbol_message_collapses_to_one_bit_codes() {
        let (bits, freq) = compress(b"aaaa").unwrap();
        assert_eq!(bitvec_to_string(&bits), "0000");
        let decoded = decompress(&bits, &freq, 4).unwrap();
        assert_eq!(decoded, b"aaaa");
    }

    #[test]
    fn hello_round_trips_and_hits_entropy_bound() {
        let (bits, freq) = compress(b"hello").unwrap();
        assert_eq!(bits.len(), 10);
        let decoded = decompress(&bits, &freq, 5).unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn code_table_has_no_prefix_collisions() {
        let freq = count_frequencies(b"hello world, this is a test message");
        let root = build_tree(&freq).unwrap();
        let table = build_code_table(&root);
        let codes: Vec<String> = table.values().map(bitvec_to_string).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn encoded_length_matches_entropy_formula() {
        let message = b"mississippi";
        let freq = count_frequencies(message);
        let root = build_tree(&freq).unwrap();
        let table = build_code_table(&root);
        let expected: usize = message.iter().map(|b| table[b].len()).sum();
        let (bits, _) = compress(message).unwrap();
        assert_eq!(bits.len(), expected);
    }

    #[test]
    fn tie_break_is_deterministic_across_symbol_relabeling() {
        // Same multiset of frequencies, different symbol identities: the
        // stable insertion-order tie-break must still produce isomorphic
        // trees, so code *lengths* per frequency rank match exactly.
        let mut freq_a = [0u8; 256];
        freq_a[b'a' as usize] = 2;
        freq_a[b'b' as usize] = 2;
        freq_a[b'c' as usize] = 3;
        let mut freq_b = [0u8; 256];
        freq_b[b'x' as usize] = 2;
        freq_b[b'y' as usize] = 2;
        freq_b[b'z' as usize] = 3;
        let table_a = build_code_table(&build_tree(&freq_a).unwrap());
        let table_b = build_code_table(&build_tree(&freq_b).unwrap());
        assert_eq!(table_a[&b'a'].len(), table_b[&b'x'].len());
        assert_eq!(table_a[&b'b'].len(), table_b[&b'y'].len());
        assert_eq!(table_a[&b'c'].len(), table_b[&b'z'].len());
    }

    #[test]
    fn decode_rejects_wrong_message_length() {
        let (bits, freq) = compress(b"AB").unwrap();
        let err = decompress(&bits, &freq, 3).unwrap_err();
        assert!(matches!(err, Error::CompressionError(_)));
    }
}
