//! Turns a finished Huffman tree into the symbol to codeword table.
//!
//! Codewords are strings of '0' and '1' characters. A left edge adds "0" and a right edge adds
//! "1", so the finished table is a prefix code. A tree that is a single leaf has no edges, and
//! that symbol is given the codeword "0" so the payload still has one character per symbol.

use std::collections::BTreeMap;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::huffman::{HuffmanTree, Node, NodeData};
use crate::error::{HuffError, Result};
use crate::tools::freq_count::FrequencyTable;

/// Codeword given to the only symbol of a one-symbol alphabet.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Codeword to symbol lookup used by the decoder.
pub type InverseTable = FxHashMap<String, char>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Walk the tree depth first, left before right, collecting each leaf's path.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let start = if tree.root.is_leaf() {
            SINGLE_SYMBOL_CODE.to_string()
        } else {
            String::new()
        };
        let table = CodeTable {
            codes: collect_codes(&tree.root, start, BTreeMap::new()),
        };
        debug_assert!(table.is_prefix_free());
        debug!("Code table holds {} codewords", table.len());
        for (sym, code) in table.iter() {
            trace!("{:?} -> {}", sym, code);
        }
        table
    }

    /// Count, build and walk in one step. An empty table gives an empty code table.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Self {
        HuffmanTree::from_frequencies(freqs)
            .map(|tree| Self::from_tree(&tree))
            .unwrap_or_default()
    }

    /// Accept a table read back from a container. Codewords must be non-empty strings of
    /// '0' and '1' and together form a prefix code.
    pub fn from_codes(codes: BTreeMap<char, String>) -> Result<Self> {
        if let Some((sym, code)) = codes
            .iter()
            .find(|(_, c)| c.is_empty() || !c.chars().all(|b| b == '0' || b == '1'))
        {
            return Err(HuffError::TableDeserialization(format!(
                "symbol {:?} has invalid codeword {:?}",
                sym, code
            )));
        }
        let table = CodeTable { codes };
        if let Some((short, long)) = table.prefix_clash() {
            return Err(HuffError::TableDeserialization(format!(
                "codeword {:?} is a prefix of {:?}",
                short, long
            )));
        }
        Ok(table)
    }

    pub fn code(&self, sym: char) -> Option<&str> {
        self.codes.get(&sym).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(&sym, code)| (sym, code.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// True when no codeword is a prefix of (or equal to) another.
    pub fn is_prefix_free(&self) -> bool {
        self.prefix_clash().is_none()
    }

    /// Finds a pair of codewords where the first is a prefix of the second. After sorting, any
    /// such pair shows up as neighbours.
    fn prefix_clash(&self) -> Option<(&str, &str)> {
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
            .windows(2)
            .find(|pair| pair[1].starts_with(pair[0]))
            .map(|pair| (pair[0], pair[1]))
    }

    /// Codeword to symbol map for decoding. Fails if two symbols share a codeword.
    pub fn inverse(&self) -> Result<InverseTable> {
        let mut inverse = InverseTable::default();
        for (&sym, code) in &self.codes {
            if let Some(prev) = inverse.insert(code.clone(), sym) {
                return Err(HuffError::TableDeserialization(format!(
                    "symbols {:?} and {:?} share codeword {:?}",
                    prev, sym, code
                )));
            }
        }
        Ok(inverse)
    }
}

/// Depth first walk. The path so far is passed down and the finished codes are handed back up.
fn collect_codes(
    node: &Node,
    path: String,
    mut codes: BTreeMap<char, String>,
) -> BTreeMap<char, String> {
    match &node.node_data {
        NodeData::Leaf(sym) => {
            codes.insert(*sym, path);
            codes
        }
        NodeData::Kids(left, right) => {
            let codes = collect_codes(left, format!("{}0", path), codes);
            collect_codes(right, format!("{}1", path), codes)
        }
    }
}
