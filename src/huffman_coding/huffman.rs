use log::trace;

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Insertion sequence number, used to break weight ties.
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new leaf
    pub fn leaf(sym: char, weight: u64, seq: u32) -> Node {
        Node {
            weight,
            seq,
            node_data: NodeData::Leaf(sym),
        }
    }

    /// Join two nodes under a new parent. `left` is the one taken off the heap first.
    pub fn merge(left: Node, right: Node, seq: u32) -> Node {
        Node {
            weight: left.weight + right.weight,
            seq,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Reversed on (weight, seq), so the max-heap hands out the lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A finished Huffman tree. Immutable once built.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: Node,
}

impl HuffmanTree {
    /// Build the tree from symbol counts. Returns None for an empty table. A single symbol gives
    /// a tree whose root is that symbol's leaf.
    ///
    /// Leaves are numbered in symbol order and each merged node takes the next number, so equal
    /// weights always come off the heap in the same order and the same input gives the same tree.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Option<Self> {
        let mut heap: BinaryHeap<Node> = freqs
            .iter()
            .enumerate()
            .map(|(seq, (&sym, &weight))| Node::leaf(sym, weight, seq as u32))
            .collect();
        let mut next_seq = heap.len() as u32;

        // Pull the two lightest nodes and push back their parent until one node is left.
        loop {
            let left = heap.pop()?;
            let right = match heap.pop() {
                Some(node) => node,
                None => return Some(HuffmanTree { root: left }),
            };
            trace!(
                "Merging weights {} + {} as node {}",
                left.weight,
                right.weight,
                next_seq
            );
            heap.push(Node::merge(left, right, next_seq));
            next_seq += 1;
        }
    }

    /// Total weight, which equals the number of symbols counted.
    pub fn weight(&self) -> u64 {
        self.root.weight
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match &node.node_data {
                NodeData::Leaf(_) => 0,
                NodeData::Kids(l, r) => 1 + walk(l).max(walk(r)),
            }
        }
        walk(&self.root)
    }

    /// Dump the tree shape at trace level.
    pub fn log_structure(&self) {
        if log::log_enabled!(log::Level::Trace) {
            trace!("Huffman tree structure:");
            log_node(&self.root, 0, "root");
        }
    }
}

fn log_node(node: &Node, depth: usize, label: &str) {
    let indent = "  ".repeat(depth);
    match &node.node_data {
        NodeData::Leaf(sym) => {
            trace!("{}{}-> Leaf {:?} [weight: {}]", indent, label, sym, node.weight)
        }
        NodeData::Kids(left, right) => {
            trace!("{}{}-> Internal [weight: {}]", indent, label, node.weight);
            log_node(left, depth + 1, "L");
            log_node(right, depth + 1, "R");
        }
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, Node, NodeData};
    use crate::tools::freq_count::{freqs_str, FrequencyTable};

    fn weights_add_up(node: &Node) -> bool {
        match &node.node_data {
            NodeData::Leaf(_) => true,
            NodeData::Kids(l, r) => {
                node.weight == l.weight + r.weight && weights_add_up(l) && weights_add_up(r)
            }
        }
    }

    fn leaf_count(node: &Node) -> usize {
        match &node.node_data {
            NodeData::Leaf(_) => 1,
            NodeData::Kids(l, r) => leaf_count(l) + leaf_count(r),
        }
    }

    #[test]
    fn empty_test() {
        assert!(HuffmanTree::from_frequencies(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn single_leaf_test() {
        let tree = HuffmanTree::from_frequencies(&freqs_str("zzzz")).unwrap();
        assert_eq!(tree.root, Node::leaf('z', 4, 0));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn three_symbol_shape_test() {
        // c and b merge first (3), then that node joins a (7).
        let tree = HuffmanTree::from_frequencies(&freqs_str("aaaabbc")).unwrap();
        assert_eq!(tree.weight(), 7);
        match &tree.root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.weight, 3);
                assert_eq!(**right, Node::leaf('a', 4, 0));
                match &left.node_data {
                    NodeData::Kids(ll, lr) => {
                        assert_eq!(**ll, Node::leaf('c', 1, 2));
                        assert_eq!(**lr, Node::leaf('b', 2, 1));
                    }
                    NodeData::Leaf(_) => panic!("expected internal node"),
                }
            }
            NodeData::Leaf(_) => panic!("expected internal root"),
        }
    }

    #[test]
    fn ties_break_by_sequence_test() {
        // Four equal weights: a+b merge first, then c+d, then the two pairs.
        let tree = HuffmanTree::from_frequencies(&freqs_str("abcd")).unwrap();
        match &tree.root.node_data {
            NodeData::Kids(l, r) => {
                assert_eq!((l.seq, r.seq), (4, 5));
            }
            NodeData::Leaf(_) => panic!("expected internal root"),
        }
    }

    #[test]
    fn weight_invariant_test() {
        let text = "it was the best of times, it was the worst of times\n";
        let f = freqs_str(text);
        let tree = HuffmanTree::from_frequencies(&f).unwrap();
        assert!(weights_add_up(&tree.root));
        assert_eq!(tree.weight(), text.chars().count() as u64);
        assert_eq!(leaf_count(&tree.root), f.len());
    }

    #[test]
    fn deterministic_test() {
        let f = freqs_str("mississippi river");
        let a = HuffmanTree::from_frequencies(&f).unwrap();
        let b = HuffmanTree::from_frequencies(&f).unwrap();
        assert_eq!(a.root, b.root);
    }
}
