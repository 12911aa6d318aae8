//! The huffman module builds the prefix code used by the encoder and decoder.
//!
//! Symbol counts go onto a min-heap as leaves. The two lightest nodes are repeatedly joined under
//! a new parent until a single root is left. Walking that tree gives every symbol a codeword,
//! with frequent symbols sitting closer to the root and so getting shorter codes.
//!
//! Encoding and decoding both work from the same table, so the tree itself is never stored.
//!

pub mod code_table;
pub mod huffman;
