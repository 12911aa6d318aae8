//! The compression module runs the encode and decode pipelines.
//!
//! Encoding happens in the following steps:
//! - Frequency count: one pass over the input counting every symbol.
//! - Huffman tree: leaves for each symbol are merged, lightest first, into one tree.
//! - Code table: the tree is walked to give every symbol its codeword.
//! - Substitution: a second pass over the (rewound) input replaces each symbol with its codeword.
//! - Container: the table and payload are written behind the header markers.
//!
//! Decoding is the inverse: read the container, invert the table, then grow each codeword one
//! character at a time until it matches.
//!
//! Both pipelines are single threaded. Output is only written once the whole run has succeeded.
//!

pub mod compress;
pub mod decoder;
pub mod decompress;
pub mod encoder;
