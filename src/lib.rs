//! Huffman coding for text files.
//!
//! Version 0.1.0
//!
//! Builds an optimal prefix code from the symbol (Unicode scalar value) frequencies of a text,
//! then writes a container holding the code table followed by the text's codewords. Codewords
//! are written as literal '0' and '1' characters rather than packed bits, so the container is
//! itself plain text.
//!
//! Basic usage to encode a file is as follows:
//!
//! `$> hufftext -z book.txt`
//!
//! This creates book.txt.huff. `hufftext -d book.txt.huff` restores book.txt.
//!
//! From code:
//!
//! ```
//! let container = hufftext::encode_str("aaaabbc")?;
//! assert!(container.ends_with("1111010100"));
//! assert_eq!(hufftext::decode_str(&container)?, "aaaabbc");
//! # Ok::<(), hufftext::HuffError>(())
//! ```
//!
pub mod compression;
pub mod container;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress_stream, encode_str, EncodeStats};
pub use compression::decompress::{decode_str, decompress_stream};
pub use error::{HuffError, Result};
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::huffman::HuffmanTree;
