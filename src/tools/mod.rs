//! The tools module provides the helper functions around the Huffman core.
//!
//! The tools are:
//! - cli: Command line interface and the options it produces.
//! - freq_count: Symbol frequency count of an input stream.
//! - symbol_reader: Splits a byte stream into symbols (Unicode scalar values).
//!
pub mod cli;
pub mod freq_count;
pub mod symbol_reader;
