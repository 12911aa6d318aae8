//! The container module reads and writes the self-describing text file produced by the encoder.
//!
//! Layout:
//!
//! ```text
//! Header Section start
//! {"a":"1","b":"01","c":"00"}
//! Header Section end
//! 1111010100
//! ```
//!
//! The code table is one line of JSON. JSON string escaping keeps symbols such as newlines,
//! quotes or colons from breaking the header. The payload is the codewords of the input written
//! back to back as '0'/'1' characters, with no padding, separators or length prefix. That makes
//! it about eight times the size of a packed bitstream, in exchange for a plain text container.
//!
pub mod reader;
pub mod writer;

/// First line of the header. Matched by prefix when reading.
pub const HEADER_START: &str = "Header Section start ";
/// Last line of the header. Everything after it is payload.
pub const HEADER_END: &str = "Header Section end ";
