//! Error type shared by every stage of the encode and decode pipelines.
//!
//! Nothing is retried or recovered. Each failure is raised where it is detected and carried up to
//! the caller, which writes no output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HuffError {
    /// The input could not be opened, read, or decoded as UTF-8.
    #[error("input unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    /// Header markers missing or out of order.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    /// The code table between the header markers did not parse or is not a valid prefix code.
    #[error("bad code table: {0}")]
    TableDeserialization(String),

    /// A symbol read during encoding has no codeword. Usually means the input changed
    /// between the counting pass and the encoding pass.
    #[error("symbol {0:?} has no codeword")]
    UnmappableSymbol(char),

    /// The payload ended part way through a codeword.
    #[error("payload ends with unmatched bits {0:?}")]
    TruncatedPayload(String),

    /// Payload bits that grew as long as the longest codeword without matching one.
    #[error("payload bits {bits:?} ending at position {pos} match no codeword")]
    UnknownCodeword { bits: String, pos: usize },

    /// A payload character other than '0' or '1'.
    #[error("invalid payload character {found:?} at position {pos}")]
    InvalidPayload { found: char, pos: usize },

    /// The output sink refused the write.
    #[error("cannot write output: {0}")]
    Sink(std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffError>;
