use log::trace;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::InverseTable;

/// Turn a payload back into text by growing a candidate codeword one character at a time and
/// emitting a symbol as soon as the candidate is in the table. Because the table is a prefix
/// code the first match is the only possible one.
///
/// A candidate that reaches the longest codeword length without matching can never match, so
/// decoding stops there instead of reading on to the end of the payload.
pub fn decode_payload(payload: &str, inverse: &InverseTable) -> Result<String> {
    let max_len = inverse.keys().map(String::len).max().unwrap_or(0);
    let mut decoded = String::with_capacity(payload.len() / 4);
    let mut acc = String::with_capacity(max_len);

    for (pos, bit) in payload.chars().enumerate() {
        if bit != '0' && bit != '1' {
            return Err(HuffError::InvalidPayload { found: bit, pos });
        }
        acc.push(bit);
        if let Some(&sym) = inverse.get(acc.as_str()) {
            decoded.push(sym);
            acc.clear();
        } else if acc.len() >= max_len {
            return Err(HuffError::UnknownCodeword { bits: acc, pos });
        }
    }

    if !acc.is_empty() {
        trace!("Payload ended mid codeword after {} symbols", decoded.chars().count());
        return Err(HuffError::TruncatedPayload(acc));
    }
    Ok(decoded)
}
