use std::collections::BTreeMap;
use std::io::{BufReader, Read};

use log::debug;

use super::{HEADER_END, HEADER_START};
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// The two halves of a container once it has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub table: CodeTable,
    pub payload: String,
}

/// Read the whole container from a stream and split it into table and payload.
pub fn read_container<R: Read>(input: R) -> Result<Container> {
    let mut text = String::new();
    BufReader::new(input).read_to_string(&mut text)?;
    parse_container(&text)
}

/// Split container text into its code table and payload.
///
/// Lines before the start marker are ignored. Lines between the markers are joined and parsed as
/// the table. Everything after the end marker text is the payload, with surrounding whitespace
/// trimmed.
pub fn parse_container(text: &str) -> Result<Container> {
    let start = HEADER_START.trim_end();
    let end = HEADER_END.trim_end();

    let mut lines = text.split_inclusive('\n');
    let mut consumed = 0;

    loop {
        let line = lines.next().ok_or_else(|| {
            HuffError::MalformedContainer("missing header start marker".to_string())
        })?;
        consumed += line.len();
        if line.starts_with(start) {
            break;
        }
        if line.starts_with(end) {
            return Err(HuffError::MalformedContainer(
                "header end marker comes before header start".to_string(),
            ));
        }
    }

    let mut table_text = String::new();
    loop {
        let line = lines.next().ok_or_else(|| {
            HuffError::MalformedContainer("missing header end marker".to_string())
        })?;
        if line.starts_with(end) {
            // The payload starts straight after the marker text, even on the same line.
            consumed += end.len();
            break;
        }
        consumed += line.len();
        if line.starts_with(start) {
            return Err(HuffError::MalformedContainer(
                "second header start marker inside header".to_string(),
            ));
        }
        table_text.push_str(line.trim_end_matches(|c: char| c == '\n' || c == '\r'));
    }

    let codes: BTreeMap<char, String> = serde_json::from_str(&table_text)
        .map_err(|e| HuffError::TableDeserialization(e.to_string()))?;
    let table = CodeTable::from_codes(codes)?;
    let payload = text[consumed..].trim().to_string();
    debug!(
        "Read container: {} codewords, {} payload characters",
        table.len(),
        payload.len()
    );

    Ok(Container { table, payload })
}
