use std::collections::BTreeMap;
use std::io::Read;

use log::debug;

use super::symbol_reader::SymbolReader;
use crate::error::Result;

/// Symbol counts for one input. Keyed in symbol order so every walk over it is repeatable.
pub type FrequencyTable = BTreeMap<char, u64>;

/// Returns a frequency count of every symbol in the input stream. Newlines are counted like any
/// other symbol. Read and UTF-8 failures are passed back to the caller.
pub fn freqs<R: Read>(input: R) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    for sym in SymbolReader::new(input) {
        *table.entry(sym?).or_insert(0) += 1;
    }
    debug!(
        "Counted {} symbols, {} distinct",
        table.values().sum::<u64>(),
        table.len()
    );
    Ok(table)
}

/// Frequency count of an in-memory string.
pub fn freqs_str(text: &str) -> FrequencyTable {
    text.chars().fold(FrequencyTable::new(), |mut acc, sym| {
        *acc.entry(sym).or_insert(0) += 1;
        acc
    })
}
