use std::io::Read;

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::symbol_reader::SymbolReader;

/// Replace every symbol of the input with its codeword. A symbol missing from the table is a
/// hard error rather than an empty substitution.
pub fn encode_symbols<R: Read>(input: R, table: &CodeTable) -> Result<String> {
    let mut payload = String::new();
    for sym in SymbolReader::new(input) {
        let sym = sym?;
        let code = table.code(sym).ok_or(HuffError::UnmappableSymbol(sym))?;
        payload.push_str(code);
    }
    Ok(payload)
}

#[cfg(test)]
mod test {
    use super::encode_symbols;
    use crate::error::HuffError;
    use crate::huffman_coding::code_table::CodeTable;
    use crate::tools::freq_count::freqs_str;

    #[test]
    fn basic_test() {
        let table = CodeTable::from_frequencies(&freqs_str("aaaabbc"));
        let payload = encode_symbols("aaaabbc".as_bytes(), &table).unwrap();
        assert_eq!(payload, "1111010100");
    }

    #[test]
    fn unmappable_test() {
        let table = CodeTable::from_frequencies(&freqs_str("ab"));
        let r = encode_symbols("abc".as_bytes(), &table);
        assert!(matches!(r, Err(HuffError::UnmappableSymbol('c'))));
    }

    #[test]
    fn empty_test() {
        let payload = encode_symbols("".as_bytes(), &CodeTable::default()).unwrap();
        assert!(payload.is_empty());
    }
}
