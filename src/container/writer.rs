use std::io::{self, Write};

use super::{HEADER_END, HEADER_START};
use crate::huffman_coding::code_table::CodeTable;

/// Write a complete container: header start, the code table as a JSON line, header end, then
/// the payload exactly as given.
pub fn write_container<W: Write>(out: &mut W, table: &CodeTable, payload: &str) -> io::Result<()> {
    out.write_all(HEADER_START.as_bytes())?;
    out.write_all(b"\n")?;
    serde_json::to_writer(&mut *out, table.as_map())?;
    out.write_all(b"\n")?;
    out.write_all(HEADER_END.as_bytes())?;
    out.write_all(b"\n")?;
    out.write_all(payload.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::write_container;
    use crate::huffman_coding::code_table::CodeTable;
    use crate::tools::freq_count::freqs_str;

    #[test]
    fn layout_test() {
        let table = CodeTable::from_frequencies(&freqs_str("aaaabbc"));
        let mut out = Vec::new();
        write_container(&mut out, &table, "1111010100").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Header Section start \n{\"a\":\"1\",\"b\":\"01\",\"c\":\"00\"}\nHeader Section end \n1111010100"
        );
    }

    #[test]
    fn empty_table_test() {
        let mut out = Vec::new();
        write_container(&mut out, &CodeTable::default(), "").unwrap();
        assert_eq!(
            out,
            b"Header Section start \n{}\nHeader Section end \n".to_vec()
        );
    }

    #[test]
    fn awkward_symbols_stay_on_one_line_test() {
        let table = CodeTable::from_frequencies(&freqs_str("a\n\"b:"));
        let mut out = Vec::new();
        write_container(&mut out, &table, "").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("\\n"));
    }
}
