use std::fs::File;
use std::io::{Read, Write};

use log::{debug, info};

use super::compress::write_output;
use super::decoder::decode_payload;
use crate::container::reader::read_container;
use crate::error::{HuffError, Result};
use crate::tools::cli::HuffOpts;

/// Decode a container into text held in memory.
pub fn decode_container<R: Read>(input: R) -> Result<String> {
    let container = read_container(input)?;
    let inverse = container.table.inverse()?;
    debug!("Inverted {} codewords", inverse.len());
    decode_payload(&container.payload, &inverse)
}

/// Decode a container read from `input` and write the restored text to `output`.
/// Returns the number of symbols restored. Nothing is written if decoding fails.
pub fn decompress_stream<R: Read, W: Write>(input: R, output: &mut W) -> Result<usize> {
    let text = decode_container(input)?;
    output.write_all(text.as_bytes()).map_err(HuffError::Sink)?;
    output.flush().map_err(HuffError::Sink)?;
    Ok(text.chars().count())
}

/// Decode container text held in a string.
pub fn decode_str(container: &str) -> Result<String> {
    decode_container(container.as_bytes())
}

/// Decode the container file named in opts, writing the text to a file or stdout.
pub fn decompress(opts: &HuffOpts) -> Result<usize> {
    let fin = File::open(&opts.file)?;
    let text = decode_container(fin)?;
    write_output(opts, text.as_bytes())?;

    let symbols = text.chars().count();
    info!("Decoded {} symbols from {}.", symbols, opts.file);
    Ok(symbols)
}

/// Check that the container file named in opts decodes cleanly. Writes nothing.
pub fn test_container(opts: &HuffOpts) -> Result<usize> {
    let fin = File::open(&opts.file)?;
    let symbols = decode_container(fin)?.chars().count();
    info!("{}: ok, {} symbols.", opts.file, symbols);
    Ok(symbols)
}

#[cfg(test)]
mod test {
    use super::{decode_str, decompress, decompress_stream, test_container};
    use crate::compression::compress::{compress, encode_str};
    use crate::error::HuffError;
    use crate::tools::cli::{HuffOpts, Mode};

    fn round_trip(text: &str) {
        let container = encode_str(text).unwrap();
        assert_eq!(decode_str(&container).unwrap(), text);
    }

    #[test]
    fn scenario_round_trips_test() {
        round_trip("aaaabbc");
        round_trip("zzzz");
        round_trip("");
        round_trip("\n");
    }

    #[test]
    fn text_round_trips_test() {
        round_trip("It was the best of times,\nit was the worst of times.\n\n");
        round_trip("naïve café — 日本語のテキスト 🦀🦀\r\n\ttabs\t");
        round_trip("{\"json\": \"inside\", \"colon:\": 1}\nHeader Section end \n0101");
    }

    #[test]
    fn longer_text_round_trips_test() {
        let text: String = (0..2000)
            .map(|i| char::from(b'a' + ((i * i + 7 * i) % 26) as u8))
            .collect();
        round_trip(&text);
    }

    #[test]
    fn decode_known_container_test() {
        let c = "Header Section start \n{\"a\":\"1\",\"b\":\"01\",\"c\":\"00\"}\nHeader Section end \n1111010100";
        assert_eq!(decode_str(c).unwrap(), "aaaabbc");
    }

    #[test]
    fn payload_on_end_marker_line_test() {
        let c = "Header Section start \n{\"a\":\"1\",\"b\":\"0\"}\nHeader Section end 10";
        assert_eq!(decode_str(c).unwrap(), "ab");

        // Split across lines the newline is not a payload bit.
        let c = "Header Section start \n{\"a\":\"1\",\"b\":\"0\"}\nHeader Section end 1\n0";
        assert!(matches!(
            decode_str(c),
            Err(HuffError::InvalidPayload { found: '\n', pos: 1 })
        ));
    }

    #[test]
    fn missing_end_marker_writes_nothing_test() {
        let c = "Header Section start \n{\"a\":\"1\",\"b\":\"0\"}\n1010";
        let mut out = Vec::new();
        let r = decompress_stream(c.as_bytes(), &mut out);
        assert!(matches!(r, Err(HuffError::MalformedContainer(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_payload_writes_nothing_test() {
        let c = "Header Section start \n{\"a\":\"1\",\"b\":\"01\",\"c\":\"00\"}\nHeader Section end \n11110";
        let mut out = Vec::new();
        let r = decompress_stream(c.as_bytes(), &mut out);
        assert!(matches!(r, Err(HuffError::TruncatedPayload(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn stream_count_test() {
        let c = encode_str("héllo").unwrap();
        let mut out = Vec::new();
        assert_eq!(decompress_stream(c.as_bytes(), &mut out).unwrap(), 5);
        assert_eq!(out, "héllo".as_bytes());
    }

    #[test]
    fn file_round_trip_test() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("poem.txt");
        let text = "Tyger Tyger, burning bright,\nIn the forests of the night;\n";
        std::fs::write(&input, text).unwrap();
        compress(&HuffOpts::new(input.to_str().unwrap())).unwrap();

        let packed = dir.path().join("poem.txt.huff");
        let restored = dir.path().join("restored.txt");
        let mut opts = HuffOpts::new(packed.to_str().unwrap());
        opts.op_mode = Mode::Decode;
        opts.out_file = Some(restored.to_str().unwrap().to_string());
        assert_eq!(decompress(&opts).unwrap(), text.chars().count());
        assert_eq!(std::fs::read_to_string(&restored).unwrap(), text);
    }

    #[test]
    fn output_is_truncated_test() {
        let dir = tempfile::tempdir().unwrap();
        let packed = dir.path().join("short.huff");
        std::fs::write(&packed, encode_str("ab").unwrap()).unwrap();
        let target = dir.path().join("short");
        std::fs::write(&target, "a much longer file that was here before").unwrap();

        let mut opts = HuffOpts::new(packed.to_str().unwrap());
        opts.op_mode = Mode::Decode;
        decompress(&opts).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "ab");
    }

    #[test]
    fn test_mode_test() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.huff");
        std::fs::write(&good, encode_str("abcabc").unwrap()).unwrap();
        let mut opts = HuffOpts::new(good.to_str().unwrap());
        opts.op_mode = Mode::Test;
        assert_eq!(test_container(&opts).unwrap(), 6);
        assert!(!dir.path().join("good").exists());

        let bad = dir.path().join("bad.huff");
        std::fs::write(&bad, "Header Section start \n{}\n").unwrap();
        let opts = HuffOpts::new(bad.to_str().unwrap());
        assert!(matches!(
            test_container(&opts),
            Err(HuffError::MalformedContainer(_))
        ));
    }
}
