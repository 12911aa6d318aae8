use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use log::{debug, info};

use super::encoder::encode_symbols;
use crate::container::writer::write_container;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::HuffmanTree;
use crate::tools::cli::{HuffOpts, Output};
use crate::tools::freq_count::freqs;

/// What one encode run produced, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeStats {
    /// Symbols read from the input
    pub symbols: u64,
    /// Distinct symbols, which is also the number of codewords
    pub distinct: usize,
    /// Payload length in '0'/'1' characters
    pub payload_len: usize,
    /// Bytes written, header included
    pub container_len: usize,
}

impl EncodeStats {
    /// Average codeword length in characters per symbol.
    pub fn avg_code_len(&self) -> f64 {
        if self.symbols == 0 {
            0.0
        } else {
            self.payload_len as f64 / self.symbols as f64
        }
    }
}

/// Encode a seekable text stream into a container written to `output`.
///
/// The input is read twice: once to count symbols and once, after rewinding to the start, to
/// substitute codewords. The container is assembled in memory and only written once both passes
/// have succeeded.
pub fn compress_stream<R, W>(input: &mut R, output: &mut W) -> Result<EncodeStats>
where
    R: Read + Seek,
    W: Write,
{
    let frequencies = freqs(&mut *input)?;

    let tree = HuffmanTree::from_frequencies(&frequencies);
    let table = match &tree {
        Some(tree) => {
            debug!("Tree weight {}, depth {}", tree.weight(), tree.depth());
            tree.log_structure();
            CodeTable::from_tree(tree)
        }
        None => CodeTable::default(),
    };

    input.seek(SeekFrom::Start(0))?;
    let payload = encode_symbols(&mut *input, &table)?;

    let mut container = Vec::with_capacity(payload.len() + 32 * table.len() + 64);
    write_container(&mut container, &table, &payload).map_err(HuffError::Sink)?;
    output.write_all(&container).map_err(HuffError::Sink)?;
    output.flush().map_err(HuffError::Sink)?;

    Ok(EncodeStats {
        symbols: frequencies.values().sum(),
        distinct: table.len(),
        payload_len: payload.len(),
        container_len: container.len(),
    })
}

/// Encode a string into container text.
pub fn encode_str(text: &str) -> Result<String> {
    let mut out = Vec::new();
    compress_stream(&mut Cursor::new(text.as_bytes()), &mut out)?;
    String::from_utf8(out)
        .map_err(|e| HuffError::Sink(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Encode the input file named in opts, writing the container to a file or stdout.
pub fn compress(opts: &HuffOpts) -> Result<EncodeStats> {
    let mut fin = File::open(&opts.file)?;

    // Build the container fully before touching the output, so a failure leaves nothing behind.
    let mut container = Vec::new();
    let stats = compress_stream(&mut fin, &mut container)?;
    write_output(opts, &container)?;

    info!(
        "Encoded {} symbols ({} distinct) into {} code characters, {:.3} per symbol.",
        stats.symbols,
        stats.distinct,
        stats.payload_len,
        stats.avg_code_len()
    );
    Ok(stats)
}

/// Send finished output to stdout or to the output file (created or truncated).
pub(crate) fn write_output(opts: &HuffOpts, data: &[u8]) -> Result<()> {
    match opts.output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(data).map_err(HuffError::Sink)?;
            lock.flush().map_err(HuffError::Sink)
        }
        Output::File => {
            let name = opts.output_name();
            let mut f_out = File::create(&name).map_err(HuffError::Sink)?;
            f_out.write_all(data).map_err(HuffError::Sink)?;
            debug!("Wrote {} bytes to {}", data.len(), name);
            Ok(())
        }
    }
}
