use std::io::{self, BufReader, Read};

/// Reads a byte stream one Unicode scalar value at a time.
///
/// Both the counting pass and the encoding pass read through this, so they agree on what a
/// symbol is. Malformed UTF-8 comes back as an `InvalidData` error.
pub struct SymbolReader<R: Read> {
    inner: BufReader<R>,
    /// Byte offset of the next symbol, for error messages.
    offset: usize,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            offset: 0,
        }
    }

    /// Returns the next byte, or None at end of stream.
    fn byte(&mut self) -> io::Result<Option<u8>> {
        let mut b = [0_u8; 1];
        loop {
            match self.inner.read(&mut b) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(b[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn symbol(&mut self) -> io::Result<Option<char>> {
        let lead = match self.byte()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let width = utf8_width(lead).ok_or_else(|| self.invalid(lead))?;

        let mut buf = [lead, 0, 0, 0];
        if width > 1 {
            self.inner.read_exact(&mut buf[1..width]).map_err(|e| {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("truncated UTF-8 sequence at byte {}", self.offset),
                    )
                } else {
                    e
                }
            })?;
        }
        let sym = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| self.invalid(lead))?;
        self.offset += width;
        Ok(Some(sym))
    }

    fn invalid(&self, lead: u8) -> io::Error {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid UTF-8 sequence starting {:#04x} at byte {}", lead, self.offset),
        )
    }
}

impl<R: Read> Iterator for SymbolReader<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.symbol().transpose()
    }
}

/// Encoded length of a UTF-8 sequence from its lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
