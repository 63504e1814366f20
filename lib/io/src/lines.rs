//! Lazy line-by-line reading
//!
//! [`LineReader`] is a single-pass iterator: once the underlying reader is
//! exhausted, fails, or is closed, it is dropped and the iterator yields
//! `None` forever.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

/// Forward-only iterator over the lines of a reader
///
/// A line ends at `\n`, `\r\n` or a lone `\r`; the terminator is stripped.
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// failing the read.
#[derive(Debug)]
pub struct LineReader<B> {
    reader: Option<B>,
    buf: Vec<u8>,
    // Previous line ended on '\r'; a '\n' right after it belongs to that line
    skip_lf: bool,
}

impl LineReader<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<B: BufRead> LineReader<B> {
    #[inline]
    #[must_use]
    pub fn new(reader: B) -> Self {
        Self {
            reader: Some(reader),
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    /// Release the underlying reader; later calls to `next` return `None`
    #[inline]
    pub fn close(&mut self) {
        self.reader = None;
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }
}

/// Append the next line of `reader` to `buf`, without its terminator
///
/// Returns `false` at end of input when no byte was read.
fn read_line_bytes<B: BufRead>(reader: &mut B, buf: &mut Vec<u8>, skip_lf: &mut bool) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if chunk.is_empty() {
            return Ok(read_any);
        }

        let mut start = 0;
        if *skip_lf {
            *skip_lf = false;
            if chunk[0] == b'\n' {
                start = 1;
            }
        }

        match chunk[start..].iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                let end = start + pos;
                buf.extend_from_slice(&chunk[start..end]);
                *skip_lf = chunk[end] == b'\r';
                reader.consume(end + 1);
                return Ok(true);
            }
            None => {
                buf.extend_from_slice(&chunk[start..]);
                read_any |= chunk.len() > start;
                let len = chunk.len();
                reader.consume(len);
            }
        }
    }
}

impl<B: BufRead> Iterator for LineReader<B> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;

        self.buf.clear();
        match read_line_bytes(reader, &mut self.buf, &mut self.skip_lf) {
            Ok(true) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Ok(false) => {
                self.close();
                None
            }
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl<B: BufRead> FusedIterator for LineReader<B> {}
