// Line sources feeding the reader.
//
// Byte sources are decoded one line at a time with whatever encoding the
// reader currently declares, so a SET line changes how the following lines
// are read.

use std::io::BufRead;

use encoding_rs::Encoding;

use crate::ReadError;
use crate::encoding::decode_line;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A sequence of affix file lines.
pub trait LineSource {
    /// Next line without its terminator, decoded with `encoding` if the
    /// source holds raw bytes. `None` at end of input.
    fn next_line(&mut self, encoding: &'static Encoding) -> Option<Result<String, ReadError>>;
}

/// Lines that are already text.
#[derive(Debug)]
pub struct TextLines<I>(I);

impl<I> TextLines<I> {
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self(lines.into_iter())
    }
}

impl<I, S> LineSource for TextLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    fn next_line(&mut self, _encoding: &'static Encoding) -> Option<Result<String, ReadError>> {
        self.0.next().map(|line| Ok(line.as_ref().to_string()))
    }
}

/// UTF-8 lines of a buffered reader.
#[derive(Debug)]
pub struct ReaderLines<R>(std::io::Lines<R>);

impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self(reader.lines())
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self, _encoding: &'static Encoding) -> Option<Result<String, ReadError>> {
        self.0.next().map(|line| line.map_err(ReadError::from))
    }
}

/// Raw bytes split on `\n`; a trailing `\r` is dropped and a leading UTF-8
/// byte order mark skipped.
#[derive(Debug)]
pub struct ByteLines<'a> {
    rest: &'a [u8],
}

impl<'a> ByteLines<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            rest: bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes),
        }
    }

    fn next_raw(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }

        let (line, rest) = match self.rest.iter().position(|&b| b == b'\n') {
            Some(end) => (&self.rest[..end], &self.rest[end + 1..]),
            None => (self.rest, &self.rest[self.rest.len()..]),
        };
        self.rest = rest;
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }

    /// Next line decoded with `encoding`. Decoding is lossy, so this never
    /// fails.
    pub fn next_decoded(&mut self, encoding: &'static Encoding) -> Option<String> {
        self.next_raw().map(|line| decode_line(line, encoding))
    }
}

impl LineSource for ByteLines<'_> {
    fn next_line(&mut self, encoding: &'static Encoding) -> Option<Result<String, ReadError>> {
        self.next_decoded(encoding).map(Ok)
    }
}
