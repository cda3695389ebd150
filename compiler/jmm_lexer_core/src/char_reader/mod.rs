//! Line-counted character source with newline normalization.
//!
//! [`CharReader`] pulls characters one at a time from an underlying
//! [`io::Read`], collapsing every platform line-ending convention (`\r\n`,
//! lone `\r`, `\n`) to a single logical `'\n'` so that downstream line
//! counting and grammar rules see one convention. End of input is signalled
//! with the [`EOF_CHAR`] sentinel rather than an `Option`, so the tokenizer's
//! lookahead is always a plain `char`.
//!
//! # Line numbers
//!
//! [`current_line()`](CharReader::current_line) is the 1-based line of the
//! character most recently returned. A returned `'\n'` belongs to the line it
//! terminates; the character after it is the first of the next line. Line
//! numbers are monotonically non-decreasing.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use thiserror::Error;

/// End-of-input sentinel.
///
/// `'\0'` is outside the j-- source alphabet, so a lookahead holding this
/// value is unambiguous. Interior NUL bytes in input are indistinguishable
/// from end of input by design; j-- source files do not contain them.
pub const EOF_CHAR: char = '\0';

/// Failure to produce the next character from the underlying input.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed.
    #[error("unable to read characters from input: {0}")]
    Io(#[from] io::Error),
    /// The input bytes do not form valid UTF-8.
    #[error("input is not valid UTF-8 near line {line}")]
    InvalidUtf8 { line: u32 },
}

/// A line-counted, newline-normalizing character source.
///
/// Opened once at construction and released exactly once via
/// [`close()`](Self::close). The scanner owns its reader exclusively; no
/// other component reads from it.
pub struct CharReader<R = BufReader<File>> {
    input: R,
    source_id: String,
    /// One byte of pushback, fed by CRLF normalization.
    pending: Option<u8>,
    /// Line of the next character to be returned.
    next_line: u32,
    /// Line of the most recently returned character.
    current_line: u32,
    at_eof: bool,
}

impl CharReader<BufReader<File>> {
    /// Open a file-backed reader.
    ///
    /// The path's display string becomes the source identifier used in
    /// diagnostics.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl<R: Read> CharReader<R> {
    /// Wrap any byte source.
    ///
    /// In-memory input (`&[u8]` implements [`Read`]) goes through the exact
    /// same normalization and counting as file input, which is what the
    /// lexer's tests rely on.
    pub fn new(input: R, source_id: impl Into<String>) -> Self {
        CharReader {
            input,
            source_id: source_id.into(),
            pending: None,
            next_line: 1,
            current_line: 1,
            at_eof: false,
        }
    }

    /// Return the next character, or [`EOF_CHAR`] once input is exhausted.
    ///
    /// `\r\n` pairs and lone `\r` are both returned as a single `'\n'`.
    /// Once [`EOF_CHAR`] has been returned it is returned on every
    /// subsequent call.
    pub fn next_char(&mut self) -> Result<char, SourceError> {
        if self.at_eof {
            return Ok(EOF_CHAR);
        }
        let Some(first) = self.read_byte()? else {
            self.at_eof = true;
            self.current_line = self.next_line;
            return Ok(EOF_CHAR);
        };

        let mut c = if first < 0x80 {
            char::from(first)
        } else {
            self.decode_multibyte(first)?
        };

        if c == '\r' {
            // Carriage return: swallow a following '\n' if present, then
            // report a single logical newline either way.
            match self.read_byte()? {
                Some(b'\n') | None => {}
                Some(other) => self.pending = Some(other),
            }
            c = '\n';
        }

        self.current_line = self.next_line;
        if c == '\n' {
            self.next_line += 1;
        }
        Ok(c)
    }

    /// 1-based line number of the character most recently returned.
    ///
    /// Before any character has been read this is line 1.
    pub fn current_line(&self) -> u32 {
        self.current_line
    }

    /// Stable identifier of the input resource, for diagnostics.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Release the underlying input handle.
    ///
    /// Must be called exactly once on every exit path, whether scanning ran
    /// to completion or was abandoned.
    pub fn close(self) -> io::Result<()> {
        drop(self.input);
        Ok(())
    }

    /// Pull one byte, honoring pushback and retrying on interruption.
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.pending.take() {
            return Ok(Some(b));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Decode a multi-byte UTF-8 sequence whose leading byte has been read.
    fn decode_multibyte(&mut self, first: u8) -> Result<char, SourceError> {
        let width = utf8_char_width(first);
        if width == 1 {
            // Continuation byte or invalid leading byte in leading position.
            return Err(SourceError::InvalidUtf8 {
                line: self.next_line,
            });
        }
        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => {
                    return Err(SourceError::InvalidUtf8 {
                        line: self.next_line,
                    })
                }
            }
        }
        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => s.chars().next().ok_or(SourceError::InvalidUtf8 {
                line: self.next_line,
            }),
            Err(_) => Err(SourceError::InvalidUtf8 {
                line: self.next_line,
            }),
        }
    }
}

/// Number of bytes in the UTF-8 sequence starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
