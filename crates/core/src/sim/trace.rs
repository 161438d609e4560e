//! Memory-reference trace reading.
//!
//! A trace is plain text holding hexadecimal addresses separated by
//! whitespace, usually one per line:
//!
//! ```text
//! # warm-up
//! 0x0000
//! 0004 0008
//! 1F3C        # trailing comments are ignored
//! ```
//!
//! A `0x`/`0X` prefix is optional and digits may be either case. Everything
//! from `#` to the end of a line is a comment.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::TraceError;

/// Decodes one hexadecimal address token.
///
/// # Errors
///
/// Returns [`TraceError::InvalidAddress`] (with line 0) if the token is
/// empty, contains a non-hex digit, or does not fit in 64 bits.
pub fn parse_address(token: &str) -> Result<u64, TraceError> {
    decode(token).ok_or_else(|| TraceError::InvalidAddress {
        line: 0,
        token: token.to_owned(),
    })
}

fn decode(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    // from_str_radix alone would also accept a leading sign.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Streaming decoder yielding one address per trace token.
///
/// Stops after the first I/O error.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line_no: usize,
    pending: std::vec::IntoIter<String>,
    buf: String,
    done: bool,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending: Vec::new().into_iter(),
            buf: String::new(),
            done: false,
        }
    }

    /// 1-based number of the line most recently read.
    pub const fn line(&self) -> usize {
        self.line_no
    }

    fn refill(&mut self) -> Result<bool, TraceError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        let content = self.buf.split('#').next().unwrap_or_default();
        self.pending = content
            .split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<_>>()
            .into_iter();
        Ok(true)
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<u64, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(decode(&token).ok_or(TraceError::InvalidAddress {
                    line: self.line_no,
                    token,
                }));
            }
            if self.done {
                return None;
            }
            match self.refill() {
                Ok(true) => {}
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Reads every address of a trace file.
///
/// # Errors
///
/// Returns the first I/O or decoding error encountered.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<u64>, TraceError> {
    TraceReader::open(path)?.collect()
}
