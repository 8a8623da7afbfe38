//! [`Tokenizer`] implementation: a trivia-skipping scanner over source text.

use crate::ast::Tokenizer;

/// Scans source text for significant tokens, skipping whitespace and
/// comments, and maps offsets to line numbers via a line-break table.
pub struct TriviaScanner<'a> {
    source: &'a str,
    pos: usize,
    token_start: usize,
    line_starts: Vec<usize>,
}

impl<'a> TriviaScanner<'a> {
    /// Create a scanner over the given source text.
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            source,
            pos: 0,
            token_start: 0,
            line_starts,
        }
    }
}

impl Tokenizer for TriviaScanner<'_> {
    fn seek(&mut self, offset: usize) {
        self.pos = offset.min(self.source.len());
    }

    fn scan(&mut self) {
        let bytes = self.source.as_bytes();
        let mut pos = self.pos;
        while pos < bytes.len() {
            match bytes[pos] {
                b' ' | b'\t' | b'\r' | b'\n' => pos += 1,
                b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                    while pos < bytes.len() && bytes[pos] != b'\n' {
                        pos += 1;
                    }
                }
                b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                    pos += 2;
                    while pos + 1 < bytes.len() && !(bytes[pos] == b'*' && bytes[pos + 1] == b'/') {
                        pos += 1;
                    }
                    pos = (pos + 2).min(bytes.len());
                }
                _ => break,
            }
        }
        self.pos = pos;
        self.token_start = pos;
    }

    fn token_start(&self) -> usize {
        self.token_start
    }

    fn line_number(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }
}
