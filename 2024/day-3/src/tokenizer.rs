use std::iter::FusedIterator;

/// The structural markers the tokenizer splits the corrupted memory on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Mul,
    Do,
    Nt,
    OpenParen,
    Comma,
    CloseParen,
}

impl Keyword {
    /// Every keyword, in the order they are tried against the scan buffer.
    ///
    /// No keyword's suffix is a prefix of another, so at most one of them can
    /// end the buffer at any time and the order never changes the result.
    pub const ALL: [Keyword; 6] = [
        Keyword::Mul,
        Keyword::Do,
        Keyword::Nt,
        Keyword::OpenParen,
        Keyword::Comma,
        Keyword::CloseParen,
    ];

    pub const fn pattern(self) -> &'static [u8] {
        match self {
            Keyword::Mul => b"mul",
            Keyword::Do => b"do",
            Keyword::Nt => b"n't",
            Keyword::OpenParen => b"(",
            Keyword::Comma => b",",
            Keyword::CloseParen => b")",
        }
    }

    fn terminating(buffer: &[u8]) -> Option<Keyword> {
        Keyword::ALL
            .into_iter()
            .find(|keyword| buffer.ends_with(keyword.pattern()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Keyword(Keyword),
    /// Bytes found between two keywords. Never empty.
    Literal(&'a [u8]),
}

/// Splits a byte source into keywords and the literal spans between them.
///
/// Bytes are pulled one at a time into a scan buffer (a window of the source
/// starting at `start`). As soon as the buffer ends with a keyword, whatever
/// came before it is emitted as a literal, followed by the keyword itself,
/// and the buffer starts over. Leftover bytes at the end of the source become
/// one final literal.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a [u8],
    start: usize,
    cursor: usize,
    pending: Option<Keyword>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            start: 0,
            cursor: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(keyword) = self.pending.take() {
            return Some(Token::Keyword(keyword));
        }

        while self.cursor < self.source.len() {
            self.cursor += 1;
            let buffer = &self.source[self.start..self.cursor];

            if let Some(keyword) = Keyword::terminating(buffer) {
                let literal = &buffer[..buffer.len() - keyword.pattern().len()];
                self.start = self.cursor;

                if literal.is_empty() {
                    return Some(Token::Keyword(keyword));
                }
                self.pending = Some(keyword);
                return Some(Token::Literal(literal));
            }
        }

        if self.start < self.cursor {
            let literal = &self.source[self.start..self.cursor];
            self.start = self.cursor;
            return Some(Token::Literal(literal));
        }

        None
    }
}

impl FusedIterator for Tokenizer<'_> {}
