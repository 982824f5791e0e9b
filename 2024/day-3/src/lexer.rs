use crate::parser::Operand;
use crate::tokenizer::{Keyword, Token, Tokenizer};

/// A run of ASCII digits, remembered with its width so that `0001` and `1`
/// stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    pub value: u64,
    pub digits: usize,
}

impl Number {
    const MAX_OPERAND_DIGITS: usize = 3;

    fn from_ascii(span: &[u8]) -> Option<Self> {
        if span.is_empty() || !span.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let value = span.iter().try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        })?;
        Some(Self {
            value,
            digits: span.len(),
        })
    }

    /// The number as a `mul` argument, if it is written with one to three digits.
    pub fn operand(self) -> Option<Operand> {
        if self.digits > Self::MAX_OPERAND_DIGITS {
            return None;
        }
        u16::try_from(self.value).ok().and_then(Operand::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'a> {
    Mul,
    Do,
    Nt,
    OpenParen,
    CloseParen,
    Comma,
    Int(Number),
    /// Filler that no instruction can ever match.
    Text(&'a [u8]),
}

pub fn lex(token: Token<'_>) -> Symbol<'_> {
    match token {
        Token::Keyword(Keyword::Mul) => Symbol::Mul,
        Token::Keyword(Keyword::Do) => Symbol::Do,
        Token::Keyword(Keyword::Nt) => Symbol::Nt,
        Token::Keyword(Keyword::OpenParen) => Symbol::OpenParen,
        Token::Keyword(Keyword::CloseParen) => Symbol::CloseParen,
        Token::Keyword(Keyword::Comma) => Symbol::Comma,
        Token::Literal(span) => match Number::from_ascii(span) {
            Some(number) => Symbol::Int(number),
            None => Symbol::Text(span),
        },
    }
}

/// Tokenizes and lexes `source` in one lazy pass.
pub fn symbols(source: &[u8]) -> impl Iterator<Item = Symbol<'_>> {
    Tokenizer::new(source).map(lex)
}
