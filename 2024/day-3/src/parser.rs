use std::fmt;
use std::iter::FusedIterator;

use itertools::Itertools;

use crate::lexer::Symbol;

/// A `mul` argument: a non-negative integer of at most three decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operand(u16);

impl Operand {
    pub const MAX: u16 = 999;

    pub const fn new(value: u16) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }
        Some(Self(value))
    }
}

impl From<Operand> for u16 {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl From<Operand> for u64 {
    fn from(operand: Operand) -> Self {
        u64::from(operand.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Multiply(Operand, Operand),
    Enable,
    Disable,
}

impl Instruction {
    pub fn product(self) -> Option<u64> {
        match self {
            Instruction::Multiply(a, b) => Some(u64::from(a) * u64::from(b)),
            Instruction::Enable | Instruction::Disable => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Multiply(a, b) => write!(f, "mul({a},{b})"),
            Instruction::Enable => f.write_str("do()"),
            Instruction::Disable => f.write_str("don't()"),
        }
    }
}

/// Tries every instruction pattern at the head of `window`, returning the
/// instruction and how many symbols it spans.
fn match_at(window: &[Symbol<'_>]) -> Option<(Instruction, usize)> {
    use Symbol::*;

    match window {
        [Mul, OpenParen, Int(a), Comma, Int(b), CloseParen, ..] => {
            Some((Instruction::Multiply(a.operand()?, b.operand()?), 6))
        }
        [Do, OpenParen, CloseParen, ..] => Some((Instruction::Enable, 3)),
        [Do, Nt, OpenParen, CloseParen, ..] => Some((Instruction::Disable, 4)),
        _ => None,
    }
}

/// Scans a symbol stream for `mul(N,N)`, `do()` and `don't()`.
///
/// Matches never overlap. Whenever no pattern fits at the cursor, a single
/// symbol is dropped and the scan resumes right after it, so malformed input
/// is skipped without ever failing.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    symbols: Vec<Symbol<'a>>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub fn new(symbols: impl IntoIterator<Item = Symbol<'a>>) -> Self {
        Self {
            symbols: symbols.into_iter().collect_vec(),
            cursor: 0,
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(window) = self.symbols.get(self.cursor..).filter(|w| !w.is_empty()) {
            if let Some((instruction, width)) = match_at(window) {
                tracing::debug!(%instruction, at = self.cursor, "matched");
                self.cursor += width;
                return Some(instruction);
            }
            tracing::trace!(symbol = ?window[0], at = self.cursor, "skipped");
            self.cursor += 1;
        }
        None
    }
}

impl FusedIterator for Parser<'_> {}
