//! Day 3: Mull It Over.
//!
//! The corrupted memory is run through a small pipeline: the [`tokenizer`]
//! splits raw bytes on keywords, the [`lexer`] turns tokens into symbols, the
//! [`parser`] picks `mul(N,N)`, `do()` and `don't()` out of the symbol stream
//! and the [`evaluator`] folds the resulting instructions into a total.
//!
//! [`scanner`] and [`combinator`] recognize the same instructions with a
//! regex and with Chumsky respectively; they are kept to cross-check the
//! pipeline.

pub mod combinator;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod tokenizer;

pub mod part1;
pub mod part2;

use parser::Parser;

/// Lazily yields every instruction hidden in `source`, in order.
pub fn instructions(source: &[u8]) -> Parser<'_> {
    Parser::new(lexer::symbols(source))
}
