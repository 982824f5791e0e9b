use chumsky::prelude::*;
use miette::*;

use crate::parser::{Instruction, Operand};

/// Defines the scanner using Chumsky combinators.
///
/// Each position either starts one of the three instructions or is skipped as
/// a single character of noise, so the grammar accepts any input.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Instruction>, extra::Err<Rich<'a, char>>> {
    let operand = any()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .at_most(3)
        .to_slice()
        .from_str::<u16>()
        .unwrapped()
        .try_map(|value, span| {
            Operand::new(value).ok_or_else(|| Rich::custom(span, "operand out of range"))
        });

    let multiply = just("mul(")
        .ignore_then(operand.clone())
        .then_ignore(just(','))
        .then(operand)
        .then_ignore(just(')'))
        .map(|(a, b)| Instruction::Multiply(a, b));
    let enable = just("do()").to(Instruction::Enable);
    let disable = just("don't()").to(Instruction::Disable);

    choice((multiply, enable, disable))
        .map(Some)
        .or(any().to(None))
        .repeated()
        .collect::<Vec<_>>()
        .map(|found| found.into_iter().flatten().collect())
}

#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn instructions(input: &str) -> Result<Vec<Instruction>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed with errors: {:?}", e))
}
