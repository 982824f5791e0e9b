use miette::*;
use regex::bytes::Regex;

use crate::parser::{Instruction, Operand};

const PATTERN: &str = r"mul\(([0-9]{1,3}),([0-9]{1,3})\)|do\(\)|don't\(\)";

fn operand(digits: &[u8]) -> Option<Operand> {
    let value = digits
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
    Operand::new(value)
}

/// Finds every instruction in one regex pass over the raw bytes.
#[tracing::instrument(skip(source), fields(len = source.len()))]
pub fn instructions(source: &[u8]) -> Result<Vec<Instruction>> {
    let regex = Regex::new(PATTERN).into_diagnostic()?;

    let instructions = regex
        .captures_iter(source)
        .filter_map(|captures| match &captures[0] {
            b"do()" => Some(Instruction::Enable),
            b"don't()" => Some(Instruction::Disable),
            _ => {
                let a = operand(captures.get(1)?.as_bytes())?;
                let b = operand(captures.get(2)?.as_bytes())?;
                Some(Instruction::Multiply(a, b))
            }
        })
        .collect();

    Ok(instructions)
}
