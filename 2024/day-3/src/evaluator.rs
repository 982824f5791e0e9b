use crate::parser::Instruction;

/// Running total plus whether `mul` instructions currently count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub total: u64,
    pub enabled: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            total: 0,
            enabled: true,
        }
    }
}

impl State {
    pub fn next(self, instruction: Instruction) -> Self {
        let next = match instruction {
            Instruction::Multiply(..) if !self.enabled => self,
            Instruction::Multiply(..) => Self {
                total: self.total + instruction.product().unwrap_or_default(),
                ..self
            },
            Instruction::Enable => Self {
                enabled: true,
                ..self
            },
            Instruction::Disable => Self {
                enabled: false,
                ..self
            },
        };
        tracing::trace!(%instruction, total = next.total, enabled = next.enabled);
        next
    }
}

/// Folds the instructions from the initial state, honoring `do()`/`don't()`.
pub fn evaluate(instructions: impl IntoIterator<Item = Instruction>) -> u64 {
    instructions
        .into_iter()
        .fold(State::default(), State::next)
        .total
}

/// Sums every product, as if `do()`/`don't()` were never there.
pub fn sum_products(instructions: impl IntoIterator<Item = Instruction>) -> u64 {
    instructions.into_iter().filter_map(Instruction::product).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::parser::Operand;

    fn mul(a: u16, b: u16) -> Instruction {
        Instruction::Multiply(Operand::new(a).unwrap(), Operand::new(b).unwrap())
    }

    #[test]
    fn starts_enabled_at_zero() {
        assert_eq!(
            State::default(),
            State {
                total: 0,
                enabled: true
            }
        );
    }

    #[rstest]
    #[case(State { total: 5, enabled: true }, mul(3, 4), State { total: 17, enabled: true })]
    #[case(State { total: 5, enabled: false }, mul(3, 4), State { total: 5, enabled: false })]
    #[case(State { total: 5, enabled: false }, Instruction::Enable, State { total: 5, enabled: true })]
    #[case(State { total: 5, enabled: true }, Instruction::Enable, State { total: 5, enabled: true })]
    #[case(State { total: 5, enabled: true }, Instruction::Disable, State { total: 5, enabled: false })]
    #[case(State { total: 5, enabled: false }, Instruction::Disable, State { total: 5, enabled: false })]
    fn transitions(#[case] state: State, #[case] instruction: Instruction, #[case] expected: State) {
        assert_eq!(state.next(instruction), expected);
    }

    #[test]
    fn empty_stream_is_zero() {
        assert_eq!(evaluate(Vec::<Instruction>::new()), 0);
        assert_eq!(sum_products(Vec::<Instruction>::new()), 0);
    }

    #[test]
    fn disabled_until_end_of_stream() {
        let instructions = [mul(2, 2), Instruction::Disable, mul(10, 10), mul(999, 999)];
        assert_eq!(evaluate(instructions), 4);
        assert_eq!(sum_products(instructions), 4 + 100 + 998_001);
    }

    #[test]
    fn toggles_back_on() {
        let instructions = [
            Instruction::Disable,
            mul(2, 3),
            Instruction::Enable,
            mul(4, 5),
        ];
        assert_eq!(evaluate(instructions), 20);
    }

    #[test]
    fn total_does_not_overflow_on_large_streams() {
        let instructions = std::iter::repeat(mul(999, 999)).take(100_000);
        assert_eq!(evaluate(instructions), 998_001 * 100_000);
    }
}
