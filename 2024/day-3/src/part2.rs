use miette::*;

use crate::evaluator::evaluate;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let total = evaluate(crate::instructions(input.as_bytes()));
    tracing::debug!(total);
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!("48", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("don't()mul(2,3)do()mul(4,5)", "20")]
    #[case("mul(2,3)don't()mul(4,5)", "6")]
    #[case("don't()mul(2,3)mul(4,5)", "0")]
    #[case("do()do()mul(1,2)", "2")]
    #[case("don't(mul(2,3)", "6")]
    #[case("dodon't()mul(2,3)", "0")]
    #[case("don'do()mul(2,3)", "6")]
    #[case("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))", "161")]
    fn honors_toggles(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn is_repeatable() -> Result<()> {
        let input = include_str!("../input2.txt");
        assert_eq!(process(input)?, process(input)?);
        Ok(())
    }
}
