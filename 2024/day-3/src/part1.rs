use miette::*;

use crate::evaluator::sum_products;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let total = sum_products(crate::instructions(input.as_bytes()));
    tracing::debug!(total);
    Ok(total.to_string())
}
